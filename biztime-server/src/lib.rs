//! biztime-server: HTTP CRUD service for companies and invoices
//!
//! Thin layer over Postgres: each endpoint validates its JSON body,
//! runs one parameterized statement per step, and maps the result to a
//! JSON response or a structured error.

pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
