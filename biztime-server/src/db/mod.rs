//! Database layer - connection pool and repositories
//!
//! - One shared `PgPool`, cloned into handlers, never wrapped in a lock
//! - One parameterized statement per repository call, autocommit only
//! - Rely on DB constraints (primary key, foreign key) instead of
//!   check-then-insert

pub mod pool;
pub mod repos;

pub use pool::{close_pool, create_pool, create_pool_with_options, ping};
pub use repos::*;
