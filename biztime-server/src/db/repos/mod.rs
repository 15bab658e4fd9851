//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one method to one statement.
//! Mutations use `RETURNING` so callers get the affected row back without a
//! second query; zero returned rows become `DbError::NotFound`.

pub mod companies;
pub mod invoices;

pub use companies::{Company, CompanyRepo};
pub use invoices::{Invoice, InvoiceRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with {key} of {id} not found")]
    NotFound {
        resource: &'static str,
        key: &'static str,
        id: String,
    },
}

impl DbError {
    pub(crate) fn company_not_found(code: &str) -> Self {
        Self::NotFound {
            resource: "Company",
            key: "code",
            id: code.to_owned(),
        }
    }

    pub(crate) fn invoice_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Invoice",
            key: "id",
            id: id.to_string(),
        }
    }
}
