//! Route handlers organized by resource

use serde::Serialize;

use crate::http::error::ApiError;

pub mod health;
pub mod companies;
pub mod invoices;

/// Unknown paths, and known paths hit with an unsupported method
pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Body returned by every successful DELETE
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { message: "Deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
