//! Invoice input shapes

use serde_json::Value;

use super::validation::{number_field, require_fields, string_field};
use super::ValidationError;

/// Body of `POST /invoices`
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

impl NewInvoice {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        require_fields(body, &["comp_code", "amt"])?;
        Ok(Self {
            comp_code: string_field(body, "comp_code")?,
            amt: number_field(body, "amt")?,
        })
    }
}

/// Body of `PATCH /invoices/{id}`. Only the amount can change.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceUpdate {
    pub amt: f64,
}

impl InvoiceUpdate {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        Ok(Self {
            amt: number_field(body, "amt")?,
        })
    }
}
