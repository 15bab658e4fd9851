//! Request input models, validated at construction
//!
//! Handlers build these from the raw JSON body before touching the
//! database. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod company;
pub mod invoice;

pub use validation::{require_field, require_fields, ValidationError};
pub use company::{CompanyDetail, CompanyUpdate, NewCompany};
pub use invoice::{InvoiceUpdate, NewInvoice};
