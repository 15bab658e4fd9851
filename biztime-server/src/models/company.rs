//! Company input and output shapes

use serde::Serialize;
use serde_json::Value;

use super::validation::{require_fields, string_field};
use super::ValidationError;
use crate::db::Company;

/// Body of `POST /companies`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl NewCompany {
    /// Requires `code`, then `name` and `description`.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        require_fields(body, &["code", "name", "description"])?;
        Ok(Self {
            code: string_field(body, "code")?,
            name: string_field(body, "name")?,
            description: string_field(body, "description")?,
        })
    }
}

/// Body of `PATCH /companies/{code}`. Both fields are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyUpdate {
    pub name: String,
    pub description: String,
}

impl CompanyUpdate {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        require_fields(body, &["name", "description"])?;
        Ok(Self {
            name: string_field(body, "name")?,
            description: string_field(body, "description")?,
        })
    }
}

/// A company together with the ids of its invoices
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_company_from_full_body() {
        let body = json!({
            "code": "appl",
            "name": "Apple Inc.",
            "description": "They make things."
        });
        let company = NewCompany::from_body(&body).unwrap();
        assert_eq!(company.code, "appl");
        assert_eq!(company.name, "Apple Inc.");
        assert_eq!(company.description, "They make things.");
    }

    #[test]
    fn new_company_checks_code_first() {
        let err = NewCompany::from_body(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Body of request is missing code");
    }

    #[test]
    fn update_ignores_code_in_body() {
        let body = json!({ "code": "other", "name": "N", "description": "D" });
        let update = CompanyUpdate::from_body(&body).unwrap();
        assert_eq!(update.name, "N");
    }

    #[test]
    fn update_requires_description() {
        let err = CompanyUpdate::from_body(&json!({ "name": "N", "description": "" })).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "description" });
    }

    #[test]
    fn detail_flattens_company() {
        let detail = CompanyDetail {
            company: Company {
                code: "appl".into(),
                name: "Apple Inc.".into(),
                description: "They make things.".into(),
            },
            invoices: vec![],
        };
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "code": "appl",
                "name": "Apple Inc.",
                "description": "They make things.",
                "invoices": []
            })
        );
    }
}
