//! Request body validation
//!
//! Required fields are checked against the raw JSON body before it is
//! turned into typed input. A field counts as missing when it is absent or
//! falsy: `null`, `false`, `0` or `""`.

use std::fmt;

use serde_json::Value;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field is absent or falsy
    MissingField { field: &'static str },

    /// Field is present but has the wrong JSON type
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Body could not be read as JSON at all
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Body of request is missing {}", field),
            Self::InvalidType { field, expected } => {
                write!(f, "Body of request has invalid {}: expected {}", field, expected)
            }
            Self::MalformedBody { reason } => write!(f, "Body of request is not valid JSON: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Fail with `MissingField` unless `field` is present and truthy.
pub fn require_field<'a>(body: &'a Value, field: &'static str) -> Result<&'a Value, ValidationError> {
    match body.get(field) {
        Some(value) if is_truthy(value) => Ok(value),
        _ => Err(ValidationError::MissingField { field }),
    }
}

/// Check every field in order, stopping at the first missing one.
pub fn require_fields(body: &Value, fields: &[&'static str]) -> Result<(), ValidationError> {
    for field in fields {
        require_field(body, *field)?;
    }
    Ok(())
}

/// Text column value. Scalars are taken as their text form (`3` is `"3"`),
/// the way Postgres casts them into a text column.
pub(crate) fn string_field(body: &Value, field: &'static str) -> Result<String, ValidationError> {
    match require_field(body, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ValidationError::InvalidType { field, expected: "string" }),
    }
}

/// Numeric column value. A string holding a finite number (`"50"`) is
/// accepted, anything else is rejected.
pub(crate) fn number_field(body: &Value, field: &'static str) -> Result<f64, ValidationError> {
    let invalid = ValidationError::InvalidType { field, expected: "number" };
    match require_field(body, field)? {
        Value::Number(n) => n.as_f64().ok_or(invalid),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or(invalid),
        _ => Err(invalid),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_field_message() {
        let err = ValidationError::MissingField { field: "code" };
        assert_eq!(err.to_string(), "Body of request is missing code");
    }

    #[test]
    fn present_field_passes() {
        let body = json!({ "code": "appl" });
        assert_eq!(require_field(&body, "code").unwrap(), &json!("appl"));
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            let body = json!({ "amt": value });
            let err = require_field(&body, "amt").unwrap_err();
            assert_eq!(err, ValidationError::MissingField { field: "amt" });
        }
    }

    #[test]
    fn non_object_body_has_no_fields() {
        let err = require_field(&json!(["code"]), "code").unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "code" }));
    }

    #[test]
    fn require_fields_reports_first_missing() {
        let body = json!({ "name": "Apple" });
        let err = require_fields(&body, &["code", "name", "description"]).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "code" });

        let err = require_fields(&body, &["name", "description"]).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "description" });
    }

    #[test]
    fn scalars_coerce_like_column_casts() {
        let body = json!({ "name": 12, "description": true, "amt": " 50.5 ", "whole": "7" });
        assert_eq!(string_field(&body, "name").unwrap(), "12");
        assert_eq!(string_field(&body, "description").unwrap(), "true");
        assert_eq!(number_field(&body, "amt").unwrap(), 50.5);
        assert_eq!(number_field(&body, "whole").unwrap(), 7.0);
    }

    #[test]
    fn uncoercible_values_are_rejected() {
        let body = json!({ "name": ["Apple"], "amt": "lots", "inf": "inf", "flag": true });
        assert!(matches!(
            string_field(&body, "name"),
            Err(ValidationError::InvalidType { field: "name", expected: "string" })
        ));
        for field in ["amt", "inf", "flag"] {
            assert!(matches!(
                number_field(&body, field),
                Err(ValidationError::InvalidType { expected: "number", .. })
            ));
        }
    }
}
