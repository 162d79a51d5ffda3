use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::model::inquiry::{Budget, Timeline};

/// Body of POST /api/contact
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,

    pub company: Option<String>,

    pub service: Option<String>,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,

    #[validate(length(min = 1, message = "reCAPTCHA validation failed"))]
    #[serde(rename = "recaptchaToken")]
    pub recaptcha_token: String,
}

/// Body of POST /api/quote
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 characters"))]
    pub phone: String,

    pub company: Option<String>,

    #[validate(length(min = 1, message = "Please select at least one service"))]
    pub services: Vec<String>,

    #[validate(length(min = 20, message = "Project description must be at least 20 characters"))]
    pub description: String,

    #[validate(custom(function = validate_timeline))]
    pub timeline: String,

    #[validate(custom(function = validate_budget))]
    pub budget: String,

    #[validate(length(min = 1, message = "reCAPTCHA validation failed"))]
    #[serde(rename = "recaptchaToken")]
    pub recaptcha_token: String,
}

fn validate_timeline(value: &str) -> Result<(), ValidationError> {
    if Timeline::from_str(value).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("timeline");
    err.message = Some("Invalid timeline selection".into());
    Err(err)
}

fn validate_budget(value: &str) -> Result<(), ValidationError> {
    if Budget::from_str(value).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("budget");
    err.message = Some("Invalid budget selection".into());
    Err(err)
}

/// One violated constraint, tagged with the offending field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flatten validator output into a field-tagged list the frontend can render
/// next to each input. Every violated constraint is reported, not just the first.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    flattened.sort_by(|a, b| a.field.cmp(&b.field));
    flattened
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            company: None,
            service: None,
            message: "I need a quote for a small warehouse roof repair.".to_string(),
            recaptcha_token: "valid-token".to_string(),
        }
    }

    fn valid_quote() -> QuoteRequest {
        QuoteRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "0244000000".to_string(),
            company: Some("Doe Mining Ltd".to_string()),
            services: vec!["Civil Works".to_string()],
            description: "Access road rehabilitation for a mine site, roughly 4km.".to_string(),
            timeline: "1-3_months".to_string(),
            budget: "100k-500k".to_string(),
            recaptcha_token: "valid-token".to_string(),
        }
    }

    #[test]
    fn test_valid_contact_passes() {
        assert!(valid_contact().validate().is_ok());
    }

    #[test]
    fn test_contact_short_name_rejected() {
        let mut req = valid_contact();
        req.name = "J".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "name");
        assert_eq!(fields[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_contact_reports_every_violation() {
        let mut req = valid_contact();
        req.name = "J".to_string();
        req.email = "not-an-email".to_string();
        req.message = "too short".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["email", "message", "name"]);
    }

    #[test]
    fn test_contact_empty_token_rejected() {
        let mut req = valid_contact();
        req.recaptcha_token = "".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields[0].field, "recaptcha_token");
        assert_eq!(fields[0].message, "reCAPTCHA validation failed");
    }

    #[test]
    fn test_valid_quote_passes() {
        assert!(valid_quote().validate().is_ok());
    }

    #[test]
    fn test_quote_empty_services_rejected() {
        let mut req = valid_quote();
        req.services = vec![];
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "services");
        assert_eq!(fields[0].message, "Please select at least one service");
    }

    #[test]
    fn test_quote_unknown_timeline_rejected() {
        let mut req = valid_quote();
        req.timeline = "whenever".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields[0].field, "timeline");
        assert_eq!(fields[0].message, "Invalid timeline selection");
    }

    #[test]
    fn test_quote_unknown_budget_rejected() {
        let mut req = valid_quote();
        req.budget = "priceless".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields[0].field, "budget");
    }

    #[test]
    fn test_quote_short_phone_rejected() {
        let mut req = valid_quote();
        req.phone = "024400".to_string();
        let errs = req.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert_eq!(fields[0].field, "phone");
        assert_eq!(
            fields[0].message,
            "Phone number must be at least 10 characters"
        );
    }

    #[test]
    fn test_recaptcha_token_deserializes_from_camel_case() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"Jane Doe","email":"jane@example.com","message":"A long enough message.","recaptchaToken":"tok"}"#,
        )
        .unwrap();
        assert_eq!(req.recaptcha_token, "tok");
    }
}
