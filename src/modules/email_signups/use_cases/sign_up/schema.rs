// Request schema for the sign up use case.
//
// Purpose
// - Turn an untyped JSON body into a SignUp command or a list of field level issues.
//
// Responsibilities
// - Require an object with a string `email`.
// - Apply the address rules of the validator crate, then tighten them: no leading, trailing
//   or doubled dots in the local part and a dotted domain ending in an alphabetic TLD.
// - Never touch the store. Framework independent so adapters and tests share it.

use crate::modules::email_signups::use_cases::sign_up::command::SignUp;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use validator::ValidateEmail;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    InvalidString,
    InvalidJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
    /// Which string rule failed, only set on `invalid_string` issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<&'static str>,
}

impl ValidationIssue {
    fn required(field: &str) -> Self {
        Self {
            code: IssueCode::InvalidType,
            path: vec![field.to_string()],
            message: "Required".to_string(),
            validation: None,
        }
    }

    fn invalid_type(path: Vec<String>, expected: &str, received: &Value) -> Self {
        Self {
            code: IssueCode::InvalidType,
            path,
            message: format!("Expected {expected}, received {}", json_type_name(received)),
            validation: None,
        }
    }

    fn invalid_email(field: &str) -> Self {
        Self {
            code: IssueCode::InvalidString,
            path: vec![field.to_string()],
            message: INVALID_EMAIL_MESSAGE.to_string(),
            validation: Some("email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sign up input ({} issue(s))", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// The body never reached the schema because it was not JSON.
    pub fn invalid_json(reason: impl Into<String>) -> Self {
        Self::single(ValidationIssue {
            code: IssueCode::InvalidJson,
            path: Vec::new(),
            message: reason.into(),
            validation: None,
        })
    }
}

pub fn validate_sign_up(raw: &Value) -> Result<SignUp, ValidationError> {
    let Some(body) = raw.as_object() else {
        return Err(ValidationError::single(ValidationIssue::invalid_type(
            Vec::new(),
            "object",
            raw,
        )));
    };

    match body.get("email") {
        None | Some(Value::Null) => {
            Err(ValidationError::single(ValidationIssue::required("email")))
        }
        Some(Value::String(email)) if is_valid_email(email) => Ok(SignUp::new(email.clone())),
        Some(Value::String(_)) => Err(ValidationError::single(ValidationIssue::invalid_email(
            "email",
        ))),
        Some(other) => Err(ValidationError::single(ValidationIssue::invalid_type(
            vec!["email".to_string()],
            "string",
            other,
        ))),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    }
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

// Hostnames only: IP literals and bare IPv4 addresses fail on the TLD rule.
fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    match labels.split_last() {
        Some((tld, rest)) if !rest.is_empty() => {
            rest.iter().all(|label| !label.is_empty())
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
