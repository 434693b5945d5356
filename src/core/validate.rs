use crate::domain::model::COLUMN_COUNT;
use regex::Regex;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const IP_PATTERN: &str = r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$";

/// Compiled patterns for one run. Built once, passed by reference.
#[derive(Debug)]
pub struct Patterns {
    email: Regex,
    ip: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).unwrap(),
            ip: Regex::new(IP_PATTERN).unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("invalid email format: {0}")]
    MalformedEmail(String),

    #[error("invalid gender: {0}, must be 'Male' or 'Female'")]
    InvalidGender(String),

    #[error("invalid IP address format: {0}")]
    MalformedIp(String),

    #[error("invalid IP octet value: {0}")]
    InvalidOctet(String),

    #[error("invalid number of columns: got {got}, want {want}")]
    WrongColumnCount { got: usize, want: usize },
}

/// A field-level failure located within the input: 1-based row number and
/// 1-based column of the failing field. Column 0 means the whole row
/// (wrong column count).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}, column {column}: {kind}")]
pub struct RowError {
    pub row: u64,
    pub column: usize,
    pub kind: ValidationError,
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "first name",
        });
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field: "last name" });
    }
    Ok(())
}

pub fn validate_email(patterns: &Patterns, value: &str) -> Result<(), ValidationError> {
    if !patterns.email.is_match(value) {
        return Err(ValidationError::MalformedEmail(value.to_string()));
    }
    Ok(())
}

pub fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if value != "Male" && value != "Female" {
        return Err(ValidationError::InvalidGender(value.to_string()));
    }
    Ok(())
}

/// Shape check first, then the numeric bound: the 1-3 digit groups admit
/// 256-999, so each octet is parsed and checked against 255.
pub fn validate_ip_address(patterns: &Patterns, value: &str) -> Result<(), ValidationError> {
    if !patterns.ip.is_match(value) {
        return Err(ValidationError::MalformedIp(value.to_string()));
    }

    for octet in value.split('.') {
        let number: u16 = octet
            .parse()
            .map_err(|_| ValidationError::MalformedIp(value.to_string()))?;
        if number > 255 {
            return Err(ValidationError::InvalidOctet(octet.to_string()));
        }
    }
    Ok(())
}

/// Checks the column count, then each field in fixed order. Returns the
/// first failure, located by row and column.
pub fn validate_record(
    patterns: &Patterns,
    row: u64,
    fields: &[String],
) -> Result<(), RowError> {
    if fields.len() != COLUMN_COUNT {
        return Err(RowError {
            row,
            column: 0,
            kind: ValidationError::WrongColumnCount {
                got: fields.len(),
                want: COLUMN_COUNT,
            },
        });
    }

    let results = [
        validate_first_name(&fields[0]),
        validate_last_name(&fields[1]),
        validate_email(patterns, &fields[2]),
        validate_gender(&fields[3]),
        validate_ip_address(patterns, &fields[4]),
    ];

    for (index, result) in results.into_iter().enumerate() {
        if let Err(kind) = result {
            return Err(RowError {
                row,
                column: index + 1,
                kind,
            });
        }
    }
    Ok(())
}

/// Returns the substring after the first `@` of a well-formed email, or an
/// empty string for anything that does not match the email pattern. Callers
/// are expected to validate first; the empty string is a defensive default.
pub fn extract_domain<'a>(patterns: &Patterns, email: &'a str) -> &'a str {
    if patterns.email.is_match(email) {
        if let Some(at) = email.find('@') {
            return &email[at + 1..];
        }
    }
    ""
}
