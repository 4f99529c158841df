//! Validation utilities.

use crate::{UserbaseError, UserbaseResult};
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `UserbaseError` listing every
    /// failing field on failure.
    fn validate_request(&self) -> UserbaseResult<()> {
        self.validate().map_err(validation_errors_to_userbase_error)
    }

    /// Validates the struct and collapses any failure into one fixed
    /// message. Field details are only logged.
    fn validate_or(&self, message: &str) -> UserbaseResult<()> {
        self.validate().map_err(|errors| {
            debug!("Validation failed: {}", describe(&errors));
            UserbaseError::validation(message)
        })
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `UserbaseError`.
#[must_use]
pub fn validation_errors_to_userbase_error(errors: ValidationErrors) -> UserbaseError {
    UserbaseError::Validation(describe(&errors))
}

/// Builds the error for a path or query parameter that is absent or unusable.
#[must_use]
pub fn malformed_field(field: &str) -> UserbaseError {
    UserbaseError::validation(format!("Field '{}' isn't properly formed", field))
}

/// Returns `value` unless it is empty.
pub fn require_non_empty<'a>(value: &'a str, field: &str) -> UserbaseResult<&'a str> {
    if value.is_empty() {
        return Err(malformed_field(field));
    }
    Ok(value)
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, message)
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(required)]
        name: Option<String>,
        #[validate(required(message = "age is required"))]
        age: Option<i64>,
    }

    #[test]
    fn test_malformed_field_message() {
        let err = malformed_field("search");
        assert_eq!(err.to_string(), "Field 'search' isn't properly formed");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("bob", "search").unwrap(), "bob");
        assert!(require_non_empty("", "search").is_err());
        // whitespace is a legitimate pattern
        assert_eq!(require_non_empty(" ", "search").unwrap(), " ");
    }

    #[test]
    fn test_validate_request_lists_fields() {
        let sample = Sample { name: None, age: None };
        let err = sample.validate_request().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name: required"));
        assert!(message.contains("age: age is required"));
    }

    #[test]
    fn test_validate_or_uses_fixed_message() {
        let sample = Sample { name: Some("x".to_string()), age: None };
        let err = sample.validate_or("Required field missing in request").unwrap_err();
        assert_eq!(err.to_string(), "Required field missing in request");
    }

    #[test]
    fn test_valid_passes() {
        let sample = Sample { name: Some("x".to_string()), age: Some(1) };
        assert!(sample.validate_request().is_ok());
        assert!(sample.validate_or("unused").is_ok());
    }
}
