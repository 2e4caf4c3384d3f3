//! Validation utilities.

use crate::ReservaError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ReservaError` on failure.
    fn validate_entity(&self) -> Result<(), ReservaError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `ReservaError::Validation`
/// with one `field: message` segment per failed rule.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> ReservaError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    ReservaError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that an hour value fits a 24-hour day.
    pub fn valid_hour(hour: i32) -> Result<(), ValidationError> {
        if !(0..=24).contains(&hour) {
            return Err(ValidationError::new("hour_out_of_range"));
        }
        Ok(())
    }
}
