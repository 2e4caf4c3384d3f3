//! Unified error types for all layers of the data-access stack.

use thiserror::Error;

/// Unified error type for Reserva operations.
///
/// Expected business conditions (conflicts, not-found) and infrastructure
/// failures are separate variants so callers can distinguish cases the
/// legacy message-only contract conflated.
#[derive(Error, Debug)]
pub enum ReservaError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate document or id)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReservaError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error represents an expected business condition
    /// rather than an infrastructure failure.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation(_) | Self::Conflict(_)
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ReservaError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // MySQL 1062 / PostgreSQL 23505: unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "1062" || code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ReservaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ReservaError::not_found("Client", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            ReservaError::validation("bad input").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            ReservaError::conflict("duplicate").error_code(),
            "CONFLICT"
        );
        assert_eq!(
            ReservaError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            ReservaError::Configuration("cfg".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            ReservaError::internal("oops").error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_business_classification() {
        assert!(ReservaError::conflict("duplicate").is_business());
        assert!(ReservaError::not_found("Room", 9).is_business());
        assert!(ReservaError::validation("bad").is_business());
        assert!(!ReservaError::Database("gone".to_string()).is_business());
        assert!(!ReservaError::internal("oops").is_business());
    }

    #[test]
    fn test_error_display() {
        let err = ReservaError::not_found("Client", 42);
        assert!(err.to_string().contains("Client"));
        assert!(err.to_string().contains("42"));

        let err = ReservaError::conflict("Client already exists");
        assert!(err.to_string().contains("Client already exists"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ReservaError = json_err.into();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
