//! Order resolution error types.

use thiserror::Error;

/// Validation errors raised while resolving an order intent.
///
/// Both variants carry the offending parameter name; a failure aborts
/// only the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("Invalid value for parameter {field}: {value}")]
    InvalidParam { field: &'static str, value: String },

    #[error("Failed to encode order request: {0}")]
    Encode(String),
}

impl OrderError {
    /// Shorthand for an `InvalidParam` from any displayable value.
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidParam {
            field,
            value: value.to_string(),
        }
    }
}

/// Result type alias for order resolution.
pub type OrderResult<T> = Result<T, OrderError>;
