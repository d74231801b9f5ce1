//! Gateway error types.

use thiserror::Error;

/// Errors raised while executing a resolved action against the venue.
///
/// Exchange rejections and transport failures are propagated unmodified
/// to the caller; there is no retry at this layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The venue rejected the request with a structured error body.
    #[error("Exchange error {code}: {msg}")]
    Exchange { code: i64, msg: String },

    /// Non-success HTTP status without a decodable exchange error body.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Transport-level failure (connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// API credentials could not be resolved for the execution context.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The resolved request could not be encoded for the wire.
    #[error(transparent)]
    Request(#[from] fapi_order::OrderError),
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
