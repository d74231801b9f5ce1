//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Order error: {0}")]
    Order(#[from] fapi_order::OrderError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] fapi_gateway::GatewayError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] fapi_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
