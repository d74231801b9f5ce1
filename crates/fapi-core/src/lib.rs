//! Core domain types for the futures order adapter.
//!
//! This crate provides the fundamental types shared across the workspace:
//! - `Side`, `OrderType`, `PositionSide`, `TimeInForce`, `WorkingType`:
//!   trading enums with exact venue wire strings
//! - `Price`, `Size`: precision-safe numeric types
//! - `ClientOrderId`: caller-supplied order identifier

pub mod decimal;
pub mod error;
pub mod order;

pub use decimal::{Price, Size};
pub use error::{CoreError, Result};
pub use order::{ClientOrderId, OrderType, PositionSide, Side, TimeInForce, WorkingType};
