//! Futures order-submission adapter.
//!
//! Reads a batch of user-declared order intents, resolves each into a
//! venue action (submit / cancel-all / list-open), dispatches it, and
//! emits the projected results as a flat JSON sequence.

pub mod app;
pub mod config;
pub mod error;
pub mod projector;

pub use app::{load_items, Application, ItemReport};
pub use config::{AppConfig, OperatingMode};
pub use error::{AppError, AppResult};
pub use projector::project;
