//! Order intent resolution and wire-level request construction.
//!
//! This crate is the decision core of the adapter: given the named
//! parameters of one invocation it decides between cancel-all,
//! list-open, and the seven submit branches, validates which fields are
//! legal, required, or conflicting for that branch, and emits a request
//! whose field names and encodings match the venue's REST API exactly.
//!
//! # Key components
//!
//! - [`ParameterSource`]: per-invocation key-value lookup with typed,
//!   field-name-carrying accessors
//! - [`NewOrderRequest`]: the wire payload, optional fields skipped when
//!   absent
//! - [`resolve`]: the ordered decision tree producing an [`Action`]

pub mod error;
pub mod params;
pub mod request;
pub mod resolver;

pub use error::{OrderError, OrderResult};
pub use params::{IntentParams, ParameterSource};
pub use request::NewOrderRequest;
pub use resolver::{resolve, Action};
