//! Exchange gateway: credential handling, request signing, and REST
//! transport for the futures venue.
//!
//! # Key components
//!
//! - [`Credential`]: HMAC SHA256 signing, secret zeroized on drop
//! - [`resolve_credentials`]: config-over-environment resolution per
//!   execution context
//! - [`ExchangeTransport`]: the venue capability (submit / cancel-all /
//!   list-open), with [`MockTransport`] for tests
//! - [`FuturesHttpGateway`]: reqwest implementation of the transport
//! - [`dispatch`]: runs a resolved [`fapi_order::Action`] against a
//!   transport

pub mod client;
pub mod credential;
pub mod error;
pub mod transport;

pub use client::FuturesHttpGateway;
pub use credential::{resolve_credentials, Credential, Environment};
pub use error::{GatewayError, GatewayResult};
pub use transport::{dispatch, BoxFuture, ExchangeTransport, GatewayResponse, MockTransport};
