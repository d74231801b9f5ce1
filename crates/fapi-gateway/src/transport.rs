//! Exchange transport trait.
//!
//! Abstracts the venue calls behind a dyn-compatible trait so the
//! adapter can be exercised against a recording mock, and so the HTTP
//! implementation stays swappable.

use std::pin::Pin;
use std::sync::Mutex;

use serde_json::Value;

use fapi_order::{Action, NewOrderRequest};

use crate::error::{GatewayError, GatewayResult};

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Raw venue response for one action.
///
/// Submit and cancel-all return a single object; list-open returns an
/// array. Payloads are passed through untouched for the caller to
/// project.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResponse {
    Single(Value),
    Many(Vec<Value>),
}

/// Venue capability consumed by the adapter.
pub trait ExchangeTransport: Send + Sync {
    /// Submit a new order. `POST /fapi/v1/order`.
    fn submit_order<'a>(&'a self, request: &'a NewOrderRequest)
        -> BoxFuture<'a, GatewayResult<Value>>;

    /// Cancel all open orders for a symbol. `DELETE /fapi/v1/allOpenOrders`.
    fn cancel_all_open_orders<'a>(&'a self, symbol: &'a str)
        -> BoxFuture<'a, GatewayResult<Value>>;

    /// List open orders for a symbol. `GET /fapi/v1/openOrders`.
    fn list_open_orders<'a>(&'a self, symbol: &'a str)
        -> BoxFuture<'a, GatewayResult<Vec<Value>>>;
}

/// Execute a resolved action against a transport.
pub async fn dispatch(
    transport: &dyn ExchangeTransport,
    action: &Action,
) -> GatewayResult<GatewayResponse> {
    match action {
        Action::CancelAll { symbol } => transport
            .cancel_all_open_orders(symbol)
            .await
            .map(GatewayResponse::Single),
        Action::ListOpen { symbol } => transport
            .list_open_orders(symbol)
            .await
            .map(GatewayResponse::Many),
        Action::Submit(request) => transport
            .submit_order(request)
            .await
            .map(GatewayResponse::Single),
    }
}

/// Recording mock transport for tests.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Encoded wire forms of submitted orders.
    submitted: Mutex<Vec<String>>,
    /// Symbols passed to cancel-all.
    cancelled: Mutex<Vec<String>>,
    /// Symbols passed to list-open.
    listed: Mutex<Vec<String>>,
    /// Error message to fail every call with, when set.
    fail_with: Mutex<Option<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a transport error.
    pub fn fail_with(&self, msg: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(msg.into());
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<String> {
        self.cancelled.lock().unwrap().clone()
    }

    pub fn listed(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }

    fn check_failure(&self) -> GatewayResult<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(msg) => Err(GatewayError::Transport(msg.clone())),
            None => Ok(()),
        }
    }
}

impl ExchangeTransport for MockTransport {
    fn submit_order<'a>(
        &'a self,
        request: &'a NewOrderRequest,
    ) -> BoxFuture<'a, GatewayResult<Value>> {
        Box::pin(async move {
            self.check_failure()?;
            let encoded = request.encode()?;
            self.submitted.lock().unwrap().push(encoded);
            Ok(serde_json::json!({
                "symbol": request.symbol,
                "status": "NEW",
            }))
        })
    }

    fn cancel_all_open_orders<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, GatewayResult<Value>> {
        Box::pin(async move {
            self.check_failure()?;
            self.cancelled.lock().unwrap().push(symbol.to_string());
            Ok(serde_json::json!({"code": 200, "msg": "The operation of cancel all open order is done."}))
        })
    }

    fn list_open_orders<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, GatewayResult<Vec<Value>>> {
        Box::pin(async move {
            self.check_failure()?;
            self.listed.lock().unwrap().push(symbol.to_string());
            Ok(vec![serde_json::json!({"symbol": symbol, "status": "NEW"})])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fapi_core::{OrderType, PositionSide, Side, Size};
    use rust_decimal_macros::dec;

    fn market_request() -> NewOrderRequest {
        let mut req = NewOrderRequest::new(
            "BTCUSDT".to_string(),
            Side::Buy,
            OrderType::Market,
            PositionSide::Both,
        );
        req.quantity = Some(Size::new(dec!(0.01)));
        req.reduce_only = Some(false);
        req
    }

    #[tokio::test]
    async fn test_dispatch_submit() {
        let transport = MockTransport::new();
        let action = Action::Submit(market_request());

        let response = dispatch(&transport, &action).await.unwrap();
        assert!(matches!(response, GatewayResponse::Single(_)));
        assert_eq!(transport.submitted().len(), 1);
        assert!(transport.submitted()[0].starts_with("symbol=BTCUSDT"));
    }

    #[tokio::test]
    async fn test_dispatch_cancel_all() {
        let transport = MockTransport::new();
        let action = Action::CancelAll {
            symbol: "ETHUSDT".to_string(),
        };

        let response = dispatch(&transport, &action).await.unwrap();
        assert!(matches!(response, GatewayResponse::Single(_)));
        assert_eq!(transport.cancelled(), vec!["ETHUSDT".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_list_open() {
        let transport = MockTransport::new();
        let action = Action::ListOpen {
            symbol: "BTCUSDT".to_string(),
        };

        let response = dispatch(&transport, &action).await.unwrap();
        match response {
            GatewayResponse::Many(items) => assert_eq!(items.len(), 1),
            other => panic!("Expected Many, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_propagates_transport_error() {
        let transport = MockTransport::new();
        transport.fail_with("connection reset");

        let action = Action::ListOpen {
            symbol: "BTCUSDT".to_string(),
        };
        let err = dispatch(&transport, &action).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
