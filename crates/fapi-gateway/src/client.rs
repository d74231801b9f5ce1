//! HTTP gateway for the venue's futures REST API.
//!
//! Signed endpoints receive the urlencoded parameters plus `recvWindow`
//! and `timestamp`, with the HMAC signature appended last; the API key
//! travels in the `X-MBX-APIKEY` header. Responses are returned as raw
//! JSON for the caller to project.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use fapi_order::NewOrderRequest;

use crate::credential::Credential;
use crate::error::{GatewayError, GatewayResult};
use crate::transport::{BoxFuture, ExchangeTransport};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default request validity window in milliseconds.
const DEFAULT_RECV_WINDOW: u64 = 5_000;

/// Structured error body returned by the venue on rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i64,
    msg: String,
}

/// Reqwest-backed [`ExchangeTransport`] implementation.
#[derive(Debug, Clone)]
pub struct FuturesHttpGateway {
    client: Client,
    base_url: String,
    credential: Credential,
    recv_window: u64,
}

impl FuturesHttpGateway {
    /// Create a gateway with default timeout and recv window.
    pub fn new(base_url: impl Into<String>, credential: Credential) -> GatewayResult<Self> {
        Self::with_options(base_url, credential, DEFAULT_RECV_WINDOW, DEFAULT_TIMEOUT)
    }

    pub fn with_options(
        base_url: impl Into<String>,
        credential: Credential,
        recv_window: u64,
        timeout: Duration,
    ) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
            recv_window,
        })
    }

    /// Append `recvWindow`, `timestamp`, and the signature to a query.
    ///
    /// The signature covers everything before it, in order.
    fn signed_query_at(&self, mut query: String, timestamp_ms: i64) -> String {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!(
            "recvWindow={}&timestamp={timestamp_ms}",
            self.recv_window
        ));
        let signature = self.credential.sign(&query);
        query.push_str(&format!("&signature={signature}"));
        query
    }

    fn signed_query(&self, query: String) -> String {
        self.signed_query_at(query, Utc::now().timestamp_millis())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: String,
    ) -> GatewayResult<T> {
        let url = format!("{}{}?{}", self.base_url, path, self.signed_query(query));

        let response = self
            .client
            .request(method, &url)
            .header("X-MBX-APIKEY", self.credential.api_key())
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(decode_error(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::Transport(format!("Failed to parse response: {e}")))
    }
}

/// Decode a non-success body into the richest error we can.
fn decode_error(status: u16, body: String) -> GatewayError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => GatewayError::Exchange {
            code: err.code,
            msg: err.msg,
        },
        Err(_) => GatewayError::Http { status, body },
    }
}

impl ExchangeTransport for FuturesHttpGateway {
    fn submit_order<'a>(
        &'a self,
        request: &'a NewOrderRequest,
    ) -> BoxFuture<'a, GatewayResult<Value>> {
        Box::pin(async move {
            let query = request.encode()?;
            debug!(
                symbol = %request.symbol,
                side = %request.side,
                order_type = %request.order_type,
                "Submitting order"
            );
            self.send(Method::POST, "/fapi/v1/order", query).await
        })
    }

    fn cancel_all_open_orders<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, GatewayResult<Value>> {
        Box::pin(async move {
            debug!(symbol = %symbol, "Cancelling all open orders");
            self.send(
                Method::DELETE,
                "/fapi/v1/allOpenOrders",
                format!("symbol={symbol}"),
            )
            .await
        })
    }

    fn list_open_orders<'a>(&'a self, symbol: &'a str) -> BoxFuture<'a, GatewayResult<Vec<Value>>> {
        Box::pin(async move {
            debug!(symbol = %symbol, "Listing open orders");
            self.send(
                Method::GET,
                "/fapi/v1/openOrders",
                format!("symbol={symbol}"),
            )
            .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    fn gateway() -> FuturesHttpGateway {
        FuturesHttpGateway::with_options(
            "https://testnet.binancefuture.com/",
            Credential::new("test_key".to_string(), TEST_SECRET.to_string()),
            5_000,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(gateway().base_url, "https://testnet.binancefuture.com");
    }

    #[test]
    fn test_signed_query_appends_window_timestamp_signature() {
        let gw = gateway();
        let signed = gw.signed_query_at("symbol=BTCUSDT".to_string(), 1_578_963_600_000);

        let expected_prefix = "symbol=BTCUSDT&recvWindow=5000&timestamp=1578963600000";
        assert!(signed.starts_with(expected_prefix));

        let signature = signed
            .rsplit_once("&signature=")
            .map(|(_, sig)| sig.to_string())
            .unwrap();
        assert_eq!(signature, gw.credential.sign(expected_prefix));
    }

    #[test]
    fn test_signed_query_empty_params() {
        let gw = gateway();
        let signed = gw.signed_query_at(String::new(), 1_578_963_600_000);
        // No leading separator when there are no caller params.
        assert!(signed.starts_with("recvWindow=5000&timestamp=1578963600000&signature="));
    }

    #[test]
    fn test_decode_error_exchange_body() {
        let err = decode_error(400, r#"{"code":-2022,"msg":"ReduceOnly Order is rejected."}"#.to_string());
        match err {
            GatewayError::Exchange { code, msg } => {
                assert_eq!(code, -2022);
                assert_eq!(msg, "ReduceOnly Order is rejected.");
            }
            other => panic!("Expected Exchange, got: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_plain_body() {
        let err = decode_error(502, "Bad Gateway".to_string());
        match err {
            GatewayError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("Expected Http, got: {other:?}"),
        }
    }
}
