//! Batch application loop.
//!
//! Each input item is one invocation: resolve the intent, dispatch the
//! action, project the response. Items run concurrently and are fully
//! isolated; one item's validation or gateway failure never affects the
//! others.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use fapi_gateway::{dispatch, resolve_credentials, ExchangeTransport, FuturesHttpGateway};
use fapi_order::{resolve, Action, IntentParams};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::projector::project;

/// Outcome of one batch item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    /// Zero-based index of the item in the batch.
    pub item: usize,
    /// Projected output items on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<Value>>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemReport {
    fn ok(item: usize, output: Vec<Value>) -> Self {
        Self {
            item,
            output: Some(output),
            error: None,
        }
    }

    fn failed(item: usize, error: String) -> Self {
        Self {
            item,
            output: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The adapter application.
pub struct Application {
    transport: Option<Arc<dyn ExchangeTransport>>,
}

impl Application {
    /// Create the application, building the live transport when needed.
    ///
    /// Dry-run mode never resolves credentials, so it works without any
    /// API keys configured.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let transport = if config.is_dry_run() {
            None
        } else {
            let credential = resolve_credentials(
                config.api_key.clone(),
                config.api_secret.clone(),
                config.environment,
            )?;
            let gateway = FuturesHttpGateway::with_options(
                config.effective_base_url(),
                credential,
                config.recv_window,
                Duration::from_secs(config.http_timeout_secs),
            )?;
            Some(Arc::new(gateway) as Arc<dyn ExchangeTransport>)
        };

        Ok(Self { transport })
    }

    /// Create with a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn ExchangeTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Process a batch of intent items concurrently.
    pub async fn run(&self, items: Vec<Value>) -> Vec<ItemReport> {
        let futures = items.into_iter().enumerate().map(|(index, item)| async move {
            match self.process_item(item).await {
                Ok(output) => {
                    debug!(item = index, outputs = output.len(), "Item processed");
                    ItemReport::ok(index, output)
                }
                Err(e) => {
                    warn!(item = index, error = %e, "Item failed");
                    ItemReport::failed(index, e.to_string())
                }
            }
        });

        join_all(futures).await
    }

    async fn process_item(&self, item: Value) -> AppResult<Vec<Value>> {
        let params = IntentParams::from_value(item)?;
        let action = resolve(&params)?;

        match &self.transport {
            Some(transport) => {
                let response = dispatch(transport.as_ref(), &action).await?;
                Ok(project(response))
            }
            None => preview(&action),
        }
    }
}

/// Dry-run rendering of a resolved action.
fn preview(action: &Action) -> AppResult<Vec<Value>> {
    let value = match action {
        Action::CancelAll { symbol } => {
            json!({"action": "cancelAllOpenOrders", "symbol": symbol})
        }
        Action::ListOpen { symbol } => {
            json!({"action": "listOpenOrders", "symbol": symbol})
        }
        Action::Submit(request) => {
            let encoded = serde_json::to_value(request)
                .map_err(|e| AppError::Input(format!("Failed to render request: {e}")))?;
            json!({"action": "submitOrder", "request": encoded})
        }
    };
    Ok(vec![value])
}

/// Load batch items from a JSON file.
///
/// Accepts either an array of intent objects or a single object, which
/// reads as a one-item batch.
pub fn load_items(path: &str) -> AppResult<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("Failed to read input: {e}")))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| AppError::Input(format!("Failed to parse input: {e}")))?;

    match value {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        other => Err(AppError::Input(format!(
            "Input must be an object or array of objects, got: {other}"
        ))),
    }
}
