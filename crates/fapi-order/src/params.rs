//! Parameter source abstraction.
//!
//! The resolver never sees where parameters come from (batch input item,
//! test fixture, ...); it reads named values through [`ParameterSource`]
//! and fails with the offending field name when a required value is
//! absent or malformed.

use crate::error::{OrderError, OrderResult};
use fapi_core::{Price, Size};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key-value lookup of user-declared parameters, one per invocation.
pub trait ParameterSource {
    /// Raw value for `name`, if declared.
    fn get(&self, name: &str) -> Option<&Value>;

    /// Required string parameter.
    fn required_str(&self, name: &'static str) -> OrderResult<String> {
        match self.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(v) => Err(OrderError::invalid(name, v)),
            None => Err(OrderError::MissingParam(name)),
        }
    }

    /// Optional string parameter; empty strings read as absent.
    fn optional_str(&self, name: &'static str) -> OrderResult<Option<String>> {
        match self.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.trim().to_string())),
            Some(Value::String(_)) | None => Ok(None),
            Some(v) => Err(OrderError::invalid(name, v)),
        }
    }

    /// Required enum parameter, parsed from its wire string.
    fn required_enum<T: DeserializeOwned>(&self, name: &'static str) -> OrderResult<T> {
        match self.get(name) {
            Some(v) => {
                serde_json::from_value(v.clone()).map_err(|_| OrderError::invalid(name, v))
            }
            None => Err(OrderError::MissingParam(name)),
        }
    }

    /// Enum parameter falling back to its default when absent.
    fn enum_or_default<T: DeserializeOwned + Default>(&self, name: &'static str) -> OrderResult<T> {
        match self.get(name) {
            Some(v) => {
                serde_json::from_value(v.clone()).map_err(|_| OrderError::invalid(name, v))
            }
            None => Ok(T::default()),
        }
    }

    /// Boolean parameter, absent reads as `false`.
    fn bool_or_false(&self, name: &'static str) -> OrderResult<bool> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(v) => Err(OrderError::invalid(name, v)),
            None => Ok(false),
        }
    }

    /// Required positive quantity, declared as a decimal string or number.
    fn required_size(&self, name: &'static str) -> OrderResult<Size> {
        let raw = self.decimal_text(name)?.ok_or(OrderError::MissingParam(name))?;
        Size::parse(&raw).map_err(|_| OrderError::invalid(name, raw))
    }

    /// Required positive price, declared as a decimal string or number.
    fn required_price(&self, name: &'static str) -> OrderResult<Price> {
        let raw = self.decimal_text(name)?.ok_or(OrderError::MissingParam(name))?;
        Price::parse(&raw).map_err(|_| OrderError::invalid(name, raw))
    }

    /// Required positive decimal rate in percent (e.g. trailing callback).
    fn required_rate(&self, name: &'static str) -> OrderResult<Decimal> {
        let raw = self.decimal_text(name)?.ok_or(OrderError::MissingParam(name))?;
        let rate: Decimal = raw.parse().map_err(|_| OrderError::invalid(name, &raw))?;
        if rate.is_sign_negative() || rate.is_zero() {
            return Err(OrderError::invalid(name, raw));
        }
        Ok(rate)
    }

    /// Optional positive price.
    fn optional_price(&self, name: &'static str) -> OrderResult<Option<Price>> {
        match self.decimal_text(name)? {
            Some(raw) => Price::parse(&raw)
                .map(Some)
                .map_err(|_| OrderError::invalid(name, raw)),
            None => Ok(None),
        }
    }

    /// Decimal parameters arrive as JSON strings or numbers; both are
    /// normalized to their textual form before exact-decimal parsing.
    fn decimal_text(&self, name: &'static str) -> OrderResult<Option<String>> {
        match self.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.trim().to_string())),
            Some(Value::String(_)) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(v) => Err(OrderError::invalid(name, v)),
            None => Ok(None),
        }
    }
}

/// Parameters for a single invocation, backed by a JSON object.
///
/// This is the production [`ParameterSource`]: each batch input item
/// deserializes into one `IntentParams`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct IntentParams(BTreeMap<String, Value>);

impl IntentParams {
    pub fn new(values: BTreeMap<String, Value>) -> Self {
        Self(values)
    }

    /// Build from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> OrderResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(OrderError::invalid("item", other)),
        }
    }
}

impl ParameterSource for IntentParams {
    fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fapi_core::Side;
    use serde_json::json;

    fn params(v: Value) -> IntentParams {
        IntentParams::from_value(v).unwrap()
    }

    #[test]
    fn test_required_str_present() {
        let p = params(json!({"symbol": "BTCUSDT"}));
        assert_eq!(p.required_str("symbol").unwrap(), "BTCUSDT");
    }

    #[test]
    fn test_required_str_missing() {
        let p = params(json!({}));
        assert_eq!(
            p.required_str("symbol").unwrap_err(),
            OrderError::MissingParam("symbol")
        );
    }

    #[test]
    fn test_required_enum_parses_wire_string() {
        let p = params(json!({"side": "SELL"}));
        assert_eq!(p.required_enum::<Side>("side").unwrap(), Side::Sell);
    }

    #[test]
    fn test_required_enum_rejects_unknown() {
        let p = params(json!({"side": "HOLD"}));
        let err = p.required_enum::<Side>("side").unwrap_err();
        assert!(matches!(err, OrderError::InvalidParam { field: "side", .. }));
    }

    #[test]
    fn test_decimal_accepts_string_and_number() {
        let p = params(json!({"a": "0.01", "b": 0.5}));
        assert_eq!(p.required_size("a").unwrap().to_string(), "0.01");
        assert_eq!(p.required_size("b").unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_size_rejects_zero() {
        let p = params(json!({"quantity": "0"}));
        assert!(matches!(
            p.required_size("quantity").unwrap_err(),
            OrderError::InvalidParam { field: "quantity", .. }
        ));
    }

    #[test]
    fn test_bool_defaults_false() {
        let p = params(json!({}));
        assert!(!p.bool_or_false("reduceOnly").unwrap());
    }
}
