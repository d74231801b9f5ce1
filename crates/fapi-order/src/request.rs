//! Wire-level order request payload.
//!
//! Field names and value encodings must match the venue's REST API
//! exactly. Optional fields are skipped when absent, so serialization
//! preserves the field-present-or-absent contract; field order follows
//! the declaration order below.

use fapi_core::{ClientOrderId, OrderType, PositionSide, Price, Side, Size, TimeInForce, WorkingType};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::{OrderError, OrderResult};

/// Parameters for `POST /fapi/v1/order` (new order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrderRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Order quantity. Omitted when closing the whole position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Size>,
    /// Limit price. Present together with `timeInForce` or not at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Order side (BUY or SELL).
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Position side (BOTH in one-way mode, LONG/SHORT in hedge mode).
    #[serde(rename = "positionSide")]
    pub position_side: PositionSide,
    /// Time in force for limit-priced types.
    #[serde(rename = "timeInForce", skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Reduce-only flag, sent as "true"/"false".
    ///
    /// Present iff the account is in one-way mode; the venue rejects
    /// the field outright in hedge mode.
    #[serde(
        rename = "reduceOnly",
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_bool_lower"
    )]
    pub reduce_only: Option<bool>,
    /// Trigger price for the stop/take-profit family.
    #[serde(rename = "stopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Price>,
    /// Reference price basis for trigger evaluation.
    #[serde(rename = "workingType", skip_serializing_if = "Option::is_none")]
    pub working_type: Option<WorkingType>,
    /// Price protection flag, sent as "TRUE"/"FALSE".
    #[serde(
        rename = "priceProtect",
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_bool_upper"
    )]
    pub price_protect: Option<bool>,
    /// Close-position flag, sent as "true" and only when set.
    ///
    /// Mutually exclusive with `quantity`.
    #[serde(
        rename = "closePosition",
        skip_serializing_if = "Option::is_none",
        serialize_with = "ser_bool_lower"
    )]
    pub close_position: Option<bool>,
    /// Callback rate in percent for trailing stops.
    #[serde(rename = "callbackRate", skip_serializing_if = "Option::is_none")]
    pub callback_rate: Option<Decimal>,
    /// Activation price for trailing stops.
    #[serde(rename = "activationPrice", skip_serializing_if = "Option::is_none")]
    pub activation_price: Option<Price>,
    /// Caller-supplied client order ID passthrough.
    #[serde(rename = "newClientOrderId", skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<ClientOrderId>,
}

impl NewOrderRequest {
    /// Skeleton request carrying the fields every order shares.
    pub fn new(
        symbol: String,
        side: Side,
        order_type: OrderType,
        position_side: PositionSide,
    ) -> Self {
        Self {
            symbol,
            quantity: None,
            price: None,
            side,
            order_type,
            position_side,
            time_in_force: None,
            reduce_only: None,
            stop_price: None,
            working_type: None,
            price_protect: None,
            close_position: None,
            callback_rate: None,
            activation_price: None,
            new_client_order_id: None,
        }
    }

    /// Urlencoded wire form, in declared field order.
    ///
    /// This is the exact string the gateway signs and transmits.
    pub fn encode(&self) -> OrderResult<String> {
        serde_urlencoded::to_string(self).map_err(|e| OrderError::Encode(e.to_string()))
    }
}

fn ser_bool_lower<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(true) => serializer.serialize_str("true"),
        Some(false) => serializer.serialize_str("false"),
        None => serializer.serialize_none(),
    }
}

fn ser_bool_upper<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(true) => serializer.serialize_str("TRUE"),
        Some(false) => serializer.serialize_str("FALSE"),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_market_encoding() {
        let mut req = NewOrderRequest::new(
            "BTCUSDT".to_string(),
            Side::Buy,
            OrderType::Market,
            PositionSide::Both,
        );
        req.quantity = Some(Size::new(dec!(0.01)));
        req.reduce_only = Some(false);

        assert_eq!(
            req.encode().unwrap(),
            "symbol=BTCUSDT&quantity=0.01&side=BUY&type=MARKET&positionSide=BOTH&reduceOnly=false"
        );
    }

    #[test]
    fn test_bool_encodings_are_strings() {
        let mut req = NewOrderRequest::new(
            "ETHUSDT".to_string(),
            Side::Sell,
            OrderType::StopMarket,
            PositionSide::Both,
        );
        req.stop_price = Some(Price::new(dec!(3000)));
        req.working_type = Some(WorkingType::MarkPrice);
        req.price_protect = Some(true);
        req.close_position = Some(true);
        req.reduce_only = Some(false);

        let encoded = req.encode().unwrap();
        assert!(encoded.contains("priceProtect=TRUE"));
        assert!(encoded.contains("closePosition=true"));
        assert!(encoded.contains("reduceOnly=false"));
        assert!(!encoded.contains("quantity="));

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["priceProtect"], "TRUE");
        assert_eq!(json["closePosition"], "true");
        assert_eq!(json["reduceOnly"], "false");
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let req = NewOrderRequest::new(
            "BTCUSDT".to_string(),
            Side::Buy,
            OrderType::Limit,
            PositionSide::Long,
        );
        let json = serde_json::to_value(&req).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["symbol", "side", "type", "positionSide"]);
    }
}
