//! Order-related types and identifiers.
//!
//! The enum variants serialize to the exact wire strings the venue's
//! REST API expects (`BUY`, `STOP_MARKET`, `MARK_PRICE`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side, including the two pseudo-sides.
///
/// `Clear` and `Get` do not build an order: they request cancel-all /
/// list-open for a symbol and short-circuit request construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
    Clear,
    Get,
}

impl Side {
    /// True for the pseudo-sides that never submit an order.
    pub fn is_pseudo(&self) -> bool {
        matches!(self, Self::Clear | Self::Get)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Clear => write!(f, "CLEAR"),
            Self::Get => write!(f, "GET"),
        }
    }
}

/// Futures order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    /// Limit order triggered at stop price.
    Stop,
    /// Market order triggered at stop price.
    StopMarket,
    /// Limit order triggered at take-profit price.
    TakeProfit,
    /// Market order triggered at take-profit price.
    TakeProfitMarket,
    /// Market order trailing the price by a callback rate.
    TrailingStopMarket,
}

impl OrderType {
    /// Stop/take-profit family: types evaluated against a trigger price.
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            Self::Stop | Self::StopMarket | Self::TakeProfit | Self::TakeProfitMarket
        )
    }

    /// Trigger types that execute as market orders once fired.
    ///
    /// These support `closePosition` and never carry `price`/`timeInForce`.
    pub fn is_trigger_market(&self) -> bool {
        matches!(self, Self::StopMarket | Self::TakeProfitMarket)
    }

    /// Types that require both `price` and `timeInForce`.
    pub fn requires_limit_price(&self) -> bool {
        matches!(self, Self::Limit | Self::Stop | Self::TakeProfit)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Market => write!(f, "MARKET"),
            Self::Stop => write!(f, "STOP"),
            Self::StopMarket => write!(f, "STOP_MARKET"),
            Self::TakeProfit => write!(f, "TAKE_PROFIT"),
            Self::TakeProfitMarket => write!(f, "TAKE_PROFIT_MARKET"),
            Self::TrailingStopMarket => write!(f, "TRAILING_STOP_MARKET"),
        }
    }
}

/// Position side for one-way vs. hedge mode accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    /// One-way mode: single net position per symbol.
    #[default]
    Both,
    /// Hedge mode, long leg.
    Long,
    /// Hedge mode, short leg.
    Short,
}

impl PositionSide {
    /// True when the account trades in hedge mode.
    ///
    /// The venue rejects `reduceOnly` on hedge-mode requests, so this
    /// gates whether the field is emitted at all.
    pub fn is_hedge(&self) -> bool {
        matches!(self, Self::Long | Self::Short)
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "BOTH"),
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

/// Time-in-force for limit-priced orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good-til-cancelled.
    #[default]
    Gtc,
    /// Immediate-or-cancel.
    Ioc,
    /// Fill-or-kill.
    Fok,
    /// Post-only (rejected if it would take liquidity).
    Gtx,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gtc => write!(f, "GTC"),
            Self::Ioc => write!(f, "IOC"),
            Self::Fok => write!(f, "FOK"),
            Self::Gtx => write!(f, "GTX"),
        }
    }
}

/// Reference price basis for trigger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingType {
    /// Mark price (recommended: resistant to wick manipulation).
    #[default]
    MarkPrice,
    /// Last traded contract price.
    ContractPrice,
}

impl fmt::Display for WorkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkPrice => write!(f, "MARK_PRICE"),
            Self::ContractPrice => write!(f, "CONTRACT_PRICE"),
        }
    }
}

/// Caller-supplied client order ID.
///
/// Passed through to the venue as `newClientOrderId`; the venue generates
/// its own when absent, so this is never fabricated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientOrderId(String);

impl ClientOrderId {
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientOrderId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl AsRef<str> for ClientOrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
