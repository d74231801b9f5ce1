//! Order intent resolution.
//!
//! Classifies one parameter set into a gateway action and, for the
//! submit case, assembles a wire-correct order request.
//!
//! # Decision tree (strict, each step short-circuits)
//!
//! 1. side CLEAR            -> CancelAll(symbol)
//! 2. side GET              -> ListOpen(symbol)
//! 3. MARKET                -> quantity
//! 4. STOP_MARKET / TAKE_PROFIT_MARKET
//!                          -> stopPrice + workingType + priceProtect,
//!                             closePosition XOR quantity
//! 5. STOP / TAKE_PROFIT    -> stopPrice + workingType + priceProtect,
//!                             quantity + price + timeInForce
//! 6. TRAILING_STOP_MARKET  -> quantity + callbackRate (+ activationPrice)
//! 7. LIMIT                 -> quantity + price + timeInForce
//!
//! `reduceOnly` is attached to every submit branch, but only in one-way
//! mode (positionSide BOTH); the venue rejects the field in hedge mode.
//! Unknown order types fail at enum parse time with the offending field
//! name rather than falling through to LIMIT handling.

use fapi_core::{ClientOrderId, OrderType, PositionSide, Side};

use crate::error::OrderResult;
use crate::params::ParameterSource;
use crate::request::NewOrderRequest;

/// Resolved action for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancel every open order for the symbol.
    CancelAll { symbol: String },
    /// List the open orders for the symbol.
    ListOpen { symbol: String },
    /// Submit a new order.
    Submit(NewOrderRequest),
}

/// Resolve a parameter set into an [`Action`].
///
/// Pure and stateless: every call reads fresh values and returns either
/// a fully-validated action or the first validation error encountered.
pub fn resolve<P: ParameterSource>(params: &P) -> OrderResult<Action> {
    let side: Side = params.required_enum("side")?;
    let symbol = params.required_str("symbol")?;

    match side {
        Side::Clear => return Ok(Action::CancelAll { symbol }),
        Side::Get => return Ok(Action::ListOpen { symbol }),
        Side::Buy | Side::Sell => {}
    }

    let order_type: OrderType = params.required_enum("orderType")?;
    let position_side: PositionSide = params.required_enum("positionSide")?;
    let reduce_only = params.bool_or_false("reduceOnly")?;

    let mut request = NewOrderRequest::new(symbol, side, order_type, position_side);

    if !position_side.is_hedge() {
        request.reduce_only = Some(reduce_only);
    }
    request.new_client_order_id = params
        .optional_str("newClientOrderId")?
        .map(ClientOrderId::from_string);

    match order_type {
        OrderType::Market => {
            request.quantity = Some(params.required_size("quantity")?);
        }
        OrderType::StopMarket | OrderType::TakeProfitMarket => {
            read_trigger_fields(&mut request, params)?;
            if params.bool_or_false("closePosition")? {
                request.close_position = Some(true);
            } else {
                request.quantity = Some(params.required_size("quantity")?);
            }
        }
        OrderType::Stop | OrderType::TakeProfit => {
            read_trigger_fields(&mut request, params)?;
            request.quantity = Some(params.required_size("quantity")?);
            request.price = Some(params.required_price("price")?);
            request.time_in_force = Some(params.required_enum("timeInForce")?);
        }
        OrderType::TrailingStopMarket => {
            request.quantity = Some(params.required_size("quantity")?);
            request.callback_rate = Some(params.required_rate("callbackRate")?);
            request.activation_price = params.optional_price("activationPrice")?;
            request.working_type = Some(params.enum_or_default("workingType")?);
        }
        OrderType::Limit => {
            request.quantity = Some(params.required_size("quantity")?);
            request.price = Some(params.required_price("price")?);
            request.time_in_force = Some(params.required_enum("timeInForce")?);
        }
    }

    Ok(Action::Submit(request))
}

/// Fields shared by the whole stop/take-profit family.
fn read_trigger_fields<P: ParameterSource>(
    request: &mut NewOrderRequest,
    params: &P,
) -> OrderResult<()> {
    request.stop_price = Some(params.required_price("stopPrice")?);
    request.working_type = Some(params.enum_or_default("workingType")?);
    request.price_protect = Some(params.bool_or_false("priceProtect")?);
    Ok(())
}
