//! Result projection.
//!
//! Flattens raw venue responses into the caller-facing output sequence:
//! one output item per response object, list responses contributing one
//! item per element.

use fapi_gateway::GatewayResponse;
use serde_json::Value;

/// Project a raw gateway response into output items.
pub fn project(response: GatewayResponse) -> Vec<Value> {
    match response {
        GatewayResponse::Single(value) => vec![value],
        GatewayResponse::Many(values) => values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_becomes_one_item() {
        let items = project(GatewayResponse::Single(json!({"orderId": 1})));
        assert_eq!(items, vec![json!({"orderId": 1})]);
    }

    #[test]
    fn test_many_flattens() {
        let items = project(GatewayResponse::Many(vec![
            json!({"orderId": 1}),
            json!({"orderId": 2}),
        ]));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_list_projects_empty() {
        assert!(project(GatewayResponse::Many(vec![])).is_empty());
    }
}
