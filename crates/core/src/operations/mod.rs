//! Cart Operations
//!
//! The serialized output of an evaluator run: a list of per-line price
//! updates in the storefront's wire format. Percentage values serialize as
//! plain JSON floats (`20.0`, not a decimal string).

use rust_decimal::Decimal;
use serde::Serialize;

/// The full result of an evaluator run.
///
/// Serializes to `{"operations": [...]}`; an ineligible or empty cart yields
/// an empty operations array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunResult {
    /// Requested cart mutations, in cart line order.
    pub operations: Vec<CartOperation>,
}

/// A single cart mutation requested by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CartOperation {
    /// Adjust the price of one cart line.
    Update(CartLineUpdate),
}

impl CartOperation {
    /// Build an update that decreases a line's price by a number of
    /// percentage points.
    #[must_use]
    pub fn update(cart_line_id: String, percentage_points: Decimal) -> Self {
        Self::Update(CartLineUpdate {
            cart_line_id,
            price: PriceUpdate {
                percentage_decrease: PercentageDecrease {
                    value: percentage_points,
                },
            },
        })
    }
}

/// A price adjustment for a single cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineUpdate {
    /// The line the adjustment applies to.
    pub cart_line_id: String,

    /// The adjustment itself.
    pub price: PriceUpdate,
}

/// The price change carried by a line update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    /// Percentage decrease to apply to the line price.
    pub percentage_decrease: PercentageDecrease,
}

/// A percentage decrease in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageDecrease {
    /// Points off the current price, e.g. `15` for 15% off.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn serializes_to_the_update_wire_shape() -> TestResult {
        let result = RunResult {
            operations: vec![CartOperation::update(
                "gid://shop/CartLine/2".to_string(),
                Decimal::new(15, 0),
            )],
        };

        assert_eq!(
            serde_json::to_value(&result)?,
            json!({
                "operations": [
                    {
                        "update": {
                            "cartLineId": "gid://shop/CartLine/2",
                            "price": { "percentageDecrease": { "value": 15.0 } }
                        }
                    }
                ]
            })
        );

        Ok(())
    }

    #[test]
    fn percentage_values_serialize_as_floats() -> TestResult {
        let decrease = PercentageDecrease {
            value: Decimal::new(20, 0),
        };

        assert_eq!(serde_json::to_string(&decrease)?, r#"{"value":20.0}"#);

        Ok(())
    }

    #[test]
    fn empty_result_serializes_to_an_empty_array() -> TestResult {
        assert_eq!(
            serde_json::to_value(RunResult::default())?,
            json!({ "operations": [] })
        );

        Ok(())
    }
}
