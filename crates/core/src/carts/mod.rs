//! Cart Snapshots
//!
//! The deserialized form of the cart payload the evaluator runs against. The
//! shapes mirror the storefront's wire format (camelCase keys) and lean
//! permissive: absent buyers, absent customers, absent lines, and malformed
//! quantities all decode to values the evaluator treats as "no discount"
//! rather than failing the whole payload.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};

use crate::tags::TagSet;

/// Top-level evaluator input: a single cart snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    /// The cart to price.
    #[serde(default)]
    pub cart: Cart,
}

/// A cart snapshot: who is buying, and what.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// The buyer attached to the cart, when known.
    #[serde(default)]
    pub buyer_identity: Option<BuyerIdentity>,

    /// Cart lines in display order.
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// The identity attached to a cart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerIdentity {
    /// The customer record, present only for signed-in buyers.
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// A customer record carrying merchant-assigned tags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Tags the merchant has assigned to this customer.
    #[serde(default)]
    pub tags: TagSet,
}

/// A single cart line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Stable identifier for the line, echoed back in operations.
    #[serde(default)]
    pub id: String,

    /// Unit quantity on the line.
    ///
    /// Decoded leniently: integers pass through (including negatives), floats
    /// count only when they carry an exact integer value, and anything else
    /// decodes to zero.
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,

    /// The purchasable the line refers to.
    #[serde(default)]
    pub merchandise: Option<Merchandise>,
}

/// The purchasable behind a cart line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchandise {
    /// Stable identifier for the merchandise.
    #[serde(default)]
    pub id: String,
}

/// Lenient quantity decoding.
///
/// Integers pass through as-is, including negatives. Floats count only when
/// they carry an exact integer value. Anything else (fractional values,
/// out-of-range values, null) decodes to zero, which no tier threshold
/// accepts.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawQuantity {
        Int(i64),
        Float(f64),
    }

    let raw = Option::<RawQuantity>::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawQuantity::Int(quantity)) => quantity,
        Some(RawQuantity::Float(quantity)) => f64_to_i64_exact(quantity).unwrap_or(0),
        None => 0,
    })
}

/// Check if an f64 value is exactly representable as i64.
fn f64_to_i64_exact(value: f64) -> Option<i64> {
    let truncated = value.to_i64()?;

    (truncated.to_f64() == Some(value)).then_some(truncated)
}
