//! Pallet prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{BuyerIdentity, Cart, CartLine, Customer, Merchandise, RunInput},
    operations::{CartLineUpdate, CartOperation, PercentageDecrease, PriceUpdate, RunResult},
    policy::{WHOLESALE_TAG, WholesalePolicy},
    tags::TagSet,
    tiers::{DiscountTier, TierSchedule, TierScheduleError},
};
