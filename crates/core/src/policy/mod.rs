//! Wholesale Pricing Policy
//!
//! The evaluator proper: an eligibility tag plus a validated tier schedule,
//! bound together at construction. Evaluation is a pure function of the cart
//! snapshot. It holds no state, performs no I/O, and never fails; carts that
//! do not qualify evaluate to an empty operation list.

use crate::{
    carts::{Cart, RunInput},
    discounts::percentage_points,
    operations::{CartOperation, RunResult},
    tiers::TierSchedule,
};

/// Customer tag marking an approved wholesale account.
pub const WHOLESALE_TAG: &str = "wholesale";

/// A wholesale pricing policy.
///
/// The default policy gates on [`WHOLESALE_TAG`] and applies the reference
/// tier table (10+ units take 10% off, 50+ take 15%, 200+ take 20%).
#[derive(Debug, Clone)]
pub struct WholesalePolicy {
    eligibility_tag: String,
    schedule: TierSchedule,
}

impl WholesalePolicy {
    /// Create a policy from an eligibility tag and a tier schedule.
    #[must_use]
    pub fn new(eligibility_tag: impl Into<String>, schedule: TierSchedule) -> Self {
        Self {
            eligibility_tag: eligibility_tag.into(),
            schedule,
        }
    }

    /// The tag a customer must carry for the policy to apply.
    #[must_use]
    pub fn eligibility_tag(&self) -> &str {
        &self.eligibility_tag
    }

    /// The discount table in force.
    #[must_use]
    pub fn schedule(&self) -> &TierSchedule {
        &self.schedule
    }

    /// Evaluate a cart into price update operations.
    ///
    /// Carts without a signed-in, tag-carrying customer produce no
    /// operations, as do lines whose quantity meets no tier. Lines that do
    /// qualify produce one update each, in cart order.
    #[must_use]
    pub fn evaluate(&self, cart: &Cart) -> RunResult {
        let Some(customer) = cart
            .buyer_identity
            .as_ref()
            .and_then(|identity| identity.customer.as_ref())
        else {
            return RunResult::default();
        };

        if !customer.tags.contains(&self.eligibility_tag) {
            return RunResult::default();
        }

        let operations = cart
            .lines
            .iter()
            .filter_map(|line| {
                self.schedule.discount_for(line.quantity).map(|percent| {
                    CartOperation::update(line.id.clone(), percentage_points(&percent))
                })
            })
            .collect();

        RunResult { operations }
    }

    /// Evaluate a full run input.
    #[must_use]
    pub fn run(&self, input: &RunInput) -> RunResult {
        self.evaluate(&input.cart)
    }
}

impl Default for WholesalePolicy {
    fn default() -> Self {
        Self::new(WHOLESALE_TAG, TierSchedule::default())
    }
}
