//! Quantity Discount Tiers
//!
//! A tier maps a minimum line quantity to a percentage discount. A schedule is
//! an ordered table of tiers; the tier that applies to a line is the one with
//! the *highest* threshold the line's quantity meets or exceeds. Schedules are
//! validated once at construction, after which tier selection cannot fail.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::discounts::fraction;

/// Errors raised when constructing a [`TierSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierScheduleError {
    /// Tier thresholds must rise strictly from one tier to the next.
    #[error("tier thresholds must be strictly increasing")]
    ThresholdOrder,

    /// A higher threshold must never carry a smaller discount.
    #[error("tier discounts must not decrease as thresholds rise")]
    DiscountOrder,

    /// Discounts are percentages in (0, 100].
    #[error("tier discounts must be greater than zero and at most 100%")]
    DiscountRange,
}

/// A single quantity tier: buy at least `min_quantity`, get `percent_off`.
#[derive(Debug, Clone, Copy)]
pub struct DiscountTier {
    min_quantity: u32,
    percent_off: Percentage,
}

impl DiscountTier {
    /// Create a new tier from a minimum quantity and a discount percentage.
    #[must_use]
    pub fn new(min_quantity: u32, percent_off: Percentage) -> Self {
        Self {
            min_quantity,
            percent_off,
        }
    }

    /// Return the minimum quantity required to reach this tier.
    #[must_use]
    pub const fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    /// Return the discount granted by this tier.
    #[must_use]
    pub const fn percent_off(&self) -> Percentage {
        self.percent_off
    }
}

/// An immutable, validated table of [`DiscountTier`]s ordered by threshold.
///
/// The default schedule is the wholesale reference table: 10+ units take 10%
/// off, 50+ take 15%, 200+ take 20%.
#[derive(Debug, Clone)]
pub struct TierSchedule {
    tiers: Vec<DiscountTier>,
}

impl TierSchedule {
    /// Create a schedule from tiers ordered by ascending threshold.
    ///
    /// # Errors
    ///
    /// Returns a [`TierScheduleError`] if thresholds are not strictly
    /// increasing, if a higher tier carries a smaller discount than a lower
    /// one, or if any discount falls outside (0, 100].
    pub fn new(tiers: Vec<DiscountTier>) -> Result<Self, TierScheduleError> {
        for pair in tiers.windows(2) {
            if let [lower, upper] = pair {
                if upper.min_quantity <= lower.min_quantity {
                    return Err(TierScheduleError::ThresholdOrder);
                }

                if fraction(&upper.percent_off) < fraction(&lower.percent_off) {
                    return Err(TierScheduleError::DiscountOrder);
                }
            }
        }

        for tier in &tiers {
            let discount = fraction(&tier.percent_off);

            if discount <= Decimal::ZERO || discount > Decimal::ONE {
                return Err(TierScheduleError::DiscountRange);
            }
        }

        Ok(Self { tiers })
    }

    /// Return the tiers in ascending threshold order.
    #[must_use]
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Select the discount for a line quantity, if any tier is met.
    ///
    /// Picks the highest threshold the quantity meets or exceeds. Quantities
    /// below every threshold (including zero and negative values from
    /// malformed carts) select nothing.
    #[must_use]
    pub fn discount_for(&self, quantity: i64) -> Option<Percentage> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| quantity >= i64::from(tier.min_quantity))
            .map(DiscountTier::percent_off)
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier::new(10, Percentage::from(0.10)),
                DiscountTier::new(50, Percentage::from(0.15)),
                DiscountTier::new(200, Percentage::from(0.20)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn make_schedule() -> Result<TierSchedule, TierScheduleError> {
        TierSchedule::new(vec![
            DiscountTier::new(10, Percentage::from(0.10)),
            DiscountTier::new(50, Percentage::from(0.15)),
            DiscountTier::new(200, Percentage::from(0.20)),
        ])
    }

    #[test]
    fn new_accepts_ascending_tiers() -> TestResult {
        let schedule = make_schedule()?;

        assert_eq!(schedule.tiers().len(), 3);
        assert_eq!(
            schedule.tiers().first().map(DiscountTier::min_quantity),
            Some(10)
        );

        Ok(())
    }

    #[test]
    fn new_rejects_unsorted_thresholds() {
        let result = TierSchedule::new(vec![
            DiscountTier::new(50, Percentage::from(0.15)),
            DiscountTier::new(10, Percentage::from(0.10)),
        ]);

        assert_eq!(result.err(), Some(TierScheduleError::ThresholdOrder));
    }

    #[test]
    fn new_rejects_duplicate_thresholds() {
        let result = TierSchedule::new(vec![
            DiscountTier::new(10, Percentage::from(0.10)),
            DiscountTier::new(10, Percentage::from(0.15)),
        ]);

        assert_eq!(result.err(), Some(TierScheduleError::ThresholdOrder));
    }

    #[test]
    fn new_rejects_decreasing_discounts() {
        let result = TierSchedule::new(vec![
            DiscountTier::new(10, Percentage::from(0.15)),
            DiscountTier::new(50, Percentage::from(0.10)),
        ]);

        assert_eq!(result.err(), Some(TierScheduleError::DiscountOrder));
    }

    #[test]
    fn new_allows_equal_discounts_across_tiers() -> TestResult {
        let schedule = TierSchedule::new(vec![
            DiscountTier::new(10, Percentage::from(0.10)),
            DiscountTier::new(50, Percentage::from(0.10)),
        ])?;

        assert_eq!(schedule.tiers().len(), 2);

        Ok(())
    }

    #[test]
    fn new_rejects_zero_discount() {
        let result = TierSchedule::new(vec![DiscountTier::new(10, Percentage::from(0.0))]);

        assert_eq!(result.err(), Some(TierScheduleError::DiscountRange));
    }

    #[test]
    fn new_rejects_discount_above_one_hundred_percent() {
        let result = TierSchedule::new(vec![DiscountTier::new(10, Percentage::from(1.5))]);

        assert_eq!(result.err(), Some(TierScheduleError::DiscountRange));
    }

    #[test]
    fn new_accepts_empty_schedule() -> TestResult {
        let schedule = TierSchedule::new(vec![])?;

        assert_eq!(schedule.discount_for(1_000), None);

        Ok(())
    }

    #[test]
    fn discount_for_picks_highest_threshold_met() -> TestResult {
        let schedule = make_schedule()?;

        assert_eq!(schedule.discount_for(75), Some(Percentage::from(0.15)));
        assert_eq!(schedule.discount_for(1_000), Some(Percentage::from(0.20)));

        Ok(())
    }

    #[test]
    fn discount_for_boundary_quantities() -> TestResult {
        let schedule = make_schedule()?;

        let boundaries = [
            (9, None),
            (10, Some(Percentage::from(0.10))),
            (49, Some(Percentage::from(0.10))),
            (50, Some(Percentage::from(0.15))),
            (199, Some(Percentage::from(0.15))),
            (200, Some(Percentage::from(0.20))),
        ];

        for (quantity, expected) in boundaries {
            assert_eq!(
                schedule.discount_for(quantity),
                expected,
                "quantity {quantity} selected the wrong tier"
            );
        }

        Ok(())
    }

    #[test]
    fn discount_for_rejects_zero_and_negative_quantities() -> TestResult {
        let schedule = make_schedule()?;

        assert_eq!(schedule.discount_for(0), None);
        assert_eq!(schedule.discount_for(-5), None);
        assert_eq!(schedule.discount_for(i64::MIN), None);

        Ok(())
    }

    #[test]
    fn default_schedule_matches_the_wholesale_table() {
        let schedule = TierSchedule::default();

        let thresholds: Vec<u32> = schedule
            .tiers()
            .iter()
            .map(DiscountTier::min_quantity)
            .collect();

        assert_eq!(thresholds, vec![10, 50, 200]);
    }
}
