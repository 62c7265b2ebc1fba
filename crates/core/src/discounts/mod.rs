//! Discount percentage utilities
//!
//! Helpers for moving between [`Percentage`] values and the decimal forms the
//! tier schedule and the output operations work in.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

/// Return the percentage as a decimal fraction (25% -> `0.25`).
#[must_use]
pub fn fraction(percent: &Percentage) -> Decimal {
    (*percent) * Decimal::ONE // decimal_percentage doesn't expose the underlying Decimal
}

/// Return the percentage in percentage points (25% -> `25`).
///
/// This is the form cart operations carry on the wire.
#[must_use]
pub fn percentage_points(percent: &Percentage) -> Decimal {
    fraction(percent) * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::ToPrimitive;

    use super::*;

    #[test]
    fn fraction_extracts_the_decimal() {
        let percent = Percentage::from(0.25);

        assert_eq!(fraction(&percent), Decimal::new(25, 2));
    }

    #[test]
    fn percentage_points_scales_by_one_hundred() {
        let percent = Percentage::from(0.15);

        assert_eq!(percentage_points(&percent), Decimal::new(15, 0));
    }

    #[test]
    fn percentage_points_round_trips_to_float_exactly() {
        let percent = Percentage::from(0.10);

        assert_eq!(percentage_points(&percent).to_f64(), Some(10.0));
    }
}
