//! Money in whole currency units.
//!
//! All marketplace prices are quoted in whole units (no cents in the rate
//! cards), so `Money` wraps a `u64` and keeps every computation in integer
//! arithmetic. Fee percentages round half-up to the nearest whole unit.

use serde::{Deserialize, Serialize};

/// Money amount in whole currency units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a new `Money` amount from whole units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, saturating at the numeric bound
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Scales by `numerator / denominator`, rounding half-up to whole units
    ///
    /// Used for percentage fees: a 5% fee is `scale_half_up(5, 100)`.
    /// A zero denominator yields zero rather than dividing by it.
    #[must_use]
    pub const fn scale_half_up(self, numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self(0);
        }
        Self((self.0.saturating_mul(numerator).saturating_add(denominator / 2)) / denominator)
    }

    /// Half the amount, rounded up to the next whole unit
    #[must_use]
    pub const fn halved_up(self) -> Self {
        Self(self.0.div_ceil(2))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_half_up_rounds_to_nearest() {
        // 5% of 1000 is exactly 50
        assert_eq!(Money::from_units(1000).scale_half_up(5, 100).units(), 50);
        // 5% of 1010 is 50.5, rounds up to 51
        assert_eq!(Money::from_units(1010).scale_half_up(5, 100).units(), 51);
        // 5% of 1009 is 50.45, rounds down to 50
        assert_eq!(Money::from_units(1009).scale_half_up(5, 100).units(), 50);
        // 5% of zero is zero
        assert!(Money::from_units(0).scale_half_up(5, 100).is_zero());
    }

    #[test]
    fn scale_with_zero_denominator_is_zero() {
        assert!(Money::from_units(500).scale_half_up(5, 0).is_zero());
    }

    #[test]
    fn halved_up_rounds_odd_amounts_up() {
        assert_eq!(Money::from_units(1100).halved_up().units(), 550);
        assert_eq!(Money::from_units(1101).halved_up().units(), 551);
    }

    #[test]
    fn saturating_add_clamps_at_bound() {
        let max = Money::from_units(u64::MAX);
        assert_eq!(max.saturating_add(Money::from_units(1)), max);
    }

    #[test]
    fn display_uses_whole_units() {
        assert_eq!(Money::from_units(1500).to_string(), "$1500");
    }
}
