//! The quote calculator.
//!
//! Pure arithmetic over a rate card: pick the equipment-dependent base fee,
//! add the flat travel estimate and the 5% service fee. Quotes are derived
//! on every input change and never stored.

use encore_catalog::RateCard;
use encore_core::money::Money;
use serde::{Deserialize, Serialize};

/// Flat travel fee estimate
///
/// The product quotes a flat estimate regardless of the artist's travel
/// radius or the venue location; the rate card's `max_travel_km` is carried
/// for future use only.
pub const TRAVEL_FEE: Money = Money::from_units(50);

/// Service fee percentage applied to the base fee
const SERVICE_FEE_PERCENT: u64 = 5;

/// A price quote for one booking configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Equipment-dependent artist fee
    pub base_fee: Money,
    /// Flat travel estimate
    pub travel_fee: Money,
    /// 5% of the base fee, rounded half-up to whole units
    pub service_fee: Money,
    /// Sum of the three fees
    pub total: Money,
}

impl Quote {
    /// The 50% deposit due now under the deposit payment option
    ///
    /// Rounded up so the deposit never undershoots half the total.
    #[must_use]
    pub const fn deposit(&self) -> Money {
        self.total.halved_up()
    }
}

/// Computes a quote from `rate_card` and the equipment selection
///
/// Total function over non-negative money; no side effects.
#[must_use]
pub fn compute_quote(rate_card: &RateCard, wants_equipment: bool) -> Quote {
    let base_fee = if wants_equipment {
        rate_card.price_with_equipment
    } else {
        rate_card.price_without_equipment
    };

    let service_fee = base_fee.scale_half_up(SERVICE_FEE_PERCENT, 100);
    let total = base_fee.saturating_add(TRAVEL_FEE).saturating_add(service_fee);

    Quote {
        base_fee,
        travel_fee: TRAVEL_FEE,
        service_fee,
        total,
    }
}
