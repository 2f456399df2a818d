//! Domain types for the artist catalog.

use chrono::NaiveDate;
use encore_core::money::Money;
use serde::{Deserialize, Serialize};

/// Unique identifier for an artist
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(String);

impl ArtistId {
    /// Creates an `ArtistId` from its string form
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Performance category of an artist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtistCategory {
    /// DJ sets
    Dj,
    /// Full live band
    LiveBand,
    /// Solo instrumentalist
    Soloist,
}

impl std::fmt::Display for ArtistCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dj => write!(f, "DJ"),
            Self::LiveBand => write!(f, "Live Band"),
            Self::Soloist => write!(f, "Solo Instrumentalist"),
        }
    }
}

/// A client review on an artist profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier
    pub id: String,
    /// Display name of the reviewer
    pub author: String,
    /// Star rating, 0.0 to 5.0
    pub rating: f32,
    /// Date the review was left
    pub date: NaiveDate,
    /// Review text
    pub text: String,
}

/// Pricing and travel reference data for an artist
///
/// Immutable projection of an [`Artist`], consumed by the pricing
/// calculator. The travel radius rides along for future use; the current
/// product quotes a flat travel fee regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Fee when the artist supplies the sound system
    pub price_with_equipment: Money,
    /// Fee when the venue supplies sound
    pub price_without_equipment: Money,
    /// Maximum distance the artist travels, in kilometers
    pub max_travel_km: u32,
}

/// A bookable performer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist identifier
    pub id: ArtistId,
    /// Stage name
    pub name: String,
    /// Performance category
    pub category: ArtistCategory,
    /// Musical genres covered
    pub genres: Vec<String>,
    /// Average star rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of reviews behind the rating
    pub review_count: u32,
    /// Home base of the artist
    pub location: String,
    /// Fee when the artist supplies the sound system
    pub price_with_equipment: Money,
    /// Fee when the venue supplies sound
    pub price_without_equipment: Money,
    /// Maximum distance the artist travels, in kilometers
    pub max_travel_km: u32,
    /// Whether the artist accepts last-minute bookings
    pub last_minute_available: bool,
    /// Profile description
    pub description: String,
    /// Client reviews
    pub reviews: Vec<Review>,
}

impl Artist {
    /// Returns the pricing-relevant projection of this artist
    #[must_use]
    pub const fn rate_card(&self) -> RateCard {
        RateCard {
            price_with_equipment: self.price_with_equipment,
            price_without_equipment: self.price_without_equipment,
            max_travel_km: self.max_travel_km,
        }
    }
}
