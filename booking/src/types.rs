//! Domain types for the booking flow.

use chrono::{DateTime, NaiveDate, Utc};
use encore_catalog::ArtistId;
use serde::{Deserialize, Serialize};

/// Kind of event being booked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// Wedding reception
    #[default]
    Wedding,
    /// Birthday party
    Birthday,
    /// Corporate function
    Corporate,
    /// Club or party night
    Club,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wedding => write!(f, "Wedding"),
            Self::Birthday => write!(f, "Birthday"),
            Self::Corporate => write!(f, "Corporate"),
            Self::Club => write!(f, "Club/Party"),
        }
    }
}

/// How the client pays at the payment step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentChoice {
    /// Pay a 50% deposit now
    #[default]
    Deposit,
    /// Pay the full amount now
    Full,
}

/// The four steps of the booking flow, strictly linear
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BookingStep {
    /// Event details: date, type, guests, venue, notes
    #[default]
    Details,
    /// Equipment option and price breakdown
    Options,
    /// Payment choice and card entry
    Payment,
    /// Terminal: booking confirmed, draft frozen
    Confirmed,
}

impl BookingStep {
    /// 1-based position of this step, always within `1..=4`
    #[must_use]
    pub const fn position(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Options => 2,
            Self::Payment => 3,
            Self::Confirmed => 4,
        }
    }

    /// The following step, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::Options),
            Self::Options => Some(Self::Payment),
            Self::Payment => Some(Self::Confirmed),
            Self::Confirmed => None,
        }
    }

    /// The preceding step, if any
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::Options => Some(Self::Details),
            Self::Payment => Some(Self::Options),
            Self::Confirmed => Some(Self::Payment),
        }
    }

    /// Whether this step ends the flow
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Details => write!(f, "Details"),
            Self::Options => write!(f, "Options"),
            Self::Payment => write!(f, "Payment"),
            Self::Confirmed => write!(f, "Done"),
        }
    }
}

/// A human-facing booking reference
///
/// Fixed `ENC-` prefix plus a four-digit numeric suffix; not required to be
/// globally unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReference(String);

impl BookingReference {
    /// Prefix of every reference
    pub const PREFIX: &'static str = "ENC";

    /// Creates a reference from a numeric suffix
    #[must_use]
    pub fn from_suffix(suffix: u32) -> Self {
        Self(format!("{}-{:04}", Self::PREFIX, suffix))
    }

    /// Returns the reference as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selections carried over from the profile page into a fresh draft
///
/// Seeding happens once, at draft creation only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingSeed {
    /// The artist being booked
    pub artist_id: ArtistId,
    /// Event date picked on the profile, if any
    pub event_date: Option<NaiveDate>,
    /// Venue entered on the profile
    pub venue_location: String,
    /// Equipment option picked on the profile
    pub wants_equipment: bool,
}

/// State of one in-progress booking
///
/// Owned exclusively by the active booking session: created when a client
/// starts the flow, discarded on abandon, frozen on confirmation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingState {
    /// The artist being booked
    pub artist_id: ArtistId,
    /// Date of the event
    pub event_date: Option<NaiveDate>,
    /// Kind of event
    pub event_type: EventType,
    /// Expected number of guests
    pub guest_count: u32,
    /// Venue address
    pub venue_location: String,
    /// Whether the artist supplies the sound system
    pub wants_equipment: bool,
    /// Special requests
    pub notes: String,
    /// Payment option picked at the payment step
    pub payment_choice: PaymentChoice,
    /// Current step of the flow
    pub step: BookingStep,
    /// Reference emitted on confirmation
    pub reference: Option<BookingReference>,
    /// When the booking was confirmed
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Last rejected operation, for the UI to surface
    pub last_error: Option<String>,
}

impl BookingState {
    /// Creates a fresh draft for `artist_id` with the surface defaults
    #[must_use]
    pub fn new(artist_id: ArtistId) -> Self {
        Self {
            artist_id,
            event_date: None,
            event_type: EventType::default(),
            guest_count: 100,
            venue_location: String::new(),
            wants_equipment: false,
            notes: String::new(),
            payment_choice: PaymentChoice::default(),
            step: BookingStep::Details,
            reference: None,
            confirmed_at: None,
            last_error: None,
        }
    }

    /// Creates a draft pre-filled from profile-page selections
    #[must_use]
    pub fn seeded(seed: BookingSeed) -> Self {
        let mut state = Self::new(seed.artist_id);
        state.event_date = seed.event_date;
        state.venue_location = seed.venue_location;
        state.wants_equipment = seed.wants_equipment;
        state
    }

    /// Whether the draft is frozen (confirmed, no further edits)
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.step.is_terminal()
    }

    /// Whether the details step has everything it needs to advance
    #[must_use]
    pub fn details_complete(&self) -> bool {
        self.event_date.is_some() && !self.venue_location.trim().is_empty()
    }
}
