//! Profile-page gatekeeping for starting a booking.
//!
//! The profile surface collects a date, a venue and the equipment option
//! before handing off to the booking flow. This module owns that
//! gatekeeping: it either produces the [`BookingSeed`] to create the draft
//! from, or says why the flow can't start and where to send the user.

use crate::types::BookingSeed;
use chrono::NaiveDate;
use encore_catalog::Artist;
use encore_core::{
    notification::Notification,
    route::{RoutePath, routes},
};
use encore_session::Session;
use thiserror::Error;

/// Why a booking could not be started from the profile page
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BeginBookingError {
    /// No event date selected
    #[error("an event date is required")]
    MissingEventDate,

    /// Venue field empty or whitespace
    #[error("a venue location is required")]
    MissingVenueLocation,

    /// Nobody is logged in
    #[error("authentication is required to book")]
    NotAuthenticated,
}

impl BeginBookingError {
    /// The notification the surface shows for this rejection
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::MissingEventDate => Notification::info("Please select an event date."),
            Self::MissingVenueLocation => Notification::info("Please enter a venue location."),
            Self::NotAuthenticated => {
                Notification::info("Please log in or sign up to book this artist.")
            }
        }
    }

    /// Where the surface sends the user after this rejection, if anywhere
    #[must_use]
    pub const fn redirect(&self) -> Option<RoutePath> {
        match self {
            Self::NotAuthenticated => Some(routes::CLIENT_LOGIN),
            Self::MissingEventDate | Self::MissingVenueLocation => None,
        }
    }
}

/// Validates the profile-page selections and produces a booking seed
///
/// Checked in surface order: date, venue, then authentication.
///
/// # Errors
///
/// Returns the first [`BeginBookingError`] encountered; the caller surfaces
/// its [`notification`](BeginBookingError::notification) and follows its
/// [`redirect`](BeginBookingError::redirect).
pub fn begin_booking(
    artist: &Artist,
    event_date: Option<NaiveDate>,
    venue_location: &str,
    wants_equipment: bool,
    session: Option<&Session>,
) -> Result<BookingSeed, BeginBookingError> {
    let Some(event_date) = event_date else {
        return Err(BeginBookingError::MissingEventDate);
    };

    if venue_location.trim().is_empty() {
        return Err(BeginBookingError::MissingVenueLocation);
    }

    if session.is_none() {
        return Err(BeginBookingError::NotAuthenticated);
    }

    Ok(BookingSeed {
        artist_id: artist.id.clone(),
        event_date: Some(event_date),
        venue_location: venue_location.to_string(),
        wants_equipment,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test assertions
mod tests {
    use super::*;
    use encore_catalog::{ArtistId, Catalog};
    use encore_core::notification::Severity;
    use encore_session::{Role, UserId};

    fn an_artist() -> Artist {
        let catalog = Catalog::seeded();
        catalog.find(&ArtistId::new("1")).unwrap().clone()
    }

    fn client_session() -> Session {
        Session {
            user_id: UserId::new(),
            display_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Client,
        }
    }

    fn a_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, 9, 12)
    }

    #[test]
    fn missing_date_is_rejected_first() {
        let session = client_session();
        let result = begin_booking(&an_artist(), None, "Somewhere", false, Some(&session));
        assert_eq!(result, Err(BeginBookingError::MissingEventDate));
    }

    #[test]
    fn blank_venue_is_rejected() {
        let session = client_session();
        let result = begin_booking(&an_artist(), a_date(), "   ", false, Some(&session));
        assert_eq!(result, Err(BeginBookingError::MissingVenueLocation));
    }

    #[test]
    fn anonymous_clients_are_sent_to_login() {
        let result = begin_booking(&an_artist(), a_date(), "Somewhere", false, None);
        let error = result.unwrap_err();
        assert_eq!(error, BeginBookingError::NotAuthenticated);
        assert_eq!(error.redirect(), Some(routes::CLIENT_LOGIN));
        assert_eq!(error.notification().severity, Severity::Info);
    }

    #[test]
    fn valid_selections_produce_a_seed() {
        let artist = an_artist();
        let session = client_session();
        let seed = begin_booking(
            &artist,
            a_date(),
            "The Roundhouse, London",
            true,
            Some(&session),
        )
        .unwrap();

        assert_eq!(seed.artist_id, artist.id);
        assert_eq!(seed.event_date, a_date());
        assert_eq!(seed.venue_location, "The Roundhouse, London");
        assert!(seed.wants_equipment);
    }

    #[test]
    fn field_rejections_have_no_redirect() {
        assert_eq!(BeginBookingError::MissingEventDate.redirect(), None);
        assert_eq!(BeginBookingError::MissingVenueLocation.redirect(), None);
    }
}
