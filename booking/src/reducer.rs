//! Reducer logic for the booking draft state machine.
//!
//! Four strictly linear steps: `Details → Options → Payment → Confirmed`.
//! Field edits are accepted in any non-terminal state; leaving `Details`
//! requires a date and a venue; confirmation happens from `Payment`, emits a
//! booking reference and freezes the draft for good.

use crate::types::{BookingReference, BookingState, BookingStep, EventType, PaymentChoice};
use chrono::{DateTime, NaiveDate, Utc};
use encore_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, Notifier, ReferenceSource},
    notification::Notification,
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;

/// Environment collaborators for the booking reducer
#[derive(Clone)]
pub struct BookingEnvironment {
    /// Clock for the confirmation timestamp
    pub clock: Arc<dyn Clock>,
    /// Source of booking-reference suffixes
    pub references: Arc<dyn ReferenceSource>,
    /// Toast layer of the UI shell
    pub notifier: Arc<dyn Notifier>,
}

impl BookingEnvironment {
    /// Creates a new `BookingEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        references: Arc<dyn ReferenceSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clock,
            references,
            notifier,
        }
    }
}

/// Actions for the booking draft (commands and events)
#[derive(Clone, Debug, PartialEq)]
pub enum BookingAction {
    // ========== Field commands ==========
    /// Set or clear the event date
    SetEventDate {
        /// The selected date, or `None` to clear it
        date: Option<NaiveDate>,
    },

    /// Pick the kind of event
    SetEventType {
        /// The selected event type
        event_type: EventType,
    },

    /// Set the expected guest count
    SetGuestCount {
        /// Number of guests
        count: u32,
    },

    /// Set the venue address
    SetVenueLocation {
        /// Venue address text
        location: String,
    },

    /// Toggle the artist-supplied sound system
    SetEquipment {
        /// Whether the artist supplies sound
        wants_equipment: bool,
    },

    /// Set the special-requests text
    SetNotes {
        /// Free-form notes
        notes: String,
    },

    /// Pick how to pay at the payment step
    SetPaymentChoice {
        /// Deposit or full payment
        choice: PaymentChoice,
    },

    // ========== Flow commands ==========
    /// Move to the next step
    Advance,

    /// Move back one step
    Retreat,

    /// Confirm the booking from the payment step
    Confirm,

    // ========== Events ==========
    /// Event: the booking was confirmed
    Confirmed {
        /// Generated booking reference
        reference: BookingReference,
        /// Confirmation timestamp
        confirmed_at: DateTime<Utc>,
    },
}

/// Reducer for the booking draft
#[derive(Clone, Debug, Default)]
pub struct BookingReducer;

impl BookingReducer {
    /// Creates a new `BookingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates leaving the details step
    fn validate_details(state: &BookingState) -> Result<(), &'static str> {
        if state.event_date.is_none() {
            return Err("Please select an event date.");
        }
        if state.venue_location.trim().is_empty() {
            return Err("Please enter a venue location.");
        }
        Ok(())
    }

    /// Applies the confirmation event to state
    ///
    /// Idempotent: replaying the event over an already-confirmed draft
    /// changes nothing.
    fn apply_confirmed(
        state: &mut BookingState,
        reference: &BookingReference,
        confirmed_at: DateTime<Utc>,
    ) {
        state.step = BookingStep::Confirmed;
        state.reference = Some(reference.clone());
        state.confirmed_at = Some(confirmed_at);
        state.last_error = None;
    }

    /// Runs the confirmation path shared by `Confirm` and `Advance`-from-payment
    fn confirm(
        state: &mut BookingState,
        env: &BookingEnvironment,
    ) -> SmallVec<[Effect<BookingAction>; 4]> {
        let reference = BookingReference::from_suffix(env.references.next_suffix());
        let confirmed_at = env.clock.now();

        Self::apply_confirmed(state, &reference, confirmed_at);

        tracing::info!(reference = %reference, "booking confirmed");
        env.notifier.notify(Notification::success(format!(
            "Booking confirmed! Reference {reference}"
        )));

        smallvec![Effect::emit(BookingAction::Confirmed {
            reference,
            confirmed_at,
        })]
    }
}

impl Reducer for BookingReducer {
    type State = BookingState;
    type Action = BookingAction;
    type Environment = BookingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // A confirmed draft is frozen: only the replayed confirmation event
        // is still meaningful.
        if state.is_frozen() && !matches!(action, BookingAction::Confirmed { .. }) {
            tracing::debug!(?action, "draft is frozen, action ignored");
            return SmallVec::new();
        }

        match action {
            // ========== Field commands ==========
            BookingAction::SetEventDate { date } => {
                state.event_date = date;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetEventType { event_type } => {
                state.event_type = event_type;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetGuestCount { count } => {
                state.guest_count = count;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetVenueLocation { location } => {
                state.venue_location = location;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetEquipment { wants_equipment } => {
                state.wants_equipment = wants_equipment;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetNotes { notes } => {
                state.notes = notes;
                state.last_error = None;
                SmallVec::new()
            }

            BookingAction::SetPaymentChoice { choice } => {
                state.payment_choice = choice;
                state.last_error = None;
                SmallVec::new()
            }

            // ========== Flow commands ==========
            BookingAction::Advance => match state.step {
                BookingStep::Details => {
                    if let Err(message) = Self::validate_details(state) {
                        state.last_error = Some(message.to_string());
                        env.notifier.notify(Notification::info(message));
                        return SmallVec::new();
                    }
                    state.step = BookingStep::Options;
                    state.last_error = None;
                    SmallVec::new()
                }
                BookingStep::Options => {
                    state.step = BookingStep::Payment;
                    state.last_error = None;
                    SmallVec::new()
                }
                // Advancing out of the payment step is the "Pay & Book"
                // button: it confirms.
                BookingStep::Payment => Self::confirm(state, env),
                BookingStep::Confirmed => SmallVec::new(),
            },

            BookingAction::Retreat => {
                match state.step.previous() {
                    Some(previous) if !state.step.is_terminal() => {
                        state.step = previous;
                        state.last_error = None;
                    }
                    _ => {
                        tracing::debug!(step = %state.step, "retreat ignored");
                    }
                }
                SmallVec::new()
            }

            BookingAction::Confirm => {
                if state.step != BookingStep::Payment {
                    tracing::debug!(step = %state.step, "confirm outside the payment step rejected");
                    state.last_error =
                        Some("The booking can only be confirmed at the payment step.".to_string());
                    return SmallVec::new();
                }
                Self::confirm(state, env)
            }

            // ========== Events ==========
            BookingAction::Confirmed {
                reference,
                confirmed_at,
            } => {
                Self::apply_confirmed(state, &reference, confirmed_at);
                SmallVec::new()
            }
        }
    }
}
