//! Scripted CLI demo for the Encore booking core.
//!
//! Walks the whole client journey against the real reducers and stores:
//! rehydrate, log in, preview a quote on a profile, seed the booking flow,
//! step through it, confirm, and check the role guard for each dashboard.

use chrono::NaiveDate;
use encore_booking::{
    BookingAction, BookingEnvironment, BookingReducer, BookingState, PaymentChoice, begin_booking,
    compute_quote,
};
use encore_catalog::{ArtistId, Catalog};
use encore_core::environment::{
    InMemoryStorage, Navigator, Notifier, RandomReferences, SystemClock,
};
use encore_core::notification::Notification;
use encore_core::route::{RoutePath, routes};
use encore_runtime::Store;
use encore_session::{
    Identity, Role, SessionAction, SessionEnvironment, SessionReducer, SessionState, UserId,
    authorize,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Toast layer stand-in: prints notifications to the terminal
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("  [{}] {}", notification.severity, notification.message);
    }
}

/// Router stand-in: prints requested path changes
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &RoutePath, _state: Option<serde_json::Value>) {
        println!("  -> navigate to {path}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,encore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("encore demo starting");
    println!("=== Encore: booking a performer ===\n");

    let storage = Arc::new(InMemoryStorage::new());
    let notifier = Arc::new(ConsoleNotifier);
    let navigator = Arc::new(ConsoleNavigator);

    // Session store: rehydrate first, exactly as the shell does on start.
    let session_env =
        SessionEnvironment::new(storage.clone(), notifier.clone(), navigator.clone());
    let session_store = Store::new(SessionState::new(), SessionReducer::new(), session_env);

    session_store.send(SessionAction::Rehydrate).await?;
    let logged_in = session_store.state(SessionState::is_authenticated).await;
    println!("Rehydrated session: logged in = {logged_in}\n");

    // The auth collaborator has validated this identity for us.
    println!("Logging in...");
    session_store
        .send(SessionAction::LogIn {
            identity: Identity {
                user_id: UserId::new(),
                display_name: None,
                email: "ava@example.com".to_string(),
                role: Role::Client,
            },
        })
        .await?;

    let session = session_store.state(|s| s.current().cloned()).await;
    let Some(session) = session else {
        return Err("login did not produce a session".into());
    };
    println!("Active session: {} <{}> ({})\n", session.display_name, session.email, session.role);

    // Profile page: preview a quote for the first artist.
    let catalog = Catalog::seeded();
    let Some(artist) = catalog.find(&ArtistId::new("1")) else {
        return Err("seeded catalog is missing its first artist".into());
    };
    println!("Viewing profile: {} ({})", artist.name, artist.category);

    let wants_equipment = false;
    let quote = compute_quote(&artist.rate_card(), wants_equipment);
    println!("  Base fee      {}", quote.base_fee);
    println!("  Travel (est.) {}", quote.travel_fee);
    println!("  Service fee   {}", quote.service_fee);
    println!("  Total         {}", quote.total);
    println!("  Deposit (50%) {}\n", quote.deposit());

    // Continue to booking: the profile gatekeeping produces the seed.
    let event_date = NaiveDate::from_ymd_opt(2026, 9, 12);
    let seed = match begin_booking(
        artist,
        event_date,
        "The Roundhouse, London",
        wants_equipment,
        Some(&session),
    ) {
        Ok(seed) => seed,
        Err(error) => {
            notifier.notify(error.notification());
            if let Some(path) = error.redirect() {
                navigator.navigate(&path, None);
            }
            return Err(error.into());
        }
    };
    navigator.navigate(&routes::BOOKING, Some(serde_json::to_value(&seed)?));

    // The booking flow: a fresh draft seeded from the profile selections.
    let booking_env = BookingEnvironment::new(
        Arc::new(SystemClock),
        Arc::new(RandomReferences),
        notifier.clone(),
    );
    let booking_store = Store::new(
        BookingState::seeded(seed),
        BookingReducer::new(),
        booking_env,
    );

    println!("Step 1 - details");
    booking_store
        .send(BookingAction::SetNotes {
            notes: "First dance at 21:00, please fade in slow.".to_string(),
        })
        .await?;
    booking_store.send(BookingAction::Advance).await?;

    println!("Step 2 - options");
    booking_store.send(BookingAction::Advance).await?;

    println!("Step 3 - payment");
    booking_store
        .send(BookingAction::SetPaymentChoice {
            choice: PaymentChoice::Deposit,
        })
        .await?;
    let confirmed = booking_store
        .send_and_wait_for(
            BookingAction::Confirm,
            |action| matches!(action, BookingAction::Confirmed { .. }),
            Duration::from_secs(5),
        )
        .await?;

    if let BookingAction::Confirmed { reference, .. } = confirmed {
        println!("Step 4 - done. Reference {reference}\n");
    }

    let step = booking_store.state(|s| s.step).await;
    println!("Draft is frozen at step {step} ({}/4)\n", step.position());

    // Role guard: where can this session go?
    println!("Dashboard access for role '{}':", session.role);
    for (label, required) in [
        ("client dashboard", [Role::Client]),
        ("artist dashboard", [Role::Artist]),
        ("admin dashboard", [Role::Admin]),
    ] {
        let decision = authorize(Some(&session), &required);
        match decision.redirect {
            None => println!("  {label}: allowed"),
            Some(path) => println!("  {label}: denied, redirect to {path}"),
        }
    }

    println!("\nLogging out...");
    session_store.send(SessionAction::LogOut).await?;
    let logged_in = session_store.state(SessionState::is_authenticated).await;
    println!("Logged in = {logged_in}");

    Ok(())
}
