//! Artist reference data for the Encore booking marketplace.
//!
//! The catalog is a fixed in-memory collection built once at load time and
//! never mutated afterwards. Profiles, search results and the booking flow
//! all read from it; the pricing calculator consumes the [`RateCard`]
//! projection of an artist.
//!
//! Lookups are honest ([`Catalog::find`] returns `Option`), but the booking
//! surface historically fell back to the first catalog entry on a miss;
//! [`Catalog::find_or_first`] preserves that behavior and logs the miss so a
//! stale artist id is visible instead of silently masked.

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, SearchFilter};
pub use types::{Artist, ArtistCategory, ArtistId, RateCard, Review};
