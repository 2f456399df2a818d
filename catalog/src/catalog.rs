//! The in-memory artist catalog and its search filter.

use crate::types::{Artist, ArtistCategory, ArtistId, RateCard, Review};
use chrono::NaiveDate;
use encore_core::money::Money;

/// Search filter for the catalog
///
/// Mirrors the sidebar filters of the search surface: a price ceiling
/// (against the equipment-dependent fee), a last-minute toggle, and a
/// required travel radius.
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    /// Maximum acceptable fee, compared against the equipment-dependent price
    pub max_price: Option<Money>,
    /// Whether the fee comparison uses the with-equipment price
    pub wants_equipment: bool,
    /// Only artists accepting last-minute bookings
    pub last_minute_only: bool,
    /// Artists must travel at least this far, in kilometers
    pub min_travel_km: Option<u32>,
}

impl SearchFilter {
    fn matches(&self, artist: &Artist) -> bool {
        let relevant_price = if self.wants_equipment {
            artist.price_with_equipment
        } else {
            artist.price_without_equipment
        };

        if let Some(max_price) = self.max_price {
            if relevant_price > max_price {
                return false;
            }
        }

        if self.last_minute_only && !artist.last_minute_available {
            return false;
        }

        if let Some(min_travel_km) = self.min_travel_km {
            if artist.max_travel_km < min_travel_km {
                return false;
            }
        }

        true
    }
}

/// Fixed in-memory artist catalog
///
/// Built once at load time; never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    artists: Vec<Artist>,
}

impl Catalog {
    /// Creates a catalog over the given artists
    #[must_use]
    pub const fn new(artists: Vec<Artist>) -> Self {
        Self { artists }
    }

    /// Looks up an artist by id
    #[must_use]
    pub fn find(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|artist| &artist.id == id)
    }

    /// Looks up an artist, falling back to the first catalog entry on a miss
    ///
    /// Returns `None` only for an empty catalog. A miss is recovered, not an
    /// error, but it usually means a stale or mistyped artist id, so it is
    /// logged.
    #[must_use]
    pub fn find_or_first(&self, id: &ArtistId) -> Option<&Artist> {
        if let Some(artist) = self.find(id) {
            return Some(artist);
        }
        tracing::warn!(artist_id = %id, "artist not in catalog, falling back to first entry");
        self.artists.first()
    }

    /// Returns the rate card for an artist
    #[must_use]
    pub fn rate_card(&self, id: &ArtistId) -> Option<RateCard> {
        self.find(id).map(Artist::rate_card)
    }

    /// Returns the artists matching `filter`, in catalog order
    #[must_use]
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Artist> {
        self.artists
            .iter()
            .filter(|artist| filter.matches(artist))
            .collect()
    }

    /// All artists in catalog order
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Number of artists in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// The catalog shipped with the demo build
    ///
    /// Four performers with hand-written profiles; stands in for the real
    /// catalog service.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Artist {
                id: ArtistId::new("1"),
                name: "DJ Neon Pulse".to_string(),
                category: ArtistCategory::Dj,
                genres: vec![
                    "House".to_string(),
                    "Techno".to_string(),
                    "Top 40".to_string(),
                ],
                rating: 4.9,
                review_count: 124,
                location: "New York, NY".to_string(),
                price_with_equipment: Money::from_units(1500),
                price_without_equipment: Money::from_units(1000),
                max_travel_km: 200,
                last_minute_available: true,
                description: "Bringing the pulse of the underground to your private events. \
                              Specialized in high-energy sets and immersive lighting experiences."
                    .to_string(),
                reviews: vec![
                    Review {
                        id: "r1".to_string(),
                        author: "Sarah J.".to_string(),
                        rating: 5.0,
                        date: date(2023, 10, 12),
                        text: "Absolutely electric performance!".to_string(),
                    },
                    Review {
                        id: "r2".to_string(),
                        author: "Mike T.".to_string(),
                        rating: 4.5,
                        date: date(2023, 9, 28),
                        text: "Great vibe, highly recommended.".to_string(),
                    },
                ],
            },
            Artist {
                id: ArtistId::new("2"),
                name: "The Midnight Groovers".to_string(),
                category: ArtistCategory::LiveBand,
                genres: vec!["Jazz".to_string(), "Funk".to_string(), "Soul".to_string()],
                rating: 5.0,
                review_count: 89,
                location: "Los Angeles, CA".to_string(),
                price_with_equipment: Money::from_units(3500),
                price_without_equipment: Money::from_units(2800),
                max_travel_km: 500,
                last_minute_available: false,
                description: "A 5-piece band that brings class and groove. Perfect for upscale \
                              weddings and corporate galas."
                    .to_string(),
                reviews: vec![Review {
                    id: "r3".to_string(),
                    author: "Elena R.".to_string(),
                    rating: 5.0,
                    date: date(2023, 11, 5),
                    text: "The soul they bring is unmatched.".to_string(),
                }],
            },
            Artist {
                id: ArtistId::new("3"),
                name: "Cyber Violinist".to_string(),
                category: ArtistCategory::Soloist,
                genres: vec!["Classical Crossover".to_string(), "EDM".to_string()],
                rating: 4.8,
                review_count: 45,
                location: "London, UK".to_string(),
                price_with_equipment: Money::from_units(1200),
                price_without_equipment: Money::from_units(900),
                max_travel_km: 100,
                last_minute_available: true,
                description: "Classical training meets futuristic beats. An unforgettable solo \
                              performance."
                    .to_string(),
                reviews: vec![],
            },
            Artist {
                id: ArtistId::new("4"),
                name: "Bassline Collective".to_string(),
                category: ArtistCategory::Dj,
                genres: vec!["Drum & Bass".to_string(), "Dubstep".to_string()],
                rating: 4.7,
                review_count: 210,
                location: "Berlin, DE".to_string(),
                price_with_equipment: Money::from_units(1800),
                price_without_equipment: Money::from_units(1200),
                max_travel_km: 300,
                last_minute_available: true,
                description: "Deep bass lines and heavy rhythms for the ultimate party \
                              experience."
                    .to_string(),
                reviews: vec![],
            },
        ])
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_is_non_empty() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn find_returns_the_matching_artist() {
        let catalog = Catalog::seeded();
        let artist = catalog.find(&ArtistId::new("2"));
        assert_eq!(artist.map(|a| a.name.as_str()), Some("The Midnight Groovers"));
    }

    #[test]
    fn find_misses_honestly() {
        let catalog = Catalog::seeded();
        assert!(catalog.find(&ArtistId::new("999")).is_none());
    }

    #[test]
    fn find_or_first_falls_back_to_the_first_entry() {
        let catalog = Catalog::seeded();
        let artist = catalog.find_or_first(&ArtistId::new("999"));
        assert_eq!(artist.map(|a| a.id.as_str()), Some("1"));
    }

    #[test]
    fn find_or_first_on_an_empty_catalog_is_none() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.find_or_first(&ArtistId::new("1")).is_none());
    }

    #[test]
    fn rate_card_matches_the_artist_prices() {
        let catalog = Catalog::seeded();
        let card = catalog.rate_card(&ArtistId::new("1"));
        assert_eq!(
            card.map(|c| c.price_without_equipment),
            Some(Money::from_units(1000))
        );
    }

    #[test]
    fn search_applies_the_price_ceiling_against_the_relevant_fee() {
        let catalog = Catalog::seeded();

        // Without equipment: 1000, 2800, 900, 1200 — ceiling 1200 keeps three.
        let filter = SearchFilter {
            max_price: Some(Money::from_units(1200)),
            ..SearchFilter::default()
        };
        assert_eq!(catalog.search(&filter).len(), 3);

        // With equipment: 1500, 3500, 1200, 1800 — same ceiling keeps one.
        let filter = SearchFilter {
            max_price: Some(Money::from_units(1200)),
            wants_equipment: true,
            ..SearchFilter::default()
        };
        assert_eq!(catalog.search(&filter).len(), 1);
    }

    #[test]
    fn search_honors_the_last_minute_toggle() {
        let catalog = Catalog::seeded();
        let filter = SearchFilter {
            last_minute_only: true,
            ..SearchFilter::default()
        };
        let results = catalog.search(&filter);
        assert!(results.iter().all(|artist| artist.last_minute_available));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn search_requires_the_travel_radius() {
        let catalog = Catalog::seeded();
        let filter = SearchFilter {
            min_travel_km: Some(250),
            ..SearchFilter::default()
        };
        let results = catalog.search(&filter);
        assert_eq!(results.len(), 2); // 500km and 300km entries
    }

    #[test]
    fn default_filter_matches_everyone() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.search(&SearchFilter::default()).len(), catalog.len());
    }
}
