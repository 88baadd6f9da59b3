//! Geographic enrichment for country-keyed aggregations
//!
//! Residence codes in the data are two-letter codes. Map rendering needs
//! ISO alpha-3 codes and, for text labels, centroid coordinates. Both come
//! from fixed reference tables that are incomplete on purpose: lookups
//! return `Option` and callers keep rows they cannot place.

pub mod enrich;
pub mod tables;

pub use enrich::{
    Coordinates, EnrichedCountry, country_stats, enrich, normalize_code, ranked, top_country,
};
pub use tables::{coordinates_for, iso3_for};
