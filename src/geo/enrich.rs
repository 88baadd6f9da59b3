//! Enrichment of country-keyed aggregation rows

use serde::Serialize;

use crate::algorithm::grouping::{self, GroupRow};
use crate::geo::tables;
use crate::models::{Field, SalaryRecord, SortOrder};

/// A plottable point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// A country aggregation row with its normalized code and location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCountry {
    /// Residence code as found in the data
    pub code: String,
    /// ISO alpha-3 code, or `code` verbatim when it is not in the table
    pub iso3: String,
    /// Mean salary
    pub mean: f64,
    /// Number of records
    pub count: usize,
    /// Centroid, absent when `iso3` has no entry in the coordinate table
    pub coordinates: Option<Coordinates>,
}

impl EnrichedCountry {
    /// Whether the row can be placed on a map as a point
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// ISO alpha-3 code for a residence code, falling back to the code itself
#[must_use]
pub fn normalize_code(code: &str) -> String {
    tables::iso3_for(code).map_or_else(|| code.to_string(), str::to_string)
}

/// Attach ISO alpha-3 codes and coordinates to country rows
///
/// Unknown codes are kept: the ISO-3 field repeats the input code and
/// coordinates are `None`.
#[must_use]
pub fn enrich(country_rows: &[GroupRow]) -> Vec<EnrichedCountry> {
    country_rows
        .iter()
        .map(|row| {
            let iso3 = normalize_code(&row.key);
            let coordinates =
                tables::coordinates_for(&iso3).map(|(lat, lon)| Coordinates { lat, lon });
            if coordinates.is_none() {
                log::debug!("No coordinates for country code {}", row.key);
            }
            EnrichedCountry {
                code: row.key.clone(),
                iso3,
                mean: row.mean,
                count: row.count,
                coordinates,
            }
        })
        .collect()
}

/// Mean salary and record count per residence code
#[must_use]
pub fn country_stats(records: &[SalaryRecord]) -> Vec<GroupRow> {
    grouping::group_mean(records, Field::Residence)
}

/// Country with the highest mean salary, ties by code ascending
#[must_use]
pub fn top_country(rows: &[EnrichedCountry]) -> Option<&EnrichedCountry> {
    rows.iter().min_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| a.code.cmp(&b.code))
    })
}

/// Countries ranked by mean salary in `order`
#[must_use]
pub fn ranked(mut rows: Vec<EnrichedCountry>, order: SortOrder) -> Vec<EnrichedCountry> {
    rows.sort_by(|a, b| {
        let primary = match order {
            SortOrder::Ascending => a.mean.total_cmp(&b.mean),
            SortOrder::Descending => b.mean.total_cmp(&a.mean),
        };
        primary.then_with(|| a.code.cmp(&b.code))
    });
    rows
}
