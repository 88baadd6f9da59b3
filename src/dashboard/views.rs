//! View models handed to the presentation layer
//!
//! Each view bundles the aggregation behind one dashboard panel with the
//! derived figures its caption quotes (growth, jumps, leaders). Nothing here
//! formats numbers or produces markup.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::algorithm::grouping::{self, GroupRow, compare_by_mean};
use crate::algorithm::pivot::{self, PivotTable};
use crate::algorithm::{
    BoxStats, HistogramBin, YearlyStat, box_stats, growth_pct, histogram, percent_change,
    seniority_jump_pct,
};
use crate::config::{ModalityLabels, SeniorityLabels};
use crate::geo::{self, EnrichedCountry};
use crate::models::{Field, SalaryRecord, SortOrder};

/// Histogram and box-plot of salaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionView {
    /// Equal-width salary bins
    pub histogram: Vec<HistogramBin>,
    /// Quartile summary, absent for an empty selection
    pub box_stats: Option<BoxStats>,
}

impl DistributionView {
    /// Build the distribution panel
    #[must_use]
    pub fn build(records: &[SalaryRecord], bins: usize) -> Self {
        Self {
            histogram: histogram(records, bins),
            box_stats: box_stats(records),
        }
    }
}

/// Year-over-year evolution of salaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendView {
    /// One point per year, ascending
    pub points: Vec<YearlyStat>,
    /// Earliest year present
    pub first_year: Option<i32>,
    /// Latest year present
    pub last_year: Option<i32>,
    /// Mean growth between first and last year in percent
    pub growth_pct: f64,
}

impl TrendView {
    /// Build the trend panel from a yearly series
    #[must_use]
    pub fn from_points(points: Vec<YearlyStat>) -> Self {
        Self {
            first_year: points.first().map(|p| p.year),
            last_year: points.last().map(|p| p.year),
            growth_pct: growth_pct(&points),
            points,
        }
    }
}

/// Salary spread of one seniority level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelDistribution {
    /// Seniority value
    pub level: String,
    /// Quartile summary of the level
    pub stats: BoxStats,
}

/// Salary by seniority level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeniorityView {
    /// Mean and count per level, sorted by level
    pub levels: Vec<GroupRow>,
    /// Box-plot summary per level, same order as `levels`
    pub distributions: Vec<LevelDistribution>,
    /// Junior to senior jump in percent, `0.0` if either level is missing
    pub junior_to_senior_pct: f64,
}

impl SeniorityView {
    /// Build the seniority panel
    #[must_use]
    pub fn build(
        records: &[SalaryRecord],
        levels: Vec<GroupRow>,
        labels: &SeniorityLabels,
    ) -> Self {
        let distributions = levels
            .iter()
            .filter_map(|row| {
                let members: Vec<SalaryRecord> = records
                    .iter()
                    .filter(|r| r.seniority == row.key)
                    .cloned()
                    .collect();
                box_stats(&members).map(|stats| LevelDistribution {
                    level: row.key.clone(),
                    stats,
                })
            })
            .collect();

        let mean_of = |label: &str| levels.iter().find(|r| r.key == label).map(|r| r.mean);
        let junior = mean_of(labels.junior.as_str());
        let senior = mean_of(labels.senior.as_str());
        let junior_to_senior_pct = match (junior, senior) {
            (Some(junior), Some(senior)) => seniority_jump_pct(junior, senior),
            _ => 0.0,
        };

        Self {
            levels,
            distributions,
            junior_to_senior_pct,
        }
    }
}

/// Mean salary per country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryView {
    /// Every country with its ISO-3 code and optional coordinates, by code
    pub countries: Vec<EnrichedCountry>,
    /// Country with the highest mean
    pub top_country: Option<EnrichedCountry>,
    /// Number of countries
    pub country_count: usize,
    /// Number of countries that can be labelled on the map
    pub with_coordinates: usize,
}

impl CountryView {
    /// Build the country panel from enriched rows
    #[must_use]
    pub fn from_countries(countries: Vec<EnrichedCountry>) -> Self {
        Self {
            top_country: geo::top_country(&countries).cloned(),
            country_count: countries.len(),
            with_coordinates: countries.iter().filter(|c| c.has_coordinates()).count(),
            countries,
        }
    }

    /// Countries that can be placed as map labels
    pub fn plottable(&self) -> impl Iterator<Item = &EnrichedCountry> {
        self.countries.iter().filter(|c| c.has_coordinates())
    }
}

/// Country x seniority heatmap over the most represented countries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapView {
    /// Residence codes included, most records first
    pub countries: Vec<String>,
    /// Mean salary by ISO-3 code (rows) and seniority (columns)
    pub table: PivotTable,
    /// First seniority column
    pub first_level: Option<String>,
    /// Last seniority column
    pub last_level: Option<String>,
    /// Jump between the first and last column means in percent
    pub progression_pct: f64,
}

impl HeatmapView {
    /// Build the heatmap over the `top_countries` countries with most records
    #[must_use]
    pub fn build(records: &[SalaryRecord], top_countries: usize) -> Self {
        let countries: Vec<String> =
            grouping::top_n_by_count(records, Field::Residence, top_countries)
                .into_iter()
                .map(|row| row.key)
                .collect();
        let included: BTreeSet<&str> = countries.iter().map(String::as_str).collect();

        let subset: Vec<SalaryRecord> = records
            .iter()
            .filter(|r| included.contains(r.residence.as_str()))
            .cloned()
            .collect();
        let table = pivot::pivot_mean_by(
            &subset,
            |r| geo::normalize_code(&r.residence),
            Field::Seniority,
        );

        let (first_level, last_level) = if table.col_keys.len() >= 2 {
            (table.col_keys.first().cloned(), table.col_keys.last().cloned())
        } else {
            (None, None)
        };
        let progression_pct = match (&first_level, &last_level) {
            (Some(first), Some(last)) => {
                match (table.column_mean(first), table.column_mean(last)) {
                    (Some(a), Some(b)) if a > 0.0 => seniority_jump_pct(a, b),
                    _ => 0.0,
                }
            }
            _ => 0.0,
        };

        Self {
            countries,
            table,
            first_level,
            last_level,
            progression_pct,
        }
    }
}

/// Salary by work modality
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalityView {
    /// Mean per modality, highest first
    pub modalities: Vec<GroupRow>,
    /// Mean of the remote label, if present
    pub remote_mean: Option<f64>,
    /// Mean of the on-site label, if present
    pub on_site_mean: Option<f64>,
    /// Mean of the hybrid label, if present
    pub hybrid_mean: Option<f64>,
    /// Remote relative to on-site in percent, when both exist and are positive
    pub remote_vs_on_site_pct: Option<f64>,
    /// Whether remote pays more than on-site (a missing side counts as zero)
    pub remote_better: bool,
}

impl ModalityView {
    /// Build the modality panel from per-modality means
    #[must_use]
    pub fn build(mut modalities: Vec<GroupRow>, labels: &ModalityLabels) -> Self {
        modalities.sort_by(|a, b| compare_by_mean(a, b, SortOrder::Descending));

        let mean_of = |label: &str| modalities.iter().find(|r| r.key == label).map(|r| r.mean);
        let remote_mean = mean_of(labels.remote.as_str());
        let on_site_mean = mean_of(labels.on_site.as_str());
        let hybrid_mean = mean_of(labels.hybrid.as_str());

        let remote_vs_on_site_pct = match (remote_mean, on_site_mean) {
            (Some(remote), Some(on_site)) if remote > 0.0 && on_site > 0.0 => {
                percent_change(on_site, remote)
            }
            _ => None,
        };

        Self {
            remote_better: remote_mean.unwrap_or(0.0) > on_site_mean.unwrap_or(0.0),
            modalities,
            remote_mean,
            on_site_mean,
            hybrid_mean,
            remote_vs_on_site_pct,
        }
    }
}
