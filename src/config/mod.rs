//! Configuration for the salary dashboard core.
//!
//! One configuration describes which views are computed and the knobs of the
//! individual aggregations. The three historical dashboard layouts are
//! available as [`DashboardVariant`] presets.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::MAX_BINS;
use crate::cache::DEFAULT_CAPACITY;
use crate::error::util::safe_open_file;
use crate::error::{Result, SalaryError};

/// A view the dashboard can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    /// Headline indicators
    Kpis,
    /// Best paid roles
    TopRoles,
    /// Histogram and box-plot of salaries
    Distribution,
    /// Year-over-year evolution
    YearlyTrend,
    /// Salary by seniority level
    Seniority,
    /// Mean salary per country
    CountryMap,
    /// Country x seniority heatmap
    Heatmap,
    /// Salary by work modality
    WorkModality,
}

/// Set of views a dashboard computes
pub type ViewSet = BTreeSet<DashboardView>;

/// Named view presets matching the dashboard layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    /// Indicators, top roles, distribution and trend
    Essential,
    /// Essential plus seniority and country views
    Standard,
    /// Every view
    #[default]
    Complete,
}

impl DashboardVariant {
    /// Views enabled by this preset
    #[must_use]
    pub fn views(self) -> ViewSet {
        use DashboardView::{
            CountryMap, Distribution, Heatmap, Kpis, Seniority, TopRoles, WorkModality,
            YearlyTrend,
        };

        let essential = [Kpis, TopRoles, Distribution, YearlyTrend];
        match self {
            Self::Essential => essential.into_iter().collect(),
            Self::Standard => essential
                .into_iter()
                .chain([Seniority, CountryMap])
                .collect(),
            Self::Complete => essential
                .into_iter()
                .chain([Seniority, CountryMap, Heatmap, WorkModality])
                .collect(),
        }
    }
}

impl FromStr for DashboardVariant {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Ok(Self::Essential),
            "standard" => Ok(Self::Standard),
            "complete" | "full" => Ok(Self::Complete),
            other => Err(SalaryError::config(format!("Unknown dashboard variant: {other}"))),
        }
    }
}

/// Seniority values compared by the seniority view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeniorityLabels {
    /// Entry level label
    pub junior: String,
    /// Senior level label
    pub senior: String,
}

impl Default for SeniorityLabels {
    fn default() -> Self {
        Self {
            junior: "Júnior".to_string(),
            senior: "Sênior".to_string(),
        }
    }
}

/// Work modality values compared by the modality view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalityLabels {
    /// Fully remote label
    pub remote: String,
    /// On-site label
    pub on_site: String,
    /// Hybrid label
    pub hybrid: String,
}

impl Default for ModalityLabels {
    fn default() -> Self {
        Self {
            remote: "Remoto".to_string(),
            on_site: "Presencial".to_string(),
            hybrid: "Híbrido".to_string(),
        }
    }
}

/// Configuration for the dashboard core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset file
    pub data_path: PathBuf,
    /// View preset
    pub variant: DashboardVariant,
    /// Explicit view list, overrides `variant` when set
    pub views: Option<ViewSet>,
    /// Number of roles in the top roles ranking
    pub top_roles: usize,
    /// Number of most represented countries in the heatmap
    pub heatmap_countries: usize,
    /// Number of histogram bins
    pub histogram_bins: usize,
    /// Labels for the junior to senior comparison
    pub seniority_labels: SeniorityLabels,
    /// Labels for the modality comparison
    pub modality_labels: ModalityLabels,
    /// Whether aggregation results are memoized
    pub cache_enabled: bool,
    /// Most memoized results kept before the least recently used are dropped
    pub cache_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/dados-imersao-final.csv"),
            variant: DashboardVariant::default(),
            views: None,
            top_roles: 10,
            heatmap_countries: 15,
            histogram_bins: 40,
            seniority_labels: SeniorityLabels::default(),
            modality_labels: ModalityLabels::default(),
            cache_enabled: true,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON configuration; absent keys take their default value
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let mut contents = String::new();
        safe_open_file(path, "reading dashboard configuration")?
            .read_to_string(&mut contents)
            .map_err(|e| {
                SalaryError::io_error_with_source("Failed to read configuration", e)
                    .with_path(path)
            })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that numeric settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.top_roles == 0 {
            return Err(SalaryError::config("top_roles must be at least 1"));
        }
        if self.heatmap_countries == 0 {
            return Err(SalaryError::config("heatmap_countries must be at least 1"));
        }
        if self.histogram_bins == 0 {
            return Err(SalaryError::config("histogram_bins must be at least 1"));
        }
        if self.histogram_bins > MAX_BINS {
            return Err(SalaryError::config(format!(
                "histogram_bins must be at most {MAX_BINS}, got {}",
                self.histogram_bins
            )));
        }
        if self.cache_capacity == 0 {
            return Err(SalaryError::config("cache_capacity must be at least 1"));
        }
        Ok(())
    }

    /// Views to compute: the explicit list if given, else the variant preset
    #[must_use]
    pub fn enabled_views(&self) -> ViewSet {
        self.views
            .clone()
            .unwrap_or_else(|| self.variant.views())
    }

    /// Whether a view is computed
    #[must_use]
    pub fn is_enabled(&self, view: DashboardView) -> bool {
        self.views
            .as_ref()
            .map_or_else(|| self.variant.views().contains(&view), |v| v.contains(&view))
    }
}

impl fmt::Display for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Configuration:")?;
        writeln!(f, "  Data Path: {}", self.data_path.display())?;
        writeln!(f, "  Variant: {:?}", self.variant)?;
        if let Some(views) = &self.views {
            writeln!(f, "  Views: {views:?}")?;
        }
        writeln!(f, "  Top Roles: {}", self.top_roles)?;
        writeln!(f, "  Heatmap Countries: {}", self.heatmap_countries)?;
        writeln!(f, "  Histogram Bins: {}", self.histogram_bins)?;
        writeln!(
            f,
            "  Seniority Comparison: {} -> {}",
            self.seniority_labels.junior, self.seniority_labels.senior
        )?;
        writeln!(f, "  Cache Enabled: {}", self.cache_enabled)?;
        writeln!(f, "  Cache Capacity: {}", self.cache_capacity)?;
        Ok(())
    }
}
