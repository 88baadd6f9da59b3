//! Dashboard core
//!
//! A [`Dashboard`] owns the loaded dataset, its configuration and the
//! aggregation cache. Each call to [`Dashboard::report`] filters the dataset
//! with a selection, computes the enabled views and returns a
//! [`DashboardReport`] for the presentation layer.

pub mod views;

pub use views::{
    CountryView, DistributionView, HeatmapView, LevelDistribution, ModalityView, SeniorityView,
    TrendView,
};

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::algorithm::{self, GroupRow, Kpis};
use crate::cache::{AggregationCache, AggregationKey, CacheKey, CacheStats};
use crate::config::{DashboardConfig, DashboardView, ViewSet};
use crate::error::Result;
use crate::filter::{self, FilterOptions, FilterSelection};
use crate::geo;
use crate::loader;
use crate::models::{Dataset, Field, SortOrder};

/// Everything the presentation layer needs for one selection
///
/// Views that are not enabled are `None` and left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Selection the report was computed for
    pub selection: FilterSelection,
    /// Views that were computed
    pub views: ViewSet,
    /// Records in the unfiltered dataset
    pub total_records: usize,
    /// Records that passed the filter
    pub filtered_records: usize,
    /// Headline indicators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Kpis>,
    /// Best paid roles, highest mean first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_roles: Option<Vec<GroupRow>>,
    /// Salary histogram and box-plot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionView>,
    /// Year-over-year evolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_trend: Option<TrendView>,
    /// Salary by seniority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<SeniorityView>,
    /// Mean salary per country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<CountryView>,
    /// Country x seniority heatmap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<HeatmapView>,
    /// Salary by work modality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_modality: Option<ModalityView>,
}

impl DashboardReport {
    /// Whether the selection matched no record
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered_records == 0
    }
}

/// Loaded dataset plus configuration and memoized aggregations
#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    config: DashboardConfig,
    cache: AggregationCache,
}

impl Dashboard {
    /// Load the dataset named by the configuration
    pub fn load(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let dataset = loader::load_dataset(&config.data_path)?;
        Ok(Self::new(dataset, config))
    }

    /// Wrap an already loaded dataset
    #[must_use]
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        let cache = cache_for(&config);
        Self {
            dataset,
            config,
            cache,
        }
    }

    /// The unfiltered dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Cache hit/miss counters
    #[must_use]
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of memoized results
    #[must_use]
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    /// Values offered for each filter dimension
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        filter::filter_options(&self.dataset)
    }

    /// Selection with every available value, the initial dashboard state
    #[must_use]
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::all(&self.dataset)
    }

    /// Filter the dataset, reusing an earlier result for the same selection
    pub fn filter(&mut self, selection: &FilterSelection) -> Dataset {
        let key = CacheKey {
            aggregation: AggregationKey::Filter(selection.clone()),
            fingerprint: self.dataset.fingerprint(),
        };
        let dataset = &self.dataset;
        self.cache
            .get_or_compute(key, || filter::filter(dataset, selection))
    }

    /// Compute every enabled view for `selection`
    pub fn report(&mut self, selection: &FilterSelection) -> DashboardReport {
        let start = Instant::now();
        let filtered = self.filter(selection);
        let views = self.config.enabled_views();

        let Self {
            dataset,
            config,
            cache,
        } = self;
        let records = filtered.records();
        let fingerprint = filtered.fingerprint();
        let key = |aggregation: AggregationKey| CacheKey {
            aggregation,
            fingerprint,
        };
        let enabled = |view: DashboardView| views.contains(&view);

        let kpis = enabled(DashboardView::Kpis).then(|| {
            cache.get_or_compute(key(AggregationKey::Kpis), || algorithm::kpis(records))
        });

        let top_roles = enabled(DashboardView::TopRoles).then(|| {
            let (n, order) = (config.top_roles, SortOrder::Descending);
            cache.get_or_compute(
                key(AggregationKey::TopByMean {
                    field: Field::Role,
                    n,
                    order,
                }),
                || algorithm::top_n_by_mean(records, Field::Role, n, order),
            )
        });

        let distribution = enabled(DashboardView::Distribution).then(|| {
            let bins = config.histogram_bins;
            cache.get_or_compute(key(AggregationKey::Distribution { bins }), || {
                DistributionView::build(records, bins)
            })
        });

        let yearly_trend = enabled(DashboardView::YearlyTrend).then(|| {
            TrendView::from_points(cache.get_or_compute(key(AggregationKey::YearlyTrend), || {
                algorithm::yearly_trend(records)
            }))
        });

        let seniority = enabled(DashboardView::Seniority).then(|| {
            let levels =
                cache.get_or_compute(key(AggregationKey::GroupMean(Field::Seniority)), || {
                    algorithm::group_mean(records, Field::Seniority)
                });
            SeniorityView::build(records, levels, &config.seniority_labels)
        });

        let countries = enabled(DashboardView::CountryMap).then(|| {
            CountryView::from_countries(cache.get_or_compute(key(AggregationKey::Countries), || {
                geo::enrich(&geo::country_stats(records))
            }))
        });

        let heatmap = enabled(DashboardView::Heatmap).then(|| {
            let countries = config.heatmap_countries;
            cache.get_or_compute(key(AggregationKey::Heatmap { countries }), || {
                HeatmapView::build(records, countries)
            })
        });

        let work_modality = enabled(DashboardView::WorkModality).then(|| {
            let modalities =
                cache.get_or_compute(key(AggregationKey::GroupMean(Field::WorkModality)), || {
                    algorithm::group_mean(records, Field::WorkModality)
                });
            ModalityView::build(modalities, &config.modality_labels)
        });

        log::debug!(
            "Computed {} views over {} of {} records in {:?}",
            views.len(),
            filtered.len(),
            dataset.len(),
            start.elapsed()
        );

        DashboardReport {
            selection: selection.clone(),
            total_records: dataset.len(),
            filtered_records: filtered.len(),
            views,
            kpis,
            top_roles,
            distribution,
            yearly_trend,
            seniority,
            countries,
            heatmap,
            work_modality,
        }
    }

    /// Export the records matching `selection` to a CSV file
    ///
    /// Returns the number of rows written.
    pub fn export_filtered(&mut self, selection: &FilterSelection, path: &Path) -> Result<usize> {
        let filtered = self.filter(selection);
        loader::export_dataset(&filtered, path)?;
        Ok(filtered.len())
    }

    /// Write the records matching `selection` as CSV to any writer
    pub fn write_filtered<W: Write>(
        &mut self,
        selection: &FilterSelection,
        writer: W,
    ) -> Result<usize> {
        let filtered = self.filter(selection);
        loader::write_dataset(&filtered, writer)?;
        Ok(filtered.len())
    }

    /// Re-read the dataset file and drop every memoized result
    pub fn reload(&mut self) -> Result<()> {
        let dataset = loader::load_dataset(&self.config.data_path)?;
        self.replace_dataset(dataset);
        Ok(())
    }

    /// Swap in a new dataset and drop every memoized result
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.cache.invalidate();
        self.dataset = dataset;
    }

    /// Apply a new configuration; memoized results are dropped
    pub fn set_config(&mut self, config: DashboardConfig) -> Result<()> {
        config.validate()?;
        self.cache = cache_for(&config);
        self.config = config;
        Ok(())
    }
}

fn cache_for(config: &DashboardConfig) -> AggregationCache {
    if config.cache_enabled {
        AggregationCache::with_capacity(config.cache_capacity)
    } else {
        AggregationCache::disabled()
    }
}

/// Compute a report once, without keeping a cache around
#[must_use]
pub fn build_report(
    dataset: &Dataset,
    selection: &FilterSelection,
    config: &DashboardConfig,
) -> DashboardReport {
    let config = DashboardConfig {
        cache_enabled: false,
        ..config.clone()
    };
    Dashboard::new(dataset.clone(), config).report(selection)
}
