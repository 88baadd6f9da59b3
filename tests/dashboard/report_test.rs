//! Tests for dashboard reports

use std::collections::BTreeSet;

use salary_insights::algorithm::{GroupRow, NOT_AVAILABLE};
use salary_insights::config::ModalityLabels;
use salary_insights::dashboard::{DistributionView, ModalityView};
use salary_insights::{
    Dashboard, DashboardConfig, DashboardVariant, DashboardView, Dataset, FilterSelection,
    SalaryRecord, build_report,
};

use crate::utils::{random_dataset, sample_csv, sample_dataset, write_temp_csv};

const EPSILON: f64 = 1e-6;

fn sample_dashboard(variant: DashboardVariant) -> Dashboard {
    let config = DashboardConfig {
        variant,
        ..Default::default()
    };
    Dashboard::new(sample_dataset(), config)
}

/// The complete variant computes every view
#[test]
fn test_complete_report() {
    let mut dashboard = sample_dashboard(DashboardVariant::Complete);
    let selection = dashboard.default_selection();
    let report = dashboard.report(&selection);

    assert_eq!(report.total_records, 6);
    assert_eq!(report.filtered_records, 6);
    assert_eq!(report.views.len(), 8);
    assert!(report.kpis.is_some());
    assert!(report.top_roles.is_some());
    assert_eq!(
        report.distribution,
        Some(DistributionView::build(&sample_dataset(), 40))
    );
    assert!(report.yearly_trend.is_some());
    assert!(report.seniority.is_some());
    assert!(report.countries.is_some());
    assert!(report.heatmap.is_some());
    assert!(report.work_modality.is_some());

    let trend = report.yearly_trend.expect("trend view");
    assert_eq!(trend.first_year, Some(2023));
    assert_eq!(trend.last_year, Some(2025));
    assert!((trend.growth_pct - 100.0).abs() < EPSILON);

    let countries = report.countries.expect("country view");
    assert_eq!(countries.country_count, 4);
    assert_eq!(countries.with_coordinates, 3);
    assert_eq!(countries.plottable().count(), 3);
    assert_eq!(
        countries.top_country.map(|c| c.iso3),
        Some("USA".to_string())
    );
}

/// The essential variant leaves the extended views out
#[test]
fn test_essential_report() {
    let mut dashboard = sample_dashboard(DashboardVariant::Essential);
    let selection = dashboard.default_selection();
    let report = dashboard.report(&selection);

    assert!(report.kpis.is_some());
    assert!(report.top_roles.is_some());
    assert!(report.seniority.is_none());
    assert!(report.countries.is_none());
    assert!(report.heatmap.is_none());
    assert!(report.work_modality.is_none());

    let json = serde_json::to_value(&report).expect("serialize report");
    assert!(json.get("kpis").is_some());
    assert!(json.get("heatmap").is_none());
}

/// An explicit view list overrides the variant
#[test]
fn test_explicit_views() {
    let config = DashboardConfig {
        views: Some(BTreeSet::from([DashboardView::WorkModality])),
        ..Default::default()
    };
    let mut dashboard = Dashboard::new(sample_dataset(), config);
    let selection = dashboard.default_selection();
    let report = dashboard.report(&selection);
    assert!(report.kpis.is_none());
    assert!(report.work_modality.is_some());
}

/// Junior to senior jump uses the configured labels
#[test]
fn test_seniority_view() {
    let mut dashboard = sample_dashboard(DashboardVariant::Standard);
    let selection = dashboard.default_selection();
    let seniority = dashboard.report(&selection).seniority.expect("seniority view");

    let levels: Vec<&str> = seniority.levels.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(levels, vec!["Júnior", "Pleno", "Sênior"]);
    assert_eq!(seniority.distributions.len(), 3);
    let expected = (470_000.0 / 3.0 - 40_000.0) / 40_000.0 * 100.0;
    assert!((seniority.junior_to_senior_pct - expected).abs() < EPSILON);

    // Without juniors there is nothing to compare
    let seniors = selection.with_seniority(["Pleno", "Sênior"]);
    let seniority = dashboard.report(&seniors).seniority.expect("seniority view");
    assert_eq!(seniority.junior_to_senior_pct, 0.0);
}

/// Remote against on-site comparison
#[test]
fn test_modality_view() {
    let mut dashboard = sample_dashboard(DashboardVariant::Complete);
    let selection = dashboard.default_selection();
    let modality = dashboard
        .report(&selection)
        .work_modality
        .expect("modality view");

    let order: Vec<&str> = modality.modalities.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(order, vec!["Remoto", "Híbrido", "Presencial"]);
    assert!(modality.remote_better);
    assert_eq!(modality.on_site_mean, Some(85_000.0));
    assert_eq!(modality.hybrid_mean, Some(90_000.0));
    let expected = (380_000.0 / 3.0 - 85_000.0) / 85_000.0 * 100.0;
    let pct = modality.remote_vs_on_site_pct.expect("both modalities present");
    assert!((pct - expected).abs() < EPSILON);

    // Only on-site rows left: no difference, and remote counts as zero
    let on_site = selection.with_years([2023]).with_seniority(["Júnior"]);
    let modality = dashboard.report(&on_site).work_modality.expect("modality view");
    assert_eq!(modality.remote_mean, None);
    assert_eq!(modality.remote_vs_on_site_pct, None);
    assert!(!modality.remote_better);
}

/// A zero mean on either side leaves the remote difference undefined
#[test]
fn test_modality_view_zero_mean() {
    let record = |modality: &str, salary: f64| {
        SalaryRecord::new(2024, "Pleno", salary)
            .with_role("Data Analyst")
            .with_residence("BR")
            .with_work_modality(modality)
    };
    let labels = ModalityLabels::default();

    let dataset: Dataset = vec![record("Remoto", 0.0), record("Presencial", 80_000.0)]
        .into_iter()
        .collect();
    let report = build_report(
        &dataset,
        &FilterSelection::all(&dataset),
        &DashboardConfig::default(),
    );
    let modality = report.work_modality.expect("modality view");
    assert_eq!(modality.remote_mean, Some(0.0));
    assert_eq!(modality.remote_vs_on_site_pct, None);
    assert!(!modality.remote_better);

    let rows = |remote: f64, on_site: f64| {
        vec![
            GroupRow {
                key: labels.remote.clone(),
                mean: remote,
                count: 1,
            },
            GroupRow {
                key: labels.on_site.clone(),
                mean: on_site,
                count: 1,
            },
        ]
    };
    let on_site_zero = ModalityView::build(rows(90_000.0, 0.0), &labels);
    assert_eq!(on_site_zero.remote_vs_on_site_pct, None);
    assert!(on_site_zero.remote_better);

    let both_positive = ModalityView::build(rows(90_000.0, 60_000.0), &labels);
    let pct = both_positive
        .remote_vs_on_site_pct
        .expect("both means positive");
    assert!((pct - 50.0).abs() < EPSILON);
}

/// Heatmap over the most represented countries
#[test]
fn test_heatmap_view() {
    let config = DashboardConfig {
        heatmap_countries: 2,
        ..Default::default()
    };
    let mut dashboard = Dashboard::new(sample_dataset(), config);
    let selection = dashboard.default_selection();
    let heatmap = dashboard.report(&selection).heatmap.expect("heatmap view");

    assert_eq!(heatmap.countries, vec!["US", "BR"]);
    assert_eq!(heatmap.table.row_keys, vec!["BRA", "USA"]);
    assert_eq!(heatmap.table.col_keys, vec!["Júnior", "Sênior"]);
    assert_eq!(heatmap.table.get("BRA", "Sênior"), Some(0.0));
    assert_eq!(heatmap.first_level.as_deref(), Some("Júnior"));
    assert_eq!(heatmap.last_level.as_deref(), Some("Sênior"));

    let first = 25_000.0;
    let last = 470_000.0 / 3.0 / 2.0;
    assert!((heatmap.progression_pct - (last - first) / first * 100.0).abs() < EPSILON);
}

/// Empty selection yields sentinels in every view, not errors
#[test]
fn test_empty_selection_report() {
    let mut dashboard = sample_dashboard(DashboardVariant::Complete);
    let report = dashboard.report(&FilterSelection::default());

    assert!(report.is_empty());
    let kpis = report.kpis.expect("kpis");
    assert_eq!(kpis.mean, 0.0);
    assert_eq!(kpis.top_role, NOT_AVAILABLE);
    assert!(report.top_roles.expect("top roles").is_empty());

    let distribution = report.distribution.expect("distribution");
    assert!(distribution.histogram.is_empty());
    assert!(distribution.box_stats.is_none());

    let trend = report.yearly_trend.expect("trend");
    assert!(trend.points.is_empty());
    assert_eq!(trend.growth_pct, 0.0);

    assert!(report.countries.expect("countries").top_country.is_none());
    let heatmap = report.heatmap.expect("heatmap");
    assert!(heatmap.table.is_empty());
    assert_eq!(heatmap.progression_pct, 0.0);
    assert!(!report.work_modality.expect("modality").remote_better);
}

/// Repeating a selection is served from the cache
#[test]
fn test_report_is_memoized() {
    let mut dashboard = Dashboard::new(random_dataset(9, 200), DashboardConfig::default());
    let selection = dashboard.default_selection().with_years([2022, 2023]);

    let first = dashboard.report(&selection);
    let after_first = dashboard.cache_stats();
    assert_eq!(after_first.hits, 0);
    assert!(after_first.misses > 0);

    let second = dashboard.report(&selection);
    let after_second = dashboard.cache_stats();
    assert_eq!(second, first);
    assert_eq!(after_second.misses, after_first.misses);
    assert_eq!(after_second.hits, after_first.misses);

    let other = dashboard.default_selection();
    let _ = dashboard.report(&other);
    assert!(dashboard.cache_stats().misses > after_second.misses);
}

/// Browsing many selections keeps the cache within its capacity
#[test]
fn test_cache_stays_bounded() {
    let config = DashboardConfig {
        cache_capacity: 16,
        ..Default::default()
    };
    let dataset = random_dataset(13, 300);
    let mut dashboard = Dashboard::new(dataset.clone(), config.clone());
    assert_eq!(dashboard.config().cache_capacity, 16);
    let all = dashboard.default_selection();

    for year in 2020..=2025 {
        for seniority in ["Júnior", "Pleno", "Sênior", "Executivo"] {
            let selection = all.clone().with_years([year]).with_seniority([seniority]);
            let report = dashboard.report(&selection);
            assert!(dashboard.cached_results() <= 16);
            assert_eq!(report, build_report(&dataset, &selection, &config));
        }
    }
    assert!(dashboard.cache_stats().evictions > 0);
}

/// Disabling the cache does not change results
#[test]
fn test_uncached_report_matches() {
    let dataset = random_dataset(21, 300);
    let config = DashboardConfig::default();
    let selection = FilterSelection::all(&dataset).with_seniority(["Sênior", "Executivo"]);

    let mut dashboard = Dashboard::new(dataset.clone(), config.clone());
    let cached = dashboard.report(&selection);
    let uncached = build_report(&dataset, &selection, &config);
    assert_eq!(cached, uncached);

    let mut disabled = Dashboard::new(
        dataset,
        DashboardConfig {
            cache_enabled: false,
            ..config
        },
    );
    let _ = disabled.report(&selection);
    assert_eq!(disabled.cached_results(), 0);
}

/// Reloading the dataset drops memoized results
#[test]
fn test_reload_invalidates_cache() {
    let (_file, path) = write_temp_csv(&sample_csv());
    let config = DashboardConfig {
        data_path: path,
        ..Default::default()
    };
    let mut dashboard = Dashboard::load(config).expect("load dashboard");
    let selection = dashboard.default_selection();
    let before = dashboard.report(&selection);
    assert!(dashboard.cached_results() > 0);

    dashboard.reload().expect("reload");
    assert_eq!(dashboard.cached_results(), 0);
    assert_eq!(dashboard.report(&selection), before);
}

/// Changing the configuration applies to the next report
#[test]
fn test_set_config() {
    let mut dashboard = sample_dashboard(DashboardVariant::Complete);
    let selection = dashboard.default_selection();
    let _ = dashboard.report(&selection);

    let config = DashboardConfig {
        top_roles: 1,
        ..Default::default()
    };
    dashboard.set_config(config).expect("valid config");
    assert_eq!(dashboard.cached_results(), 0);
    let top_roles = dashboard.report(&selection).top_roles.expect("top roles");
    assert_eq!(top_roles.len(), 1);
    assert_eq!(top_roles[0].key, "Data Engineer");

    let invalid = DashboardConfig {
        histogram_bins: 0,
        ..Default::default()
    };
    assert!(dashboard.set_config(invalid).is_err());
}
