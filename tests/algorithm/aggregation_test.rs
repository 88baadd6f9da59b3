//! Tests for the aggregation algorithms

use std::collections::BTreeSet;

use salary_insights::algorithm::{
    EMPTY_CELL, NOT_AVAILABLE, box_stats, histogram, pivot_mean, top_n_by_count,
};
use salary_insights::{
    Dataset, Field, SalaryRecord, SortOrder, group_mean, growth_pct, kpis, seniority_jump_pct,
    top_n_by_mean, yearly_trend,
};

use crate::utils::{random_dataset, repeated_salary_dataset, sample_dataset};

const EPSILON: f64 = 1e-6;

/// Headline indicators of the sample dataset
#[test]
fn test_kpis_sample() {
    let kpis = kpis(&sample_dataset());
    assert!((kpis.mean - 640_000.0 / 6.0).abs() < EPSILON);
    assert!((kpis.median - 105_000.0).abs() < EPSILON);
    assert!((kpis.max - 200_000.0).abs() < EPSILON);
    assert_eq!(kpis.count, 6);
    // Three roles tie at two records each
    assert_eq!(kpis.top_role, "Data Analyst");
}

/// Empty input yields the documented sentinels
#[test]
fn test_kpis_empty() {
    let kpis = kpis(&[]);
    assert_eq!(kpis.mean, 0.0);
    assert_eq!(kpis.median, 0.0);
    assert_eq!(kpis.max, 0.0);
    assert_eq!(kpis.count, 0);
    assert_eq!(kpis.top_role, NOT_AVAILABLE);
}

fn assert_within(value: f64, lo: f64, hi: f64, what: &str) {
    assert!(
        lo <= value && value <= hi,
        "{what} = {value} outside [{lo}, {hi}]"
    );
}

fn check_bounds(dataset: &Dataset) {
    let salaries: Vec<f64> = dataset.iter().map(|r| r.salary_usd).collect();
    let lo = salaries.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = salaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let kpis = kpis(dataset);
    assert_within(kpis.mean, lo, hi, "mean");
    assert_within(kpis.median, lo, hi, "median");
    assert_within(kpis.max, lo, hi, "max");
    assert_eq!(kpis.max, hi);
    assert_eq!(kpis.count, dataset.len());

    for point in yearly_trend(dataset) {
        assert_within(point.mean, lo, hi, "yearly mean");
        assert_within(point.median, lo, hi, "yearly median");
    }
    for row in group_mean(dataset, Field::Role) {
        let members: Vec<f64> = dataset
            .iter()
            .filter(|r| r.role == row.key)
            .map(|r| r.salary_usd)
            .collect();
        let group_lo = members.iter().copied().fold(f64::INFINITY, f64::min);
        let group_hi = members.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_within(row.mean, group_lo, group_hi, "group mean");
    }
}

/// Mean, median and max stay inside the observed range, with no tolerance
#[test]
fn test_kpis_within_bounds() {
    for seed in 0..10 {
        check_bounds(&random_dataset(seed, 200));
    }
}

/// Repeated fractional salaries average to exactly that salary
#[test]
fn test_repeated_fractional_salaries() {
    for (salary, len) in [(0.1, 3), (83_333.33, 10), (0.3, 7), (123_456.789, 33)] {
        let dataset = repeated_salary_dataset(salary, len);
        check_bounds(&dataset);

        assert_eq!(kpis(&dataset).mean, salary);
        assert_eq!(yearly_trend(&dataset)[0].mean, salary);
        assert_eq!(group_mean(&dataset, Field::Role)[0].mean, salary);
        let table = pivot_mean(&dataset, Field::Residence, Field::Seniority);
        assert_eq!(table.get("BR", "Pleno"), Some(salary));
    }
}

/// Top-N rows are bounded, unique and sorted
#[test]
fn test_top_n_by_mean_properties() {
    let dataset = random_dataset(7, 400);
    for n in [1, 3, 10] {
        let rows = top_n_by_mean(&dataset, Field::Role, n, SortOrder::Descending);
        assert!(rows.len() <= n);
        let keys: BTreeSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), rows.len());
        assert!(rows.windows(2).all(|w| w[0].mean >= w[1].mean));
    }

    let ascending = top_n_by_mean(&dataset, Field::Role, 10, SortOrder::Ascending);
    assert!(ascending.windows(2).all(|w| w[0].mean <= w[1].mean));
}

/// Top roles of the sample, best paid first
#[test]
fn test_top_roles_sample() {
    let rows = top_n_by_mean(&sample_dataset(), Field::Role, 2, SortOrder::Descending);
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Data Engineer", "Data Scientist"]);
    assert!((rows[0].mean - 175_000.0).abs() < EPSILON);
    assert_eq!(rows[0].count, 2);
}

/// Most represented countries come first
#[test]
fn test_top_n_by_count() {
    let rows = top_n_by_count(&sample_dataset(), Field::Residence, 2);
    assert_eq!(rows[0].key, "US");
    assert_eq!(rows[0].count, 3);
    // BR, DE and ZZ tie at one record each
    assert_eq!(rows[1].key, "BR");
}

/// Worked example: two records in one year
#[test]
fn test_yearly_trend_worked_example() {
    let records = vec![
        SalaryRecord::new(2023, "Júnior", 50_000.0),
        SalaryRecord::new(2023, "Sênior", 100_000.0),
    ];
    let trend = yearly_trend(&records);
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].year, 2023);
    assert!((trend[0].mean - 75_000.0).abs() < EPSILON);
    assert!((trend[0].median - 75_000.0).abs() < EPSILON);
    assert_eq!(trend[0].count, 2);
    assert_eq!(growth_pct(&trend), 0.0);
    assert!((seniority_jump_pct(50_000.0, 100_000.0) - 100.0).abs() < EPSILON);
}

/// Years are strictly ascending and counts add up
#[test]
fn test_yearly_trend_ordering() {
    let dataset = random_dataset(3, 300);
    let trend = yearly_trend(&dataset);
    assert!(trend.windows(2).all(|w| w[0].year < w[1].year));
    assert_eq!(trend.iter().map(|p| p.count).sum::<usize>(), dataset.len());

    let sample = yearly_trend(&sample_dataset());
    assert!((growth_pct(&sample) - 100.0).abs() < EPSILON);
}

/// Jump percentage never divides by zero
#[test]
fn test_seniority_jump_zero_base() {
    assert_eq!(seniority_jump_pct(0.0, 100_000.0), 0.0);
    assert!((seniority_jump_pct(100_000.0, 50_000.0) + 50.0).abs() < EPSILON);
}

/// Missing combinations are filled with the empty cell value
#[test]
fn test_pivot_fills_missing_cells() {
    let table = pivot_mean(&sample_dataset(), Field::Residence, Field::Seniority);
    assert_eq!(table.row_keys, vec!["BR", "DE", "US", "ZZ"]);
    assert_eq!(table.col_keys, vec!["Júnior", "Pleno", "Sênior"]);
    assert_eq!(table.get("BR", "Júnior"), Some(50_000.0));
    assert_eq!(table.get("BR", "Sênior"), Some(EMPTY_CELL));
    let us_senior = table.get("US", "Sênior").unwrap_or_default();
    assert!((us_senior - 470_000.0 / 3.0).abs() < EPSILON);
    assert_eq!(table.get("FR", "Sênior"), None);
}

/// Histogram covers every record exactly once
#[test]
fn test_histogram_counts() {
    let dataset = random_dataset(11, 250);
    let bins = histogram(&dataset, 40);
    assert_eq!(bins.len(), 40);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 250);
    assert!(histogram(&[], 40).is_empty());
}

/// Box-plot summary orders its quantiles
#[test]
fn test_box_stats() {
    let stats = box_stats(&sample_dataset()).expect("non-empty input");
    assert!(stats.min <= stats.q1 && stats.q1 <= stats.median);
    assert!(stats.median <= stats.q3 && stats.q3 <= stats.max);
    assert!((stats.median - 105_000.0).abs() < EPSILON);
    assert!(box_stats(&[]).is_none());
}
