//! Tests for country enrichment

use salary_insights::geo::tables::{COORDINATES, ISO3_CODES};
use salary_insights::geo::{
    coordinates_for, country_stats, iso3_for, normalize_code, ranked, top_country,
};
use salary_insights::{SortOrder, enrich};

use crate::utils::{random_dataset, sample_dataset};

/// Known codes get an ISO-3 code and coordinates, unknown codes pass through
#[test]
fn test_enrich_sample_countries() {
    let countries = enrich(&country_stats(&sample_dataset()));
    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["BR", "DE", "US", "ZZ"]);

    let us = &countries[2];
    assert_eq!(us.iso3, "USA");
    assert_eq!(us.count, 3);
    let coordinates = us.coordinates.expect("USA has a centroid");
    assert!((coordinates.lat - 37.09).abs() < 1.0);

    let unknown = &countries[3];
    assert_eq!(unknown.iso3, "ZZ");
    assert!(unknown.coordinates.is_none());
    assert!(!unknown.has_coordinates());
}

/// The UK code maps to the ISO code GBR
#[test]
fn test_uk_alias() {
    assert_eq!(iso3_for("UK"), Some("GBR"));
    assert_eq!(normalize_code("UK"), "GBR");
    assert_eq!(normalize_code("GB"), "GB");
    assert!(coordinates_for("GBR").is_some());
    assert!(coordinates_for("GB").is_none());
}

/// Every code keeps its row regardless of whether it can be placed
#[test]
fn test_enrich_keeps_every_row() {
    let dataset = random_dataset(5, 300);
    let stats = country_stats(&dataset);
    let countries = enrich(&stats);
    assert_eq!(countries.len(), stats.len());
    for (country, row) in countries.iter().zip(&stats) {
        assert_eq!(country.code, row.key);
        assert_eq!(country.mean, row.mean);
        assert_eq!(country.has_coordinates(), coordinates_for(&country.iso3).is_some());
    }
}

/// Ranking and leader selection agree
#[test]
fn test_ranked_and_top_country() {
    let countries = enrich(&country_stats(&sample_dataset()));
    let top = top_country(&countries).map(|c| c.code.clone());
    let ranked = ranked(countries, SortOrder::Descending);
    assert_eq!(top.as_deref(), Some("US"));
    assert_eq!(ranked[0].code, "US");
    assert!(ranked.windows(2).all(|w| w[0].mean >= w[1].mean));
}

/// Reference tables have one entry per code and matching coverage
#[test]
fn test_reference_tables_consistent() {
    assert_eq!(ISO3_CODES.len(), 45);
    assert_eq!(COORDINATES.len(), ISO3_CODES.len());
    for (_, iso3) in ISO3_CODES {
        assert!(coordinates_for(iso3).is_some(), "no coordinates for {iso3}");
    }
}
