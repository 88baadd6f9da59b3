//! Country reference tables
//!
//! Both tables are finite and incomplete by construction. A code missing
//! from them is an ordinary case handled by the callers.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Two-letter residence code to ISO 3166-1 alpha-3
pub const ISO3_CODES: &[(&str, &str)] = &[
    ("US", "USA"),
    ("UK", "GBR"),
    ("BR", "BRA"),
    ("DE", "DEU"),
    ("IN", "IND"),
    ("CA", "CAN"),
    ("FR", "FRA"),
    ("AU", "AUS"),
    ("ES", "ESP"),
    ("NL", "NLD"),
    ("IT", "ITA"),
    ("PT", "PRT"),
    ("JP", "JPN"),
    ("SG", "SGP"),
    ("CH", "CHE"),
    ("MX", "MEX"),
    ("AR", "ARG"),
    ("CO", "COL"),
    ("CL", "CHL"),
    ("IE", "IRL"),
    ("SE", "SWE"),
    ("NO", "NOR"),
    ("DK", "DNK"),
    ("FI", "FIN"),
    ("PL", "POL"),
    ("CZ", "CZE"),
    ("RU", "RUS"),
    ("TR", "TUR"),
    ("AE", "ARE"),
    ("IL", "ISR"),
    ("NZ", "NZL"),
    ("ZA", "ZAF"),
    ("HK", "HKG"),
    ("TW", "TWN"),
    ("KR", "KOR"),
    ("CN", "CHN"),
    ("PH", "PHL"),
    ("ID", "IDN"),
    ("TH", "THA"),
    ("MY", "MYS"),
    ("AT", "AUT"),
    ("BE", "BEL"),
    ("GR", "GRC"),
    ("HU", "HUN"),
    ("LU", "LUX"),
];

/// ISO alpha-3 code to approximate country centroid (latitude, longitude)
pub const COORDINATES: &[(&str, f64, f64)] = &[
    ("USA", 37.0902, -95.7129),
    ("GBR", 55.3781, -3.4360),
    ("BRA", -14.2350, -51.9253),
    ("DEU", 51.1657, 10.4515),
    ("IND", 20.5937, 78.9629),
    ("CAN", 56.1304, -106.3468),
    ("FRA", 46.2276, 2.2137),
    ("AUS", -25.2744, 133.7751),
    ("ESP", 40.4637, -3.7492),
    ("NLD", 52.1326, 5.2913),
    ("ITA", 41.8719, 12.5674),
    ("PRT", 39.3999, -8.2245),
    ("JPN", 36.2048, 138.2529),
    ("SGP", 1.3521, 103.8198),
    ("CHE", 46.8182, 8.2275),
    ("MEX", 23.6345, -102.5528),
    ("ARG", -38.4161, -63.6167),
    ("COL", 4.5709, -74.2973),
    ("CHL", -35.6751, -71.5430),
    ("IRL", 53.1424, -7.6921),
    ("SWE", 60.1282, 18.6435),
    ("NOR", 60.4720, 8.4689),
    ("DNK", 56.2639, 9.5018),
    ("FIN", 61.9241, 25.7482),
    ("POL", 51.9194, 19.1451),
    ("CZE", 49.8175, 15.4730),
    ("RUS", 61.5240, 105.3188),
    ("TUR", 38.9637, 35.2433),
    ("ARE", 23.4241, 53.8478),
    ("ISR", 31.0461, 34.8516),
    ("NZL", -40.9006, 174.8860),
    ("ZAF", -30.5595, 22.9375),
    ("HKG", 22.3193, 114.1694),
    ("TWN", 23.6978, 120.9605),
    ("KOR", 35.9078, 127.7669),
    ("CHN", 35.8617, 104.1954),
    ("PHL", 12.8797, 121.7740),
    ("IDN", -0.7893, 113.9213),
    ("THA", 15.8700, 100.9925),
    ("MYS", 4.2105, 101.9758),
    ("AUT", 47.5162, 14.5501),
    ("BEL", 50.5039, 4.4699),
    ("GRC", 39.0742, 21.8243),
    ("HUN", 47.1625, 19.5033),
    ("LUX", 49.8153, 6.1296),
];

static ISO3_INDEX: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| ISO3_CODES.iter().copied().collect());

static COORDINATE_INDEX: LazyLock<FxHashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    COORDINATES
        .iter()
        .map(|(code, lat, lon)| (*code, (*lat, *lon)))
        .collect()
});

/// ISO alpha-3 code for a two-letter residence code
#[must_use]
pub fn iso3_for(code: &str) -> Option<&'static str> {
    ISO3_INDEX.get(code).copied()
}

/// (latitude, longitude) for an ISO alpha-3 code
#[must_use]
pub fn coordinates_for(iso3: &str) -> Option<(f64, f64)> {
    COORDINATE_INDEX.get(iso3).copied()
}
