//! Region buckets and heat coloring for regional map views.
//!
//! Regions are static configuration, not derived from data: each bucket
//! carries its member country names and the map projection (rotate, center,
//! scale) used to frame that part of the world. Membership uses the same
//! bidirectional substring policy as the geocoder.

use std::collections::HashMap;

use crate::geocode;
use crate::types::{CountryAggregate, DeploymentRecord};

/// Neutral fill for countries with no presence.
const HEAT_INACTIVE: [u8; 3] = [0x1e, 0x29, 0x3b];
/// Fill at count = 1 (lowest active intensity).
const HEAT_LOW: [u8; 3] = [0x1e, 0x40, 0xaf];
/// Fill at count = max (full intensity).
const HEAT_HIGH: [u8; 3] = [0x60, 0xa5, 0xfa];

/// Static configuration for one regional map view.
#[derive(Debug, Clone, Copy)]
pub struct RegionBucket {
    pub key: &'static str,
    pub label: &'static str,
    /// Projection rotation [lambda, phi, gamma].
    pub rotate: [f64; 3],
    /// Projection center [lon, lat].
    pub center: [f64; 2],
    pub scale: f64,
    /// Canonical member country names (uppercase).
    pub countries: &'static [&'static str],
}

pub const REGIONS: &[RegionBucket] = &[
    RegionBucket {
        key: "america",
        label: "América",
        rotate: [75.0, 0.0, 0.0],
        center: [0.0, -10.0],
        scale: 160.0,
        countries: &[
            "ESTADOS UNIDOS",
            "CANADÁ",
            "MÉXICO",
            "BRASIL",
            "ARGENTINA",
            "CHILE",
            "PERÚ",
            "BOLIVIA",
            "COLOMBIA",
            "VENEZUELA",
            "URUGUAY",
            "PARAGUAY",
            "ECUADOR",
            "PANAMÁ",
            "COSTA RICA",
            "GUATEMALA",
            "CUBA",
            "REPÚBLICA DOMINICANA",
            "HONDURAS",
            "EL SALVADOR",
            "NICARAGUA",
            "TRINIDAD Y TOBAGO",
            "JAMAICA",
        ],
    },
    RegionBucket {
        key: "europa",
        label: "Europa",
        rotate: [-15.0, 0.0, 0.0],
        center: [0.0, 50.0],
        scale: 400.0,
        countries: &[
            "ESPAÑA",
            "FRANCIA",
            "ALEMANIA",
            "ITALIA",
            "REINO UNIDO",
            "PORTUGAL",
            "RUSIA",
            "SUECIA",
            "NORUEGA",
            "SUIZA",
            "AUSTRIA",
            "BÉLGICA",
            "HOLANDA",
            "PAÍSES BAJOS",
            "POLONIA",
            "GRECIA",
            "UCRANIA",
            "RUMANIA",
            "REPÚBLICA CHECA",
            "HUNGRÍA",
            "DINAMARCA",
            "FINLANDIA",
            "IRLANDA",
            "CROACIA",
            "SERBIA",
            "BULGARIA",
            "ESLOVAQUIA",
            "ESLOVENIA",
            "LITUANIA",
            "LETONIA",
            "ESTONIA",
        ],
    },
    RegionBucket {
        key: "asia-pacifico",
        label: "Asia-Pacífico",
        rotate: [-120.0, 0.0, 0.0],
        center: [0.0, 10.0],
        scale: 180.0,
        countries: &[
            "CHINA",
            "JAPÓN",
            "INDIA",
            "COREA DEL SUR",
            "TAILANDIA",
            "VIETNAM",
            "SINGAPUR",
            "INDONESIA",
            "MALASIA",
            "FILIPINAS",
            "PAKISTAN",
            "TAIWAN",
            "AUSTRALIA",
            "NUEVA ZELANDA",
        ],
    },
    RegionBucket {
        key: "oriente-medio",
        label: "Oriente Medio",
        rotate: [-45.0, 0.0, 0.0],
        center: [0.0, 28.0],
        scale: 350.0,
        countries: &[
            "ISRAEL",
            "TURQUÍA",
            "ARABIA SAUDITA",
            "EMIRATOS ÁRABES",
            "QATAR",
            "KUWAIT",
            "IRÁN",
            "LÍBANO",
            "JORDANIA",
        ],
    },
    RegionBucket {
        key: "africa",
        label: "África",
        rotate: [-20.0, 0.0, 0.0],
        center: [0.0, 0.0],
        scale: 220.0,
        countries: &[
            "SUDÁFRICA",
            "EGIPTO",
            "MARRUECOS",
            "ARGELIA",
            "NIGERIA",
            "KENIA",
            "ETIOPÍA",
            "ANGOLA",
            "LIBIA",
            "MOZAMBIQUE",
            "GHANA",
            "SENEGAL",
            "TÚNEZ",
        ],
    },
];

/// Label for countries that fall in no configured region.
pub const REGION_OTHER: &str = "Otros";

fn region_contains(bucket: &RegionBucket, canonical_name: &str) -> bool {
    bucket
        .countries
        .iter()
        .any(|c| c.contains(canonical_name) || canonical_name.contains(c))
}

/// Look up a region bucket by key.
pub fn region(key: &str) -> Option<&'static RegionBucket> {
    REGIONS.iter().find(|r| r.key == key)
}

/// Region label for one country name ("Otros" when unmatched).
pub fn region_of(country_name: &str) -> &'static str {
    let canonical = geocode::canonical_key(country_name);
    if canonical.is_empty() {
        return REGION_OTHER;
    }
    REGIONS
        .iter()
        .find(|r| region_contains(r, &canonical))
        .map(|r| r.label)
        .unwrap_or(REGION_OTHER)
}

/// Filter country aggregates down to one region's members.
pub fn filter_by_region<'a>(
    aggregates: &'a [CountryAggregate],
    region_key: &str,
) -> Vec<&'a CountryAggregate> {
    let bucket = match region(region_key) {
        Some(b) => b,
        None => return Vec::new(),
    };
    aggregates
        .iter()
        .filter(|agg| region_contains(bucket, &agg.canonical_name))
        .collect()
}

/// Per-region headcounts, highest first (radar chart data).
pub fn region_coverage(records: &[DeploymentRecord]) -> Vec<(&'static str, u32)> {
    let mut counts: HashMap<&'static str, u32> = HashMap::new();
    for record in records {
        *counts.entry(region_of(&record.country_name)).or_insert(0) += 1;
    }
    let mut out: Vec<(&'static str, u32)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    out
}

/// Heat color for a country shape: neutral at zero, low→high interpolation
/// over 1..=max. Pure function of (count, max); max below count is clamped.
pub fn heat_color(count: u32, max_count_in_set: u32) -> String {
    if count == 0 || max_count_in_set == 0 {
        return rgb(HEAT_INACTIVE);
    }
    let max = max_count_in_set.max(count);
    if max <= 1 {
        return rgb(HEAT_HIGH);
    }
    let t = (count - 1) as f64 / (max - 1) as f64;
    let mix = |lo: u8, hi: u8| -> u8 { (lo as f64 + (hi as f64 - lo as f64) * t).round() as u8 };
    rgb([
        mix(HEAT_LOW[0], HEAT_HIGH[0]),
        mix(HEAT_LOW[1], HEAT_HIGH[1]),
        mix(HEAT_LOW[2], HEAT_HIGH[2]),
    ])
}

fn rgb(c: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;
    use crate::types::{DeploymentRecord, Force, RankCategory};

    fn record(id: &str, country: &str) -> DeploymentRecord {
        DeploymentRecord {
            id: id.to_string(),
            display_name: id.to_string(),
            country_name: country.to_string(),
            force: Force::Army,
            rank_category: RankCategory::Officer,
            rank_name: None,
            rank_abbreviation: None,
            nato_rank_code: None,
            departure_date: None,
            commission_end: None,
            decree_signature_date: None,
            decree_number: None,
        }
    }

    #[test]
    fn region_of_known_countries() {
        assert_eq!(region_of("Alemania"), "Europa");
        assert_eq!(region_of("BRASIL"), "América");
        assert_eq!(region_of("japón"), "Asia-Pacífico");
        assert_eq!(region_of("Atlantis"), "Otros");
    }

    #[test]
    fn substring_membership_matches_partial_names() {
        // canonical input contains the configured member name "ALEMANIA"
        assert_eq!(region_of("República Federal de Alemania"), "Europa");
    }

    #[test]
    fn filter_by_region_keeps_only_members() {
        let records = vec![
            record("1", "Alemania"),
            record("2", "Brasil"),
            record("3", "Francia"),
        ];
        let aggs = aggregate::aggregate(&records);
        let europe = filter_by_region(&aggs, "europa");
        assert_eq!(europe.len(), 2);
        assert!(europe.iter().all(|a| a.canonical_name != "BRASIL"));

        assert!(filter_by_region(&aggs, "no-such-region").is_empty());
    }

    #[test]
    fn region_coverage_counts_and_orders() {
        let records = vec![
            record("1", "Alemania"),
            record("2", "Francia"),
            record("3", "Brasil"),
        ];
        let cov = region_coverage(&records);
        assert_eq!(cov[0], ("Europa", 2));
        assert_eq!(cov[1], ("América", 1));
    }

    #[test]
    fn heat_color_endpoints_and_monotonicity() {
        assert_eq!(heat_color(0, 10), "#1e293b");
        assert_eq!(heat_color(1, 1), "#60a5fa");
        assert_eq!(heat_color(10, 10), "#60a5fa");
        assert_eq!(heat_color(1, 10), "#1e40af");

        // green channel grows monotonically with count
        let channel = |c: u32| u8::from_str_radix(&heat_color(c, 10)[3..5], 16).unwrap();
        let mut last = 0u8;
        for c in 1..=10 {
            let g = channel(c);
            assert!(g >= last, "heat must not dim as count grows");
            last = g;
        }
    }

    #[test]
    fn heat_color_is_pure() {
        assert_eq!(heat_color(4, 9), heat_color(4, 9));
    }
}
