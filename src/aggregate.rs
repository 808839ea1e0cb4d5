//! Per-country deployment aggregation.
//!
//! Groups the raw record set by canonical country name, accumulating total
//! and per-force headcounts. Rebuilt from scratch on every call — there is
//! no incremental update path. Two variants: the map-bound aggregate drops
//! countries the geocoder cannot place; the text-bound one keeps them.

use std::collections::HashMap;

use crate::geocode;
use crate::types::{CountryAggregate, DeploymentRecord, Force};

const PIN_RADIUS_MIN: f64 = 3.0;
const PIN_RADIUS_MAX: f64 = 8.0;

/// Aggregate records per country for the world map. Countries without
/// resolvable coordinates are silently excluded (they still appear in
/// [`aggregate_all`] output and list views).
pub fn aggregate(records: &[DeploymentRecord]) -> Vec<CountryAggregate> {
    group(records)
        .into_iter()
        .filter(|agg| {
            if agg.coordinates.is_none() {
                log::debug!(
                    "country '{}' has no coordinates; excluded from map aggregate",
                    agg.display_name
                );
            }
            agg.coordinates.is_some()
        })
        .collect()
}

/// Aggregate records per country for list views and reports. Keeps
/// countries the geocoder cannot place (coordinates = None).
pub fn aggregate_all(records: &[DeploymentRecord]) -> Vec<CountryAggregate> {
    group(records)
}

/// Group by canonical country name, first-appearance order.
fn group(records: &[DeploymentRecord]) -> Vec<CountryAggregate> {
    let mut order: Vec<CountryAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = geocode::canonical_key(&record.country_name);
        if key.is_empty() {
            continue;
        }

        let idx = match index.get(&key) {
            Some(&i) => i,
            None => {
                let resolved = geocode::resolve(&record.country_name);
                order.push(CountryAggregate {
                    canonical_name: key.clone(),
                    display_name: record.country_name.clone(),
                    coordinates: resolved.map(|r| r.coordinates),
                    total: 0,
                    by_force: Default::default(),
                    members: Vec::new(),
                });
                index.insert(key, order.len() - 1);
                order.len() - 1
            }
        };

        let agg = &mut order[idx];
        agg.total += 1;
        agg.by_force.increment(record.force);
        agg.members.push(record.clone());
    }

    order
}

/// Pin radius in display units, monotonic in headcount: total × 2 clamped
/// to [3, 8].
pub fn pin_radius(total: u32) -> f64 {
    ((total as f64) * 2.0).clamp(PIN_RADIUS_MIN, PIN_RADIUS_MAX)
}

/// Force whose color a single-color map pin takes: the force with the
/// highest count, ties broken Army > Navy > AirForce.
pub fn dominant_force(agg: &CountryAggregate) -> Force {
    let c = &agg.by_force;
    if c.ea >= c.ara && c.ea >= c.faa {
        Force::Army
    } else if c.ara >= c.faa {
        Force::Navy
    } else {
        Force::AirForce
    }
}
