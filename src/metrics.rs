//! Roster-level analytics: summary metrics and the trailing activity
//! timeline behind the analytics view.

use chrono::{Datelike, Months, NaiveDate};

use crate::dates;
use crate::filters;
use crate::regions;
use crate::types::{DeploymentRecord, Force, ForceCounts};

/// Summary figures for the analytics header cards.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterMetrics {
    pub total_personnel: u32,
    pub by_force: ForceCounts,
    /// Mean days remaining across records with a future end-date.
    pub avg_days_remaining: Option<f64>,
    /// Mean commission length in days (departure through end), for records
    /// carrying both dates.
    pub avg_commission_days: Option<f64>,
    /// Distinct countries with at least one deployment.
    pub countries_covered: u32,
    /// Distinct regions with at least one deployment ("Otros" included).
    pub regions_covered: u32,
    pub largest_force: Force,
    pub smallest_force: Force,
    /// Commissions ending within the next 30 days. Uses the roster filter's
    /// inclusive 0..=30 window, so a commission ending today counts.
    pub expiring_soon: u32,
}

/// Compute the roster metrics as of `today`.
pub fn compute_metrics(records: &[DeploymentRecord], today: NaiveDate) -> RosterMetrics {
    let by_force = filters::count_by_force(records);

    let remaining: Vec<i64> = records
        .iter()
        .filter_map(|r| r.commission_end)
        .map(|end| dates::days_remaining(end, today))
        .filter(|days| *days >= 0)
        .collect();
    let avg_days_remaining = mean(&remaining);

    let durations: Vec<i64> = records
        .iter()
        .filter_map(|r| match (r.departure_date, r.commission_end) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_days()),
            _ => None,
        })
        .collect();
    let avg_commission_days = mean(&durations);

    let countries_covered = {
        let mut names: Vec<String> = records
            .iter()
            .map(|r| crate::geocode::canonical_key(&r.country_name))
            .filter(|k| !k.is_empty())
            .collect();
        names.sort();
        names.dedup();
        names.len() as u32
    };

    let regions_covered = regions::region_coverage(records).len() as u32;

    let (largest_force, smallest_force) = force_extremes(&by_force);

    let expiring_soon = filters::expiring_within(records, today, 30).len() as u32;

    RosterMetrics {
        total_personnel: records.len() as u32,
        by_force,
        avg_days_remaining,
        avg_commission_days,
        countries_covered,
        regions_covered,
        largest_force,
        smallest_force,
        expiring_soon,
    }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}

/// Ties resolve in declaration order (Army, Navy, AirForce): largest keeps
/// the first maximum, smallest keeps the first minimum.
fn force_extremes(counts: &ForceCounts) -> (Force, Force) {
    let mut largest = Force::Army;
    let mut smallest = Force::Army;
    for force in Force::ALL {
        if counts.get(force) > counts.get(largest) {
            largest = force;
        }
        if counts.get(force) < counts.get(smallest) {
            smallest = force;
        }
    }
    (largest, smallest)
}

/// One month of the activity timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint {
    /// "YYYY-MM".
    pub month: String,
    /// Records active at any point in that month.
    pub active: u32,
}

/// Active headcount per month over the trailing `months` months ending with
/// the month of `today`, oldest first.
///
/// A record is active in a month when its departure falls on or before the
/// month's last day and its commission end (if any) falls on or after the
/// month's first day. Records with no departure date count as active since
/// always.
pub fn active_timeline(
    records: &[DeploymentRecord],
    today: NaiveDate,
    months: u32,
) -> Vec<TimelinePoint> {
    let months = months.max(1);
    let current = first_of_month(today);

    (0..months)
        .rev()
        .map(|back| {
            let start = current - Months::new(back);
            let end = (start + Months::new(1)).pred_opt().unwrap_or(start);
            let active = records
                .iter()
                .filter(|r| {
                    let departed = r.departure_date.map(|d| d <= end).unwrap_or(true);
                    let not_ended = r.commission_end.map(|e| e >= start).unwrap_or(true);
                    departed && not_ended
                })
                .count() as u32;
            TimelinePoint {
                month: start.format("%Y-%m").to_string(),
                active,
            }
        })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
