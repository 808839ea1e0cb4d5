//! Commission-expiration alerting: days-remaining classification and the
//! filtered alert feed.
//!
//! Everything here is a pure function of (records, today, thresholds,
//! dismissals). Changing the thresholds reclassifies the whole set on the
//! next call; there is no cached state to invalidate. The dismissal set is
//! session-scoped and owned by the caller — dismissing hides an alert, it
//! never touches the record.

use chrono::NaiveDate;

use crate::dates;
use crate::types::{
    AlertFeed, AlertItem, DeploymentRecord, DismissalSet, SeverityCounts, SeverityTier,
    ThresholdConfig,
};

/// Classification of a single commission end-date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub days_remaining: i64,
    /// None iff the commission has already ended (the distinct "Vencida"
    /// display state). Expired records keep their last rendered style in the
    /// UI but are never re-tiered into a severity.
    pub severity: Option<SeverityTier>,
}

impl Classification {
    pub fn is_expired(&self) -> bool {
        self.severity.is_none()
    }
}

/// Tier resolution over non-negative days remaining. Boundaries are
/// inclusive: days == warning_max_days is still Warning.
pub fn tier_for_days(days: i64, thresholds: &ThresholdConfig) -> SeverityTier {
    if days <= thresholds.critical_max_days as i64 {
        SeverityTier::Critical
    } else if days <= thresholds.warning_max_days as i64 {
        SeverityTier::Warning
    } else if days <= thresholds.info_max_days as i64 {
        SeverityTier::Informational
    } else {
        SeverityTier::Normal
    }
}

/// Classify one commission end-date against `today`.
///
/// Negative days remaining are valid and yield the Expired state
/// (severity = None) rather than a tier.
pub fn classify(
    commission_end: NaiveDate,
    today: NaiveDate,
    thresholds: &ThresholdConfig,
) -> Classification {
    let days = dates::days_remaining(commission_end, today);
    let severity = if days < 0 {
        None
    } else {
        Some(tier_for_days(days, thresholds))
    };
    Classification {
        days_remaining: days,
        severity,
    }
}

/// Build the active alert feed.
///
/// Includes records whose severity is Critical, Warning, or Informational;
/// Normal, Expired, and no-end-date records never alert, and dismissed ids
/// are excluded. Items come back most-urgent-first (ascending days
/// remaining); counts are always consistent with the item list.
pub fn active_alerts(
    records: &[DeploymentRecord],
    today: NaiveDate,
    thresholds: &ThresholdConfig,
    dismissed: &DismissalSet,
) -> AlertFeed {
    let mut items: Vec<AlertItem> = Vec::new();

    for record in records {
        let end = match record.commission_end {
            Some(d) => d,
            None => continue, // no alert possible
        };
        if dismissed.contains(&record.id) {
            continue;
        }

        let classification = classify(end, today, thresholds);
        let severity = match classification.severity {
            Some(s) if s.is_alert() => s,
            _ => continue,
        };

        items.push(AlertItem {
            record_id: record.id.clone(),
            display_name: record.display_name.clone(),
            country_name: record.country_name.clone(),
            force: record.force,
            commission_end: end,
            days_remaining: classification.days_remaining,
            severity,
        });
    }

    items.sort_by_key(|item| (item.days_remaining, item.record_id.clone()));

    let mut counts = SeverityCounts::default();
    for item in &items {
        match item.severity {
            SeverityTier::Critical => counts.critical += 1,
            SeverityTier::Warning => counts.warning += 1,
            SeverityTier::Informational => counts.informational += 1,
            SeverityTier::Normal => unreachable!("Normal never enters the feed"),
        }
    }

    AlertFeed { items, counts }
}

/// Urgency progress-bar width (percent, 5..=100) for one alert row.
/// Scales against the info threshold so the bar fills as the end date nears.
pub fn urgency_progress(days_remaining: i64, thresholds: &ThresholdConfig) -> u8 {
    let info = thresholds.info_max_days.max(1) as f64;
    let pct = 100.0 - (days_remaining.max(0) as f64 / info * 100.0);
    pct.clamp(5.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Force, RankCategory};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, end: Option<NaiveDate>) -> DeploymentRecord {
        DeploymentRecord {
            id: id.to_string(),
            display_name: format!("Agregado {id}"),
            country_name: "Brasil".to_string(),
            force: Force::Army,
            rank_category: RankCategory::Officer,
            rank_name: None,
            rank_abbreviation: None,
            nato_rank_code: None,
            departure_date: None,
            commission_end: end,
            decree_signature_date: None,
            decree_number: None,
        }
    }

    fn thresholds() -> ThresholdConfig {
        ThresholdConfig::default()
    }

    #[test]
    fn classification_scenario_matrix() {
        let today = date(2024, 1, 1);
        let t = thresholds();

        let c = classify(date(2024, 1, 20), today, &t);
        assert_eq!(c.days_remaining, 19);
        assert_eq!(c.severity, Some(SeverityTier::Critical));

        let c = classify(date(2024, 2, 15), today, &t);
        assert_eq!(c.days_remaining, 45);
        assert_eq!(c.severity, Some(SeverityTier::Warning));

        // boundary inclusive: exactly 60 days is still Warning
        let c = classify(date(2024, 3, 1), today, &t);
        assert_eq!(c.days_remaining, 60);
        assert_eq!(c.severity, Some(SeverityTier::Warning));

        let c = classify(date(2024, 6, 1), today, &t);
        assert_eq!(c.days_remaining, 152);
        assert_eq!(c.severity, Some(SeverityTier::Normal));
    }

    #[test]
    fn expired_is_distinct_not_a_tier() {
        let c = classify(date(2023, 12, 1), date(2024, 1, 1), &thresholds());
        assert!(c.days_remaining < 0);
        assert!(c.is_expired());
        assert_eq!(c.severity, None);
    }

    #[test]
    fn severity_is_monotonic_in_days() {
        let t = thresholds();
        let mut last_rank = 0u8;
        for days in 0..200i64 {
            let rank = tier_for_days(days, &t).rank();
            assert!(
                rank >= last_rank,
                "severity must not increase as days grow: day {days}"
            );
            last_rank = rank;
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let t = thresholds();
        let today = date(2024, 1, 1);
        let end = date(2024, 2, 10);
        assert_eq!(classify(end, today, &t), classify(end, today, &t));
    }

    #[test]
    fn feed_excludes_normal_expired_and_missing_dates() {
        let today = date(2024, 1, 1);
        let records = vec![
            record("critical", Some(date(2024, 1, 10))),
            record("normal", Some(date(2025, 1, 1))),
            record("expired", Some(date(2023, 6, 1))),
            record("no-date", None),
        ];
        let feed = active_alerts(&records, today, &thresholds(), &HashSet::new());
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].record_id, "critical");
    }

    #[test]
    fn dismissed_ids_never_appear() {
        let today = date(2024, 1, 1);
        let records = vec![
            record("a", Some(date(2024, 1, 10))),
            record("b", Some(date(2024, 1, 12))),
        ];
        let dismissed: DismissalSet = ["a".to_string()].into_iter().collect();
        let feed = active_alerts(&records, today, &thresholds(), &dismissed);
        assert!(feed.items.iter().all(|i| i.record_id != "a"));
        assert_eq!(feed.items.len(), 1);
    }

    #[test]
    fn counts_always_match_items() {
        let today = date(2024, 1, 1);
        let records = vec![
            record("c1", Some(date(2024, 1, 10))),
            record("c2", Some(date(2024, 1, 25))),
            record("w1", Some(date(2024, 2, 15))),
            record("i1", Some(date(2024, 4, 1))),
        ];
        let feed = active_alerts(&records, today, &thresholds(), &HashSet::new());

        let by = |s: SeverityTier| feed.items.iter().filter(|i| i.severity == s).count() as u32;
        assert_eq!(feed.counts.critical, by(SeverityTier::Critical));
        assert_eq!(feed.counts.warning, by(SeverityTier::Warning));
        assert_eq!(feed.counts.informational, by(SeverityTier::Informational));
        assert_eq!(feed.counts.critical, 2);
        assert_eq!(feed.counts.warning, 1);
        assert_eq!(feed.counts.informational, 1);
    }

    #[test]
    fn feed_is_most_urgent_first() {
        let today = date(2024, 1, 1);
        let records = vec![
            record("later", Some(date(2024, 3, 1))),
            record("soon", Some(date(2024, 1, 5))),
        ];
        let feed = active_alerts(&records, today, &thresholds(), &HashSet::new());
        assert_eq!(feed.items[0].record_id, "soon");
    }

    #[test]
    fn threshold_change_reclassifies_without_refetch() {
        let today = date(2024, 1, 1);
        let records = vec![record("x", Some(date(2024, 2, 15)))]; // 45 days

        let feed = active_alerts(&records, today, &thresholds(), &HashSet::new());
        assert_eq!(feed.items[0].severity, SeverityTier::Warning);

        let wider = ThresholdConfig {
            critical_max_days: 50,
            warning_max_days: 90,
            info_max_days: 120,
        };
        let feed = active_alerts(&records, today, &wider, &HashSet::new());
        assert_eq!(feed.items[0].severity, SeverityTier::Critical);
    }

    #[test]
    fn urgency_progress_bounds() {
        let t = thresholds();
        assert_eq!(urgency_progress(0, &t), 100);
        assert_eq!(urgency_progress(120, &t), 5);
        assert_eq!(urgency_progress(500, &t), 5);
        assert_eq!(urgency_progress(60, &t), 50);
    }
}
