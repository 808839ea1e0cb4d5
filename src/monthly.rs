//! Expiration counts bucketed by calendar month, for the trend chart.

use std::collections::BTreeMap;

use crate::types::{DeploymentRecord, MonthlyBucket};

/// Group records by the calendar month of their commission end-date.
///
/// Returns "YYYY-MM" buckets sorted ascending. Records with no end date are
/// excluded (they were already filtered to None at the boundary if the wire
/// value was malformed). A commission is counted in the month it ends;
/// commissions spanning a boundary are not split.
pub fn bucket_by_month(records: &[DeploymentRecord]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<String, u32> = BTreeMap::new();

    for record in records {
        let end = match record.commission_end {
            Some(d) => d,
            None => continue,
        };
        *buckets.entry(end.format("%Y-%m").to_string()).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(month, count)| MonthlyBucket { month, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Force, RankCategory};
    use chrono::NaiveDate;

    fn record(id: &str, end: Option<&str>) -> DeploymentRecord {
        DeploymentRecord {
            id: id.to_string(),
            display_name: id.to_string(),
            country_name: "Chile".to_string(),
            force: Force::Army,
            rank_category: RankCategory::Officer,
            rank_name: None,
            rank_abbreviation: None,
            nato_rank_code: None,
            departure_date: None,
            commission_end: end.map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()),
            decree_signature_date: None,
            decree_number: None,
        }
    }

    #[test]
    fn buckets_sorted_ascending_by_month() {
        let records = vec![
            record("a", Some("2024-06-15")),
            record("b", Some("2024-01-31")),
            record("c", Some("2024-06-01")),
            record("d", Some("2023-12-25")),
        ];
        let buckets = bucket_by_month(&records);
        assert_eq!(
            buckets,
            vec![
                MonthlyBucket {
                    month: "2023-12".to_string(),
                    count: 1
                },
                MonthlyBucket {
                    month: "2024-01".to_string(),
                    count: 1
                },
                MonthlyBucket {
                    month: "2024-06".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn records_without_end_date_are_skipped() {
        let records = vec![record("a", None), record("b", Some("2024-03-10"))];
        let buckets = bucket_by_month(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 1);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(bucket_by_month(&[]).is_empty());
    }
}
