//! Roster search, filtering, and sorting for the master table.
//!
//! All functions take the full record slice and return fresh vectors; the
//! table layer re-runs them on every keystroke or header click.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dates;
use crate::types::{DeploymentRecord, Force, ForceCounts, RankCategory};

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    DisplayName,
    Country,
    Force,
    Rank,
    CommissionEnd,
    DepartureDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Case-insensitive free-text search across the displayable fields.
pub fn search<'a>(records: &'a [DeploymentRecord], term: &str) -> Vec<&'a DeploymentRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| {
            let mut haystacks: Vec<String> = vec![
                r.display_name.to_lowercase(),
                r.country_name.to_lowercase(),
                r.force.code().to_lowercase(),
                r.force.display_name().to_lowercase(),
            ];
            if let Some(rank) = &r.rank_name {
                haystacks.push(rank.to_lowercase());
            }
            if let Some(abbr) = &r.rank_abbreviation {
                haystacks.push(abbr.to_lowercase());
            }
            if let Some(code) = &r.nato_rank_code {
                haystacks.push(code.to_lowercase());
            }
            if let Some(decree) = &r.decree_number {
                haystacks.push(decree.to_lowercase());
            }
            if let Some(end) = r.commission_end {
                haystacks.push(dates::format_display(end));
            }
            haystacks.iter().any(|h| h.contains(&term))
        })
        .collect()
}

pub fn filter_by_force<'a>(
    records: &'a [DeploymentRecord],
    force: Option<Force>,
) -> Vec<&'a DeploymentRecord> {
    match force {
        None => records.iter().collect(),
        Some(f) => records.iter().filter(|r| r.force == f).collect(),
    }
}

pub fn filter_by_rank_category<'a>(
    records: &'a [DeploymentRecord],
    category: Option<RankCategory>,
) -> Vec<&'a DeploymentRecord> {
    match category {
        None => records.iter().collect(),
        Some(c) => records.iter().filter(|r| r.rank_category == c).collect(),
    }
}

pub fn filter_by_rank<'a>(
    records: &'a [DeploymentRecord],
    rank_name: Option<&str>,
) -> Vec<&'a DeploymentRecord> {
    match rank_name {
        None => records.iter().collect(),
        Some(name) => records
            .iter()
            .filter(|r| r.rank_name.as_deref() == Some(name))
            .collect(),
    }
}

/// Sort a copy of the records. Missing values sort last in both directions.
pub fn sort_records(
    records: &[DeploymentRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<DeploymentRecord> {
    let mut sorted: Vec<DeploymentRecord> = records.to_vec();
    sorted.sort_by(|a, b| match field {
        SortField::DisplayName => directed(a.display_name.cmp(&b.display_name), direction),
        SortField::Country => directed(a.country_name.cmp(&b.country_name), direction),
        SortField::Force => directed(a.force.code().cmp(b.force.code()), direction),
        SortField::Rank => cmp_option(a.rank_name.as_ref(), b.rank_name.as_ref(), direction),
        SortField::CommissionEnd => cmp_option(a.commission_end, b.commission_end, direction),
        SortField::DepartureDate => cmp_option(a.departure_date, b.departure_date, direction),
    });
    sorted
}

fn directed(ord: std::cmp::Ordering, direction: SortDirection) -> std::cmp::Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Direction applies to present values only; absent ones stay last either
/// way.
fn cmp_option<T: Ord>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), direction),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

/// Forces present in the roster, declaration order (the force filter
/// dropdown).
pub fn unique_forces(records: &[DeploymentRecord]) -> Vec<Force> {
    Force::ALL
        .into_iter()
        .filter(|f| records.iter().any(|r| r.force == *f))
        .collect()
}

/// Distinct rank names, sorted (the grade filter dropdown).
pub fn unique_ranks(records: &[DeploymentRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.rank_name.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Headcount per force over the whole roster (the KPI bar).
pub fn count_by_force(records: &[DeploymentRecord]) -> ForceCounts {
    let mut counts = ForceCounts::default();
    for record in records {
        counts.increment(record.force);
    }
    counts
}

/// Records whose commission ends within the next `days_threshold` days
/// (inclusive, not yet expired).
pub fn expiring_within<'a>(
    records: &'a [DeploymentRecord],
    today: NaiveDate,
    days_threshold: i64,
) -> Vec<&'a DeploymentRecord> {
    records
        .iter()
        .filter(|r| match r.commission_end {
            Some(end) => {
                let days = dates::days_remaining(end, today);
                (0..=days_threshold).contains(&days)
            }
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, country: &str, force: Force) -> DeploymentRecord {
        DeploymentRecord {
            id: id.to_string(),
            display_name: name.to_string(),
            country_name: country.to_string(),
            force,
            rank_category: RankCategory::Officer,
            rank_name: Some("Coronel".to_string()),
            rank_abbreviation: Some("CR".to_string()),
            nato_rank_code: Some("OF-5".to_string()),
            departure_date: None,
            commission_end: NaiveDate::from_ymd_opt(2024, 6, 1),
            decree_signature_date: None,
            decree_number: None,
        }
    }

    fn roster() -> Vec<DeploymentRecord> {
        vec![
            record("1", "Zárate, Ana", "Brasil", Force::Army),
            record("2", "Acosta, Luis", "Alemania", Force::Navy),
            record("3", "Molina, Eva", "Chile", Force::Navy),
        ]
    }

    #[test]
    fn search_matches_any_display_field() {
        let r = roster();
        assert_eq!(search(&r, "alemania").len(), 1);
        assert_eq!(search(&r, "ACOSTA").len(), 1);
        assert_eq!(search(&r, "coronel").len(), 3);
        assert_eq!(search(&r, "").len(), 3);
        assert!(search(&r, "inexistente").is_empty());
    }

    #[test]
    fn force_filter_none_passes_everything() {
        let r = roster();
        assert_eq!(filter_by_force(&r, None).len(), 3);
        assert_eq!(filter_by_force(&r, Some(Force::Navy)).len(), 2);
        assert!(filter_by_force(&r, Some(Force::AirForce)).is_empty());
    }

    #[test]
    fn sort_by_name_both_directions() {
        let r = roster();
        let asc = sort_records(&r, SortField::DisplayName, SortDirection::Ascending);
        assert_eq!(asc[0].display_name, "Acosta, Luis");
        let desc = sort_records(&r, SortField::DisplayName, SortDirection::Descending);
        assert_eq!(desc[0].display_name, "Zárate, Ana");
    }

    #[test]
    fn sort_by_date_puts_missing_last() {
        let mut r = roster();
        r[1].commission_end = None;
        let sorted = sort_records(&r, SortField::CommissionEnd, SortDirection::Ascending);
        assert_eq!(sorted.last().unwrap().id, "2");
    }

    #[test]
    fn descending_date_sort_also_puts_missing_last() {
        let mut r = roster();
        r[0].commission_end = NaiveDate::from_ymd_opt(2024, 3, 1);
        r[1].commission_end = None;
        r[2].commission_end = NaiveDate::from_ymd_opt(2024, 9, 1);
        let sorted = sort_records(&r, SortField::CommissionEnd, SortDirection::Descending);
        assert_eq!(sorted[0].id, "3");
        assert_eq!(sorted[1].id, "1");
        assert_eq!(sorted.last().unwrap().id, "2");
    }

    #[test]
    fn count_by_force_totals() {
        let counts = count_by_force(&roster());
        assert_eq!(counts.ea, 1);
        assert_eq!(counts.ara, 2);
        assert_eq!(counts.faa, 0);
    }

    #[test]
    fn expiring_within_excludes_expired_and_far() {
        let mut r = roster();
        r[0].commission_end = NaiveDate::from_ymd_opt(2024, 1, 10); // 9 days out
        r[1].commission_end = NaiveDate::from_ymd_opt(2023, 12, 20); // expired
        r[2].commission_end = NaiveDate::from_ymd_opt(2024, 8, 1); // far out
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let soon = expiring_within(&r, today, 60);
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].id, "1");
    }

    #[test]
    fn unique_forces_keeps_declaration_order() {
        let forces = unique_forces(&roster());
        assert_eq!(forces, vec![Force::Army, Force::Navy]);
    }

    #[test]
    fn unique_ranks_dedupes_and_sorts() {
        let mut r = roster();
        r[0].rank_name = Some("Almirante".to_string());
        let ranks = unique_ranks(&r);
        assert_eq!(ranks, vec!["Almirante".to_string(), "Coronel".to_string()]);
    }
}
