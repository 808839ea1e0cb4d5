//! Core data model for the attaché roster.
//!
//! `DeploymentRecord` is the typed form of what the CRUD API serves; the
//! duck-typed wire shape is `RawDeploymentRecord`, validated and normalized
//! at the boundary by [`DeploymentRecord::from_raw`]. Derived values
//! (days remaining, severity) are never stored here — they are recomputed on
//! every read by the alert classifier.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::CoreError;

/// Branch of the armed forces. Wire codes are the historical ones:
/// EA (Ejército), ARA (Armada), FAA (Fuerza Aérea).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Force {
    #[serde(rename = "EA")]
    Army,
    #[serde(rename = "ARA")]
    Navy,
    #[serde(rename = "FAA")]
    AirForce,
}

impl Force {
    /// Fixed priority order used for dominant-force tie-breaking on map pins.
    pub const ALL: [Force; 3] = [Force::Army, Force::Navy, Force::AirForce];

    pub fn code(&self) -> &'static str {
        match self {
            Force::Army => "EA",
            Force::Navy => "ARA",
            Force::AirForce => "FAA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Force::Army => "Ejército",
            Force::Navy => "Armada",
            Force::AirForce => "Fuerza Aérea",
        }
    }

    /// Single-color map pin palette (olive / france blue / sky blue).
    pub fn color(&self) -> &'static str {
        match self {
            Force::Army => "#6b7f3e",
            Force::Navy => "#002395",
            Force::AirForce => "#87CEEB",
        }
    }

    pub fn from_code(code: &str) -> Option<Force> {
        match code.trim().to_uppercase().as_str() {
            "EA" => Some(Force::Army),
            "ARA" => Some(Force::Navy),
            "FAA" => Some(Force::AirForce),
            _ => None,
        }
    }
}

/// Officer vs NCO. Wire values match the master filter of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankCategory {
    #[serde(rename = "Oficial")]
    Officer,
    #[serde(rename = "Suboficial")]
    Nco,
}

impl RankCategory {
    pub fn from_label(label: &str) -> Option<RankCategory> {
        match label.trim() {
            "Oficial" | "Officer" => Some(RankCategory::Officer),
            "Suboficial" | "NCO" => Some(RankCategory::Nco),
            _ => None,
        }
    }
}

/// Severity of an upcoming commission expiration. Wire names are the
/// Spanish labels the alert feed renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    #[serde(rename = "Critica")]
    Critical,
    #[serde(rename = "Advertencia")]
    Warning,
    #[serde(rename = "Informacion")]
    Informational,
    #[serde(rename = "Normal")]
    Normal,
}

impl SeverityTier {
    /// Severity rank: 0 is most severe. Used for monotonicity checks and
    /// feed ordering.
    pub fn rank(&self) -> u8 {
        match self {
            SeverityTier::Critical => 0,
            SeverityTier::Warning => 1,
            SeverityTier::Informational => 2,
            SeverityTier::Normal => 3,
        }
    }

    /// Normal is never surfaced as an alert.
    pub fn is_alert(&self) -> bool {
        !matches!(self, SeverityTier::Normal)
    }
}

/// Days-remaining boundaries for severity tiers. Persisted per user by the
/// preferences layer; this crate only reads it.
///
/// Ordering (critical ≤ warning ≤ info) is deliberately not enforced here —
/// [`ThresholdConfig::validate`] reports inconsistency so the configuration
/// editor can constrain input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfig {
    #[serde(default = "default_critical_max")]
    pub critical_max_days: u32,
    #[serde(default = "default_warning_max")]
    pub warning_max_days: u32,
    #[serde(default = "default_info_max")]
    pub info_max_days: u32,
}

fn default_critical_max() -> u32 {
    30
}

fn default_warning_max() -> u32 {
    60
}

fn default_info_max() -> u32 {
    120
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            critical_max_days: default_critical_max(),
            warning_max_days: default_warning_max(),
            info_max_days: default_info_max(),
        }
    }
}

impl ThresholdConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.critical_max_days > self.warning_max_days
            || self.warning_max_days > self.info_max_days
        {
            return Err(CoreError::InconsistentThresholds {
                critical: self.critical_max_days,
                warning: self.warning_max_days,
                info: self.info_max_days,
            });
        }
        Ok(())
    }
}

/// Record ids hidden from the alert feed for the current session. Owned by
/// the calling layer; the core only reads it.
pub type DismissalSet = HashSet<String>;

/// One person's attaché assignment, fully typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub id: String,
    /// "Surname, Name" display string.
    pub display_name: String,
    pub country_name: String,
    pub force: Force,
    pub rank_category: RankCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_abbreviation: Option<String>,
    /// STANAG "OF-n" / "OR-n" code. May be absent or malformed; the grade
    /// classifier falls back to `rank_category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nato_rank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    /// Required for alerting; a record without it simply never alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decree_signature_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decree_number: Option<String>,
}

/// Duck-typed record shape as it arrives from the API collaborator: every
/// field a string, dates in either dd/MM/yyyy or ISO form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeploymentRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub force_code: String,
    #[serde(default)]
    pub rank_category: String,
    #[serde(default)]
    pub rank_name: Option<String>,
    #[serde(default)]
    pub rank_abbreviation: Option<String>,
    #[serde(default)]
    pub nato_rank_code: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub commission_end: Option<String>,
    #[serde(default)]
    pub decree_signature_date: Option<String>,
    #[serde(default)]
    pub decree_number: Option<String>,
}

impl DeploymentRecord {
    /// Validate and normalize a raw wire record.
    ///
    /// Hard requirements: id, country name, a known force code and rank
    /// category. Optional dates that fail to parse are an error here (the
    /// import layer should surface them); an *absent* optional date is fine
    /// and degrades the affected view instead.
    pub fn from_raw(raw: RawDeploymentRecord) -> Result<DeploymentRecord, CoreError> {
        let id = raw.id.trim().to_string();
        if id.is_empty() {
            return Err(CoreError::MissingField {
                id: "<unknown>".to_string(),
                field: "id",
            });
        }
        if raw.country_name.trim().is_empty() {
            return Err(CoreError::MissingField {
                id,
                field: "countryName",
            });
        }

        let force = Force::from_code(&raw.force_code).ok_or_else(|| CoreError::UnknownForce {
            id: id.clone(),
            value: raw.force_code.clone(),
        })?;
        let rank_category = RankCategory::from_label(&raw.rank_category).ok_or_else(|| {
            CoreError::UnknownRankCategory {
                id: id.clone(),
                value: raw.rank_category.clone(),
            }
        })?;

        let departure_date = parse_optional_date(&id, "departureDate", raw.departure_date)?;
        let commission_end = parse_optional_date(&id, "commissionEnd", raw.commission_end)?;
        let decree_signature_date =
            parse_optional_date(&id, "decreeSignatureDate", raw.decree_signature_date)?;

        Ok(DeploymentRecord {
            id,
            display_name: raw.display_name.trim().to_string(),
            country_name: raw.country_name.trim().to_string(),
            force,
            rank_category,
            rank_name: raw.rank_name,
            rank_abbreviation: raw.rank_abbreviation,
            nato_rank_code: raw.nato_rank_code,
            departure_date,
            commission_end,
            decree_signature_date,
            decree_number: raw.decree_number,
        })
    }
}

fn parse_optional_date(
    id: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, CoreError> {
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => match dates::parse_flexible(&s) {
            Some(d) => Ok(Some(d)),
            None => Err(CoreError::MalformedDate {
                id: id.to_string(),
                field,
                value: s,
            }),
        },
    }
}

/// Per-force headcounts within one aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceCounts {
    pub ea: u32,
    pub ara: u32,
    pub faa: u32,
}

impl ForceCounts {
    pub fn get(&self, force: Force) -> u32 {
        match force {
            Force::Army => self.ea,
            Force::Navy => self.ara,
            Force::AirForce => self.faa,
        }
    }

    pub fn increment(&mut self, force: Force) {
        match force {
            Force::Army => self.ea += 1,
            Force::Navy => self.ara += 1,
            Force::AirForce => self.faa += 1,
        }
    }

    pub fn sum(&self) -> u32 {
        self.ea + self.ara + self.faa
    }
}

/// One country's share of the deployment, rebuilt from the full record set
/// on every aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAggregate {
    /// Uppercased, trimmed grouping key.
    pub canonical_name: String,
    /// Country name as first seen in the data (for display).
    pub display_name: String,
    /// [longitude, latitude]; None when the geocoder found no match. Map
    /// aggregates never contain None.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,
    pub total: u32,
    pub by_force: ForceCounts,
    pub members: Vec<DeploymentRecord>,
}

/// One entry of the active alert feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub record_id: String,
    pub display_name: String,
    pub country_name: String,
    pub force: Force,
    pub commission_end: NaiveDate,
    pub days_remaining: i64,
    pub severity: SeverityTier,
}

/// Per-severity alert counts; always consistent with the item list they
/// accompany.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    pub critical: u32,
    pub warning: u32,
    pub informational: u32,
}

/// The filtered, counted alert feed shown to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFeed {
    pub items: Vec<AlertItem>,
    pub counts: SeverityCounts,
}

/// One month's expiration count for the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// "YYYY-MM" in local calendar time.
    pub month: String,
    pub count: u32,
}
