//! Core computation library for the attaché deployment dashboard.
//!
//! Pure functions over an in-memory roster of deployment records: country
//! aggregation for the world map, commission-expiration alerting, NATO grade
//! classification, regional coverage, monthly trend buckets, roster filters,
//! and analytics metrics. No I/O lives here — callers load the records,
//! supply "today" and the threshold config, and render what comes back.

pub mod aggregate;
pub mod alerts;
pub mod dates;
pub mod error;
pub mod filters;
pub mod geocode;
pub mod grade;
pub mod lookup;
pub mod metrics;
pub mod monthly;
pub mod regions;
pub mod types;

pub use error::CoreError;
pub use types::{
    AlertFeed, AlertItem, CountryAggregate, DeploymentRecord, DismissalSet, Force, ForceCounts,
    MonthlyBucket, RankCategory, RawDeploymentRecord, SeverityCounts, SeverityTier,
    ThresholdConfig,
};
