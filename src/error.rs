//! Error types for the roster core.
//!
//! Per-record data-quality problems (unresolvable country, malformed date,
//! malformed rank code) are NOT errors: the affected record degrades out of
//! the affected view and the batch continues. `CoreError` exists for the
//! boundary where raw records enter the core and for threshold-config
//! validation done by the configuration-editing layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record {id}: missing required field '{field}'")]
    MissingField { id: String, field: &'static str },

    #[error("record {id}: unparseable date '{value}' in field '{field}'")]
    MalformedDate {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("record {id}: unknown force code '{value}'")]
    UnknownForce { id: String, value: String },

    #[error("record {id}: unknown rank category '{value}'")]
    UnknownRankCategory { id: String, value: String },

    #[error(
        "inconsistent thresholds: critical {critical} > warning {warning}, or warning > info {info}"
    )]
    InconsistentThresholds {
        critical: u32,
        warning: u32,
        info: u32,
    },
}

impl CoreError {
    /// True for errors caused by the data in a single record, as opposed to
    /// configuration problems. Callers typically log-and-skip these.
    pub fn is_record_scoped(&self) -> bool {
        !matches!(self, CoreError::InconsistentThresholds { .. })
    }
}
