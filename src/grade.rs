//! STANAG 2116 grade classification for visual tiering.
//!
//! Maps a NATO rank code ("OF-n" / "OR-n") to one of five display
//! categories. Pure and infallible: anything unparseable falls back to a
//! conservative default from the rank category alone.

use crate::types::RankCategory;

/// Visual tier of a military grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeCategory {
    /// OF-7 .. OF-9
    SeniorOfficer,
    /// OF-3 .. OF-6
    FieldOfficer,
    /// OF-1 .. OF-2
    JuniorOfficer,
    /// OR-6 .. OR-9
    SeniorNco,
    /// OR-1 .. OR-5
    JuniorNco,
}

impl GradeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GradeCategory::SeniorOfficer => "Oficial Superior",
            GradeCategory::FieldOfficer => "Oficial Jefe",
            GradeCategory::JuniorOfficer => "Oficial Subalterno",
            GradeCategory::SeniorNco => "Suboficial Superior",
            GradeCategory::JuniorNco => "Suboficial Subalterno",
        }
    }
}

/// Rank-code prefix: officer (OF), other-ranks (OR), or something else with
/// the right "{prefix}-{number}" shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NatoPrefix {
    Of,
    Or,
    Other,
}

/// Parse "OF-5" / "or-3" into (prefix, level). None when the code does not
/// have the "{prefix}-{number}" shape at all.
fn parse_nato_code(code: &str) -> Option<(NatoPrefix, u8)> {
    let code = code.trim().to_uppercase();
    let (prefix, num) = code.split_once('-')?;
    let level: u8 = num.trim().parse().ok()?;
    if !(1..=9).contains(&level) {
        return None;
    }
    let prefix = match prefix {
        "OF" => NatoPrefix::Of,
        "OR" => NatoPrefix::Or,
        _ => NatoPrefix::Other,
    };
    Some((prefix, level))
}

/// Classify a NATO rank code into its visual tier.
///
/// Fallbacks: an absent or shapeless code takes the category default
/// (Officer → FieldOfficer, NCO → SeniorNco); a well-shaped code with an
/// unrecognized prefix is treated as FieldOfficer.
pub fn classify(nato_rank_code: Option<&str>, rank_category: RankCategory) -> GradeCategory {
    let parsed = nato_rank_code.and_then(parse_nato_code);

    let (prefix, level) = match parsed {
        Some(p) => p,
        None => {
            return match rank_category {
                RankCategory::Officer => GradeCategory::FieldOfficer,
                RankCategory::Nco => GradeCategory::SeniorNco,
            }
        }
    };

    match prefix {
        NatoPrefix::Of => {
            if level >= 7 {
                GradeCategory::SeniorOfficer
            } else if level >= 3 {
                GradeCategory::FieldOfficer
            } else {
                GradeCategory::JuniorOfficer
            }
        }
        NatoPrefix::Or => {
            if level >= 6 {
                GradeCategory::SeniorNco
            } else {
                GradeCategory::JuniorNco
            }
        }
        NatoPrefix::Other => GradeCategory::FieldOfficer,
    }
}
