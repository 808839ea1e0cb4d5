//! Reference lookup tables: forces, grades, posts, and countries.
//!
//! These come from the backing catalog as JSON and are held by the caller
//! for the lifetime of a session. Resolution is by id; unknown ids resolve
//! to None and the caller falls back to the raw value it already has.

use serde::{Deserialize, Serialize};

use crate::types::{Force, RankCategory};

/// One grade (rank) catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// NATO grade code ("OF-5", "OR-8"), when cataloged.
    #[serde(default)]
    pub nato_code: Option<String>,
    pub category: RankCategory,
    /// Grades are force-specific in the catalog (a Coronel belongs to EA).
    #[serde(default)]
    pub force: Option<Force>,
}

/// One post (cargo) catalog row, the title an attaché serves under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoEntry {
    pub id: String,
    pub title: String,
    pub category: RankCategory,
}

/// One destination country catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub id: String,
    pub name: String,
}

/// The session catalog, deserialized once from the backing store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupTables {
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
    #[serde(default)]
    pub cargos: Vec<CargoEntry>,
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
}

impl LookupTables {
    /// Full display name for a force code ("EA" → "Ejército").
    /// Unknown codes echo back unchanged.
    pub fn force_name(code: &str) -> String {
        match Force::from_code(code) {
            Some(force) => force.display_name().to_string(),
            None => code.to_string(),
        }
    }

    pub fn grade_by_id(&self, id: &str) -> Option<&GradeEntry> {
        self.grades.iter().find(|g| g.id == id)
    }

    /// Grades offered for one force, catalog order.
    pub fn grades_for_force(&self, force: Force) -> Vec<&GradeEntry> {
        self.grades
            .iter()
            .filter(|g| g.force.map(|f| f == force).unwrap_or(true))
            .collect()
    }

    /// Post titles an officer or NCO can hold, catalog order. The form shows
    /// only the titles matching the selected grade's category.
    pub fn cargos_for_category(&self, category: RankCategory) -> Vec<&CargoEntry> {
        self.cargos
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    pub fn cargo_by_id(&self, id: &str) -> Option<&CargoEntry> {
        self.cargos.iter().find(|c| c.id == id)
    }

    /// Destination country names, catalog order.
    pub fn country_names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }
}
