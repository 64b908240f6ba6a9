use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Clinician-selected stone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StoneType {
    #[serde(rename = "Calcium Oxalate")]
    CalciumOxalate,
    #[serde(rename = "Calcium Phosphate")]
    CalciumPhosphate,
    #[serde(rename = "Uric Acid")]
    UricAcid,
    Struvite,
    Cystine,
    #[serde(rename = "Drug-induced")]
    DrugInduced,
    Unknown,
}

impl StoneType {
    pub const ALL: [StoneType; 7] = [
        StoneType::CalciumOxalate,
        StoneType::CalciumPhosphate,
        StoneType::UricAcid,
        StoneType::Struvite,
        StoneType::Cystine,
        StoneType::DrugInduced,
        StoneType::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StoneType::CalciumOxalate => "Calcium Oxalate",
            StoneType::CalciumPhosphate => "Calcium Phosphate",
            StoneType::UricAcid => "Uric Acid",
            StoneType::Struvite => "Struvite",
            StoneType::Cystine => "Cystine",
            StoneType::DrugInduced => "Drug-induced",
            StoneType::Unknown => "Unknown",
        }
    }

    /// Stable identifier used in URLs (e.g., "calcium_oxalate").
    pub fn id(self) -> &'static str {
        match self {
            StoneType::CalciumOxalate => "calcium_oxalate",
            StoneType::CalciumPhosphate => "calcium_phosphate",
            StoneType::UricAcid => "uric_acid",
            StoneType::Struvite => "struvite",
            StoneType::Cystine => "cystine",
            StoneType::DrugInduced => "drug_induced",
            StoneType::Unknown => "unknown",
        }
    }
}

impl FromStr for StoneType {
    type Err = CoreError;

    /// Accepts either the clinical label or the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoneType::ALL
            .into_iter()
            .find(|t| t.label() == s || t.id() == s)
            .ok_or_else(|| CoreError::UnknownStoneType(s.to_string()))
    }
}

impl fmt::Display for StoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
