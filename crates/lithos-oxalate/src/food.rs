use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Serving size assumed when the source data does not give one.
pub const DEFAULT_SERVING_SIZE: &str = "1 cup (raw)";

/// Oxalate content band for a serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OxalateLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl OxalateLevel {
    /// <10 mg Low, 10-49 Medium, 50-99 High, 100+ Very High.
    pub fn from_mg(oxalate_mg: f64) -> Self {
        if oxalate_mg >= 100.0 {
            OxalateLevel::VeryHigh
        } else if oxalate_mg >= 50.0 {
            OxalateLevel::High
        } else if oxalate_mg >= 10.0 {
            OxalateLevel::Medium
        } else {
            OxalateLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OxalateLevel::Low => "Low",
            OxalateLevel::Medium => "Medium",
            OxalateLevel::High => "High",
            OxalateLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for OxalateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FoodItem {
    pub food: String,
    /// Food category (e.g., "Vegetables").
    #[serde(rename = "type")]
    pub category: String,
    /// mg per serving.
    pub oxalate_mg: f64,
    pub serving_size: String,
    pub oxalate_level: OxalateLevel,
}

/// A food row as found in the data file; serving size and level are optional.
#[derive(Debug, Deserialize)]
pub(crate) struct RawFoodItem {
    food: String,
    #[serde(rename = "type")]
    category: String,
    oxalate_mg: f64,
    serving_size: Option<String>,
    oxalate_level: Option<OxalateLevel>,
}

impl RawFoodItem {
    pub(crate) fn into_item(self) -> FoodItem {
        FoodItem {
            oxalate_level: self
                .oxalate_level
                .unwrap_or_else(|| OxalateLevel::from_mg(self.oxalate_mg)),
            food: self.food,
            category: self.category,
            oxalate_mg: self.oxalate_mg,
            serving_size: self
                .serving_size
                .unwrap_or_else(|| DEFAULT_SERVING_SIZE.to_string()),
        }
    }
}
