use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;

pub const REQUIRED_FIELDS: [&str; 5] = [
    "calcium_mg_dL",
    "intact_pth_pg_mL",
    "bicarbonate_mEq_L",
    "potassium_mEq_L",
    "creatinine_mg_dL",
];

/// Serum labs drawn alongside the urine collection. Only refines the
/// management plan; never used during urine interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SerumLabs {
    #[serde(rename = "calcium_mg_dL")]
    pub calcium_mg_dl: f64,
    #[serde(rename = "intact_pth_pg_mL")]
    pub intact_pth_pg_ml: f64,
    #[serde(rename = "bicarbonate_mEq_L")]
    pub bicarbonate_meq_l: f64,
    #[serde(rename = "potassium_mEq_L")]
    pub potassium_meq_l: f64,
    #[serde(rename = "creatinine_mg_dL")]
    pub creatinine_mg_dl: f64,
}

impl SerumLabs {
    pub fn from_value(record: &Value) -> Result<Self, CoreError> {
        super::require_fields(record, "serum labs", &REQUIRED_FIELDS)?;
        Ok(Self::deserialize(record)?)
    }
}
