use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;

/// Wire keys every 24-hour urine record must carry. `cystine_mg` is optional
/// and treated as zero when absent.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "volume_L",
    "ph",
    "calcium_mg",
    "oxalate_mg",
    "phosphorus_mg",
    "uric_acid_mg",
    "sodium_mEq",
    "potassium_mEq",
    "magnesium_mg",
    "sulfate_mmol",
    "ammonium_mmol",
    "citrate_mg",
];

/// 24-hour urine chemistry. All solutes are daily excretion in the unit
/// carried by the field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UrineProfile {
    #[serde(rename = "volume_L")]
    pub volume_l: f64,
    pub ph: f64,
    pub calcium_mg: f64,
    pub oxalate_mg: f64,
    pub phosphorus_mg: f64,
    pub uric_acid_mg: f64,
    #[serde(rename = "sodium_mEq")]
    pub sodium_meq: f64,
    #[serde(rename = "potassium_mEq")]
    pub potassium_meq: f64,
    pub magnesium_mg: f64,
    pub sulfate_mmol: f64,
    pub ammonium_mmol: f64,
    pub citrate_mg: f64,
    /// Not always measured; absent or null reads as zero.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub cystine_mg: f64,
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl UrineProfile {
    /// Decode a urine record, failing with [`CoreError::MissingField`] naming
    /// the first required analyte that is absent or null.
    pub fn from_value(record: &Value) -> Result<Self, CoreError> {
        super::require_fields(record, "urine profile", &REQUIRED_FIELDS)?;
        Ok(Self::deserialize(record)?)
    }
}
