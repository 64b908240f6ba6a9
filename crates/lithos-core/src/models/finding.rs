use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifiers of urine interpretation findings. A key is absent from an
/// interpretation when the analyte is within normal limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindingKey {
    UrineVolume,
    UrinePh,
    UrineCalcium,
    UrineOxalate,
    UrineCitrate,
    UrineUricAcid,
    UrineSodium,
    UrineSulfate,
    UrineAmmonium,
    UrineCystine,
    SupersaturationTargets,
}

impl FindingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            FindingKey::UrineVolume => "urine_volume",
            FindingKey::UrinePh => "urine_ph",
            FindingKey::UrineCalcium => "urine_calcium",
            FindingKey::UrineOxalate => "urine_oxalate",
            FindingKey::UrineCitrate => "urine_citrate",
            FindingKey::UrineUricAcid => "urine_uric_acid",
            FindingKey::UrineSodium => "urine_sodium",
            FindingKey::UrineSulfate => "urine_sulfate",
            FindingKey::UrineAmmonium => "urine_ammonium",
            FindingKey::UrineCystine => "urine_cystine",
            FindingKey::SupersaturationTargets => "supersaturation_targets",
        }
    }
}

impl fmt::Display for FindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered finding, as shown to the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingNote {
    pub key: FindingKey,
    pub message: String,
}
