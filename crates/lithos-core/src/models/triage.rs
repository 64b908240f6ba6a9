use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Presenting symptoms for an acute stone episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Symptoms {
    pub uncontrolled_pain: bool,
    pub vomiting: bool,
    pub fevers: bool,
    /// On imaging.
    pub hydronephrosis: bool,
    /// Acute kidney injury.
    pub aki: bool,
    pub anuria: bool,
}

/// Known stone size. Unrecognised categories decode as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum StoneSize {
    #[serde(rename = "< 5mm")]
    Under5mm,
    #[serde(rename = "5-10mm")]
    From5To10mm,
    #[serde(rename = "> 10mm")]
    Over10mm,
    #[default]
    Unknown,
}

impl StoneSize {
    pub fn label(self) -> &'static str {
        match self {
            StoneSize::Under5mm => "< 5mm",
            StoneSize::From5To10mm => "5-10mm",
            StoneSize::Over10mm => "> 10mm",
            StoneSize::Unknown => "Unknown",
        }
    }
}

impl From<&str> for StoneSize {
    fn from(label: &str) -> Self {
        match label {
            "< 5mm" => StoneSize::Under5mm,
            "5-10mm" => StoneSize::From5To10mm,
            "> 10mm" => StoneSize::Over10mm,
            _ => StoneSize::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for StoneSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(StoneSize::from(label.as_str()))
    }
}

impl fmt::Display for StoneSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UrgencyLevel {
    Routine,
    Moderate,
    Urgent,
}

/// Admission / urgency decision for an acute episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcuteGuidance {
    pub admission_needed: bool,
    pub urgency_level: UrgencyLevel,
    pub recommendations: Vec<String>,
}
