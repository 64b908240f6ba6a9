use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Patient profile and medical history, as captured at intake.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    pub age: u32,
    pub gender: Gender,
    pub num_prior_stones: u32,
    pub first_stone_age: Option<u32>,
    #[serde(default)]
    pub family_history: bool,
    /// kg/m²
    pub bmi: f64,
    #[serde(default)]
    #[ts(type = "Array<string>")]
    pub medical_conditions: Vec<MedicalCondition>,
    #[serde(default)]
    #[ts(type = "Array<string>")]
    pub medications: Vec<Medication>,
    /// Target daily fluid intake in litres.
    #[serde(rename = "fluid_intake_L")]
    pub fluid_intake_l: f64,
}

impl PatientProfile {
    pub fn has_condition(&self, condition: &MedicalCondition) -> bool {
        self.medical_conditions.contains(condition)
    }

    pub fn takes_any(&self, medications: &[Medication]) -> bool {
        self.medications.iter().any(|m| medications.contains(m))
    }
}

/// Associated medical conditions offered at intake.
///
/// Labels are matched exactly (case-sensitive). Anything outside the intake
/// vocabulary is kept verbatim in [`MedicalCondition::Other`] and never
/// triggers a condition-specific rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MedicalCondition {
    MetabolicSyndrome,
    Type2Diabetes,
    Osteoporosis,
    Malabsorption,
    RenalTubularAcidosis,
    SjogrensSyndrome,
    Gout,
    PrimaryHyperparathyroidism,
    PolycysticKidneyDisease,
    MedullarySpongeKidney,
    ChronicDiarrhea,
    UreaseProducingUti,
    Other(String),
}

impl MedicalCondition {
    pub const KNOWN: [MedicalCondition; 12] = [
        MedicalCondition::MetabolicSyndrome,
        MedicalCondition::Type2Diabetes,
        MedicalCondition::Osteoporosis,
        MedicalCondition::Malabsorption,
        MedicalCondition::RenalTubularAcidosis,
        MedicalCondition::SjogrensSyndrome,
        MedicalCondition::Gout,
        MedicalCondition::PrimaryHyperparathyroidism,
        MedicalCondition::PolycysticKidneyDisease,
        MedicalCondition::MedullarySpongeKidney,
        MedicalCondition::ChronicDiarrhea,
        MedicalCondition::UreaseProducingUti,
    ];

    pub fn label(&self) -> &str {
        match self {
            MedicalCondition::MetabolicSyndrome => "Metabolic Syndrome",
            MedicalCondition::Type2Diabetes => "Type 2 Diabetes",
            MedicalCondition::Osteoporosis => "Osteoporosis",
            MedicalCondition::Malabsorption => "Malabsorption (IBD, Bariatric Surgery, etc.)",
            MedicalCondition::RenalTubularAcidosis => "Renal Tubular Acidosis",
            MedicalCondition::SjogrensSyndrome => "Sjögren's Syndrome",
            MedicalCondition::Gout => "Gout",
            MedicalCondition::PrimaryHyperparathyroidism => "Primary Hyperparathyroidism",
            MedicalCondition::PolycysticKidneyDisease => "Polycystic Kidney Disease",
            MedicalCondition::MedullarySpongeKidney => "Medullary Sponge Kidney",
            MedicalCondition::ChronicDiarrhea => "chronic_diarrhea",
            MedicalCondition::UreaseProducingUti => "UTI with urease-producing bacteria",
            MedicalCondition::Other(label) => label,
        }
    }
}

impl From<&str> for MedicalCondition {
    fn from(label: &str) -> Self {
        MedicalCondition::KNOWN
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_else(|| MedicalCondition::Other(label.to_string()))
    }
}

impl From<String> for MedicalCondition {
    fn from(label: String) -> Self {
        MedicalCondition::from(label.as_str())
    }
}

impl From<MedicalCondition> for String {
    fn from(condition: MedicalCondition) -> Self {
        match condition {
            MedicalCondition::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for MedicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A current medication. Only drugs that some rule reacts to get a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Medication {
    Topiramate,
    Acetazolamide,
    Other(String),
}

impl Medication {
    pub fn name(&self) -> &str {
        match self {
            Medication::Topiramate => "Topiramate",
            Medication::Acetazolamide => "Acetazolamide",
            Medication::Other(name) => name,
        }
    }
}

impl From<&str> for Medication {
    fn from(name: &str) -> Self {
        match name {
            "Topiramate" => Medication::Topiramate,
            "Acetazolamide" => Medication::Acetazolamide,
            other => Medication::Other(other.to_string()),
        }
    }
}

impl From<String> for Medication {
    fn from(name: String) -> Self {
        Medication::from(name.as_str())
    }
}

impl From<Medication> for String {
    fn from(medication: Medication) -> Self {
        match medication {
            Medication::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a comma-separated medication entry ("Topiramate, Hydrochlorothiazide")
/// into trimmed, non-empty medications.
pub fn parse_medication_list(text: &str) -> Vec<Medication> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Medication::from)
        .collect()
}
