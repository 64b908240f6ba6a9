//! 24-hour urine interpretation.
//!
//! Each analyte is compared against a fixed reference threshold. Rules read
//! the raw profile, except the sodium rule, which depends on whether
//! hypercalciuria was already found.

use serde_json::Value;

use lithos_core::models::finding::FindingKey;
use lithos_core::models::patient::{MedicalCondition, PatientProfile};
use lithos_core::models::urine::UrineProfile;

use crate::error::RulesError;
use crate::findings::{Finding, FindingsMap};

/// L/d. Target volume for reducing recurrence risk.
pub const VOLUME_GOAL_L: f64 = 2.5;
pub const ACIDIC_PH_BELOW: f64 = 6.0;
pub const VERY_ALKALINE_PH_ABOVE: f64 = 7.0;
/// mg/d
pub const CALCIUM_MAX_MG: f64 = 150.0;
/// mg/d
pub const OXALATE_MAX_MG: f64 = 40.0;
/// mg/d. Above this, primary hyperoxaluria is suggested.
pub const OXALATE_PRIMARY_HYPEROXALURIA_MG: f64 = 80.0;
/// mg/d
pub const CITRATE_MIN_MG: f64 = 400.0;
/// mg/d
pub const URIC_ACID_MAX_MG: f64 = 750.0;
/// mEq/d, only evaluated alongside hypercalciuria.
pub const SODIUM_MAX_MEQ: f64 = 100.0;
/// mmol/d
pub const SULFATE_MAX_MMOL: f64 = 30.0;
/// mmol/d
pub const AMMONIUM_MAX_MMOL: f64 = 45.0;
/// mg/d
pub const CYSTINE_MAX_MG: f64 = 30.0;
/// mg/d. Above this, cystinuria is highly likely.
pub const CYSTINURIA_MG: f64 = 400.0;

/// Interpret a 24-hour urine profile.
///
/// `patient` is consulted only for a Renal Tubular Acidosis diagnosis, which
/// changes how a non-acidic pH is read. The supersaturation note is always
/// present, so the result is never empty.
pub fn interpret(urine: &UrineProfile, patient: Option<&PatientProfile>) -> FindingsMap {
    let mut findings = FindingsMap::new();

    if urine.volume_l < VOLUME_GOAL_L {
        findings.insert(Finding::LowVolume {
            volume_l: urine.volume_l,
        });
    }

    if let Some(finding) = interpret_ph(urine.ph, patient) {
        findings.insert(finding);
    }

    if urine.calcium_mg > CALCIUM_MAX_MG {
        findings.insert(Finding::Hypercalciuria {
            calcium_mg: urine.calcium_mg,
        });
    }

    if urine.oxalate_mg > OXALATE_MAX_MG {
        findings.insert(Finding::ElevatedOxalate {
            oxalate_mg: urine.oxalate_mg,
            primary_hyperoxaluria: urine.oxalate_mg > OXALATE_PRIMARY_HYPEROXALURIA_MG,
        });
    }

    if urine.citrate_mg < CITRATE_MIN_MG {
        findings.insert(Finding::Hypocitraturia {
            citrate_mg: urine.citrate_mg,
        });
    }

    if urine.uric_acid_mg > URIC_ACID_MAX_MG {
        findings.insert(Finding::Hyperuricosuria {
            uric_acid_mg: urine.uric_acid_mg,
        });
    }

    // Keyed on the finding, not the raw calcium value.
    if findings.contains(FindingKey::UrineCalcium) && urine.sodium_meq > SODIUM_MAX_MEQ {
        findings.insert(Finding::HighSodium {
            sodium_meq: urine.sodium_meq,
        });
    }

    if urine.sulfate_mmol > SULFATE_MAX_MMOL {
        findings.insert(Finding::HighSulfate {
            sulfate_mmol: urine.sulfate_mmol,
        });
    }

    if urine.ammonium_mmol > AMMONIUM_MAX_MMOL {
        findings.insert(Finding::HighAmmonium {
            ammonium_mmol: urine.ammonium_mmol,
        });
    }

    if urine.cystine_mg > CYSTINE_MAX_MG {
        findings.insert(Finding::ElevatedCystine {
            cystine_mg: urine.cystine_mg,
            cystinuria: urine.cystine_mg > CYSTINURIA_MG,
        });
    }

    findings.insert(Finding::SupersaturationTargets);

    tracing::debug!(
        findings = findings.len(),
        keys = ?findings.keys().collect::<Vec<_>>(),
        "interpreted urine profile"
    );

    findings
}

/// Acidic, alkaline-with-RTA and very-alkaline are mutually exclusive; the
/// RTA reading wins over the very-alkaline one.
fn interpret_ph(ph: f64, patient: Option<&PatientProfile>) -> Option<Finding> {
    let has_rta = patient.is_some_and(|p| p.has_condition(&MedicalCondition::RenalTubularAcidosis));

    if ph < ACIDIC_PH_BELOW {
        Some(Finding::AcidicPh { ph })
    } else if has_rta {
        Some(Finding::AlkalinePhWithRta { ph })
    } else if ph > VERY_ALKALINE_PH_ABOVE {
        Some(Finding::VeryAlkalinePh { ph })
    } else {
        None
    }
}

/// Decode a raw urine record and interpret it. Fails before producing any
/// findings if a required analyte is missing.
pub fn interpret_record(
    record: &Value,
    patient: Option<&PatientProfile>,
) -> Result<FindingsMap, RulesError> {
    let urine = UrineProfile::from_value(record)?;
    Ok(interpret(&urine, patient))
}
