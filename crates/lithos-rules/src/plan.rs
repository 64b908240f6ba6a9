use serde_json::Value;

use lithos_core::models::patient::PatientProfile;
use lithos_core::models::plan::PlanRecord;
use lithos_core::models::serum::SerumLabs;
use lithos_core::models::stone::StoneType;

use crate::error::RulesError;
use crate::findings::FindingsMap;
use crate::interpret::interpret_record;
use crate::protocol_for;

/// Always the first recommendation, whatever the stone type.
pub const VOLUME_RECOMMENDATION: &str =
    "Increase urine volume to ~2.5 L/day. This is always helpful in lowering supersaturation.";

/// Everything a protocol may consult when building its recommendations.
pub struct PlanContext<'a> {
    pub findings: &'a FindingsMap,
    pub patient: &'a PatientProfile,
    pub serum: Option<&'a SerumLabs>,
}

/// Build the ordered management plan for a stone type.
///
/// The findings may be partial or empty; recommendations that depend on an
/// absent finding simply do not fire.
pub fn generate_plan(
    stone_type: StoneType,
    findings: &FindingsMap,
    patient: &PatientProfile,
    serum: Option<&SerumLabs>,
) -> Vec<String> {
    let mut plan = vec![VOLUME_RECOMMENDATION.to_string()];

    if let Some(protocol) = protocol_for(stone_type) {
        let context = PlanContext {
            findings,
            patient,
            serum,
        };
        plan.extend(protocol.recommendations(&context));
    }

    tracing::debug!(
        stone_type = %stone_type,
        recommendations = plan.len(),
        serum = serum.is_some(),
        "generated management plan"
    );

    plan
}

/// Interpret a raw urine record and build a plan record from it, as the
/// chronic-management workflow does. Serum labs, when given, must be complete.
pub fn build_plan_record(
    stone_type: StoneType,
    urine: &Value,
    patient: &PatientProfile,
    serum: Option<&Value>,
) -> Result<PlanRecord, RulesError> {
    let findings = interpret_record(urine, Some(patient))?;
    let serum = serum.map(SerumLabs::from_value).transpose()?;
    let recommendations = generate_plan(stone_type, &findings, patient, serum.as_ref());

    Ok(PlanRecord::new(stone_type, findings.notes(), recommendations))
}
