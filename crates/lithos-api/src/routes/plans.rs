use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use lithos_core::models::patient::PatientProfile;
use lithos_core::models::plan::PlanRecord;
use lithos_core::models::stone::StoneType;
use lithos_rules::plan::build_plan_record;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct PlanRequest {
    stone_type: StoneType,
    urine: Value,
    patient: PatientProfile,
    #[serde(default)]
    serum: Option<Value>,
}

/// Interpret the urine record and build the chronic management plan.
pub async fn create_plan(Json(request): Json<PlanRequest>) -> Result<Json<PlanRecord>, ApiError> {
    let record = build_plan_record(
        request.stone_type,
        &request.urine,
        &request.patient,
        request.serum.as_ref(),
    )?;

    tracing::info!(
        plan_id = %record.id,
        stone_type = %record.stone_type,
        findings = record.findings.len(),
        recommendations = record.recommendations.len(),
        "plan_generated"
    );

    Ok(Json(record))
}
