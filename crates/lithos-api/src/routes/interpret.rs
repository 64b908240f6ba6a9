use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use lithos_core::models::finding::FindingNote;
use lithos_core::models::patient::PatientProfile;
use lithos_rules::interpret::interpret_record;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct InterpretRequest {
    /// Raw urine record, checked for missing analytes before decoding.
    urine: Value,
    #[serde(default)]
    patient: Option<PatientProfile>,
}

pub async fn interpret_urine(
    Json(request): Json<InterpretRequest>,
) -> Result<Json<Vec<FindingNote>>, ApiError> {
    let findings = interpret_record(&request.urine, request.patient.as_ref())?;
    Ok(Json(findings.notes()))
}
