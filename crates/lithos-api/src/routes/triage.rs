use axum::Json;
use serde::Deserialize;

use lithos_core::models::triage::{AcuteGuidance, StoneSize, Symptoms};
use lithos_rules::triage::triage;

#[derive(Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    symptoms: Symptoms,
    #[serde(default)]
    stone_size: StoneSize,
}

pub async fn triage_episode(Json(request): Json<TriageRequest>) -> Json<AcuteGuidance> {
    Json(triage(&request.symptoms, request.stone_size))
}
