use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use lithos_rules::error::RulesError;
use lithos_rules::{all_protocols, get_protocol};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct StoneTypeSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct StoneTypeDetail {
    id: String,
    name: String,
    description: String,
}

pub async fn list_stone_types() -> Json<Vec<StoneTypeSummary>> {
    let protocols: Vec<StoneTypeSummary> = all_protocols()
        .iter()
        .map(|p| StoneTypeSummary {
            id: p.id().to_string(),
            name: p.name().to_string(),
        })
        .collect();
    Json(protocols)
}

pub async fn get_stone_type_detail(
    Path(id): Path<String>,
) -> Result<Json<StoneTypeDetail>, ApiError> {
    let protocol = get_protocol(&id).ok_or(RulesError::UnknownProtocol(id))?;

    Ok(Json(StoneTypeDetail {
        id: protocol.id().to_string(),
        name: protocol.name().to_string(),
        description: protocol.description().to_string(),
    }))
}
