use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use lithos_oxalate::food::FoodItem;
use lithos_oxalate::table::{SortDirection, SortField};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct OxalateQuery {
    #[serde(default)]
    q: String,
    sort: Option<String>,
    direction: Option<String>,
}

pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<OxalateQuery>,
) -> Json<Vec<FoodItem>> {
    let sort = query
        .sort
        .as_deref()
        .map(SortField::parse_or_default)
        .unwrap_or_default();
    let direction = query
        .direction
        .as_deref()
        .map(SortDirection::parse_or_desc)
        .unwrap_or_default();

    Json(state.oxalate.search(&query.q, sort, direction))
}
