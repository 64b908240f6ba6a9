//! lithos-api
//!
//! HTTP adapter over the Lithos engine and the oxalate finder.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with all routes and layers attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Stone-type protocols (public reference data)
        .route("/stone-types", get(routes::stone_types::list_stone_types))
        .route(
            "/stone-types/{id}",
            get(routes::stone_types::get_stone_type_detail),
        )
        // Engine
        .route("/interpret", post(routes::interpret::interpret_urine))
        .route("/plans", post(routes::plans::create_plan))
        .route("/triage", post(routes::triage::triage_episode))
        // Diet
        .route("/oxalate", get(routes::oxalate::search_foods))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
