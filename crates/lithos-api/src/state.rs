use std::sync::Arc;

use lithos_oxalate::table::OxalateTable;

/// Shared application state, injected into route handlers via Axum state.
/// The engine itself is stateless; only the food table is shared.
#[derive(Clone)]
pub struct AppState {
    pub oxalate: Arc<OxalateTable>,
}
