use std::env;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use lithos_api::router;
use lithos_api::state::AppState;
use lithos_oxalate::error::OxalateError;
use lithos_oxalate::table::OxalateTable;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind_addr = env::var("LITHOS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let oxalate_data =
        env::var("LITHOS_OXALATE_DATA").unwrap_or_else(|_| "oxalate_en.json".to_string());

    // The finder is optional; serve an empty table if the data file is absent.
    let oxalate = match OxalateTable::from_path(Path::new(&oxalate_data)) {
        Ok(table) => table,
        Err(e @ OxalateError::Read { .. }) => {
            tracing::warn!(error = %e, "oxalate data unavailable, serving empty table");
            OxalateTable::default()
        }
        Err(e) => return Err(e.into()),
    };

    let app = router(AppState {
        oxalate: Arc::new(oxalate),
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "lithos api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
