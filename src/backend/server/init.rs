/**
 * Server Initialization
 *
 * Builds the application from a loaded configuration: store handle,
 * mailer, shared state, and the configured router.
 *
 * Startup is resilient to an unreachable store: the ping failure is
 * logged and the server starts anyway, since the driver retries
 * per-operation once the deployment comes up.
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::contact::Mailer;
use crate::backend::error::BackendError;
use crate::backend::routes::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::Store;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router, BackendError> {
    tracing::info!("initializing portfolio backend");

    let store = Store::connect(&config.mongodb_uri, &config.database_name).await?;
    match store.ping().await {
        Ok(()) => tracing::info!("connected to document store"),
        Err(err) => {
            tracing::warn!("document store unreachable at startup: {err}");
        }
    }

    let mailer = Mailer::from_config(&config.smtp)?;

    let state = AppState {
        store,
        mailer,
        config: Arc::new(config),
    };

    create_router(state)
}
