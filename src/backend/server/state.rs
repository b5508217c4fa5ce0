/**
 * Application State
 *
 * The state bundle handlers receive through Axum's `State` extractor:
 * the document store, the notification mailer, and the loaded
 * configuration. Everything is constructed in `init::create_app` and
 * injected; nothing is process-global, so tests can build isolated
 * instances.
 *
 * The `FromRef` implementations let handlers extract just the part
 * they use instead of the whole bundle.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::contact::Mailer;
use crate::backend::server::config::AppConfig;
use crate::backend::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Document store handle
    pub store: Store,
    /// Notification email dispatcher
    pub mailer: Mailer,
    /// Runtime configuration
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Mailer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
