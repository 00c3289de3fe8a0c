use std::sync::Arc;

use axum::extract::FromRef;
use provider::MovieProvider;
use storage::Database;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    pub fn new(db: Database, provider: Arc<dyn MovieProvider>) -> Self {
        Self { db, provider }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<dyn MovieProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.provider.clone()
    }
}
