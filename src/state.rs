//! Shared application state handed to every handler.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{db::DbPool, services::credentials::CredentialService};

/// Everything a request needs, built once in `main` and injected into the router.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(pool: DbPool, credentials: CredentialService) -> Self {
        Self {
            pool,
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<CredentialService> {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}
