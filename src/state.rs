//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::RegistrationStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Registration store (PostgreSQL or in-memory)
    pub store: Arc<dyn RegistrationStore>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn RegistrationStore>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, config }),
        }
    }

    /// Get a reference to the registration store
    pub fn store(&self) -> &dyn RegistrationStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
