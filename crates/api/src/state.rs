//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::db::{EntityStore, seed};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The entity store sits behind
/// one coarse lock: handlers hold the write guard for the whole of a
/// read-modify-write, so id assignment and relation checks cannot interleave.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: RwLock<EntityStore>,
}

impl AppState {
    /// Create application state around an existing store.
    #[must_use]
    pub fn new(config: ApiConfig, store: EntityStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
            }),
        }
    }

    /// Create application state, seeding the store if the config asks for it.
    #[must_use]
    pub fn from_config(config: ApiConfig) -> Self {
        let mut store = EntityStore::new();
        if config.seed_data {
            seed::seed(&mut store, Utc::now());
        }
        Self::new(config, store)
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the locked entity store.
    #[must_use]
    pub fn store(&self) -> &RwLock<EntityStore> {
        &self.inner.store
    }
}
