use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::repository::{AnimalStore, SqliteAnimalStore};
use crate::service::AnimalService;

/// The shared application state.
///
/// Cloned into every handler by Axum. Holds no mutable data of its own;
/// all records live in the database.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool, used directly by the readiness probe.
    pub db: sqlx::SqlitePool,
    /// The record service, wired to its store at construction.
    pub animals: AnimalService,
    pub config: Arc<AppConfig>,
    pub metrics: Metrics,
}

impl AppState {
    /// Builds the state with a [`SqliteAnimalStore`] over `db`.
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        let store = Arc::new(SqliteAnimalStore::new(db.clone()));
        Self::with_store(db, store, config)
    }

    /// Builds the state around an explicit store implementation.
    pub fn with_store(db: sqlx::SqlitePool, store: Arc<dyn AnimalStore>, config: AppConfig) -> Self {
        Self { db, animals: AnimalService::new(store), config: Arc::new(config), metrics: Metrics::new() }
    }
}
