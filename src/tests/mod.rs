//! Tests for the Animal Registry.
//!
//! - **repository_tests**: SQLite store queries and mutations
//! - **service_tests**: service behavior against an in-memory store
//! - **api_tests**: the `/animals` routes end to end
//! - **health_api_tests**: health, readiness, version and metrics endpoints
//! - **error_tests**: error mapping and response bodies
//! - **config_tests**: configuration defaults and validation
//! - **db_tests**: schema bootstrap
//!
//! ```bash
//! cargo test
//! cargo test api_tests
//! ```

pub mod api_tests;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::repository::{AnimalStore, StorageResult};
use crate::types::Animal;

/// A single-connection in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::init_db(&pool).await.unwrap();
    pool
}

pub(crate) fn animal(id: i32, name: &str, species: &str) -> Animal {
    Animal {
        id,
        name: name.to_string(),
        scientific_name: format!("Panthera {}", species.to_lowercase()),
        species: species.to_string(),
        habitat: "Asia".to_string(),
        description: format!("{} description", name),
    }
}

/// In-memory store that counts writes, for service-level tests.
#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: Mutex<BTreeMap<i32, Animal>>,
    pub upserts: AtomicUsize,
}

impl MemoryStore {
    pub fn with(animals: impl IntoIterator<Item = Animal>) -> Self {
        let store = Self::default();
        store.rows.lock().unwrap().extend(animals.into_iter().map(|a| (a.id, a)));
        store
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnimalStore for MemoryStore {
    async fn list_all(&self) -> StorageResult<Vec<Animal>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> StorageResult<Option<Animal>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_species(&self, species: &str) -> StorageResult<Vec<Animal>> {
        Ok(self.rows.lock().unwrap().values().filter(|a| a.species == species).cloned().collect())
    }

    async fn list_by_name_containing(&self, keyword: &str) -> StorageResult<Vec<Animal>> {
        Ok(self.rows.lock().unwrap().values().filter(|a| a.name.contains(keyword)).cloned().collect())
    }

    async fn upsert(&self, animal: &Animal) -> StorageResult<()> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(animal.id, animal.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> StorageResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
