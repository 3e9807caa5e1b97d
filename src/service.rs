use std::sync::Arc;

use crate::repository::{AnimalStore, StorageError};
use crate::types::{Animal, AnimalPatch};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("animal {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates store calls for the HTTP layer.
///
/// The store is injected at construction; cloning shares the same store.
#[derive(Clone)]
pub struct AnimalService {
    store: Arc<dyn AnimalStore>,
}

impl AnimalService {
    pub fn new(store: Arc<dyn AnimalStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Animal>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<Animal>> {
        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn get_by_species(&self, species: &str) -> ServiceResult<Vec<Animal>> {
        Ok(self.store.list_by_species(species).await?)
    }

    pub async fn get_by_name(&self, keyword: &str) -> ServiceResult<Vec<Animal>> {
        Ok(self.store.list_by_name_containing(keyword).await?)
    }

    /// Stores a new record. An existing record with the same id is replaced.
    pub async fn create(&self, animal: &Animal) -> ServiceResult<()> {
        self.store.upsert(animal).await?;
        tracing::info!(animal_id = animal.id, species = %animal.species, "Animal created");
        Ok(())
    }

    /// Overlays `name`, `scientificName` and `description` onto the stored record.
    ///
    /// Fails with [`ServiceError::NotFound`] without writing when `id` is absent.
    pub async fn update(&self, id: i32, patch: AnimalPatch) -> ServiceResult<Animal> {
        let Some(mut existing) = self.store.get_by_id(id).await? else {
            tracing::warn!(animal_id = id, "Update for unknown animal");
            return Err(ServiceError::NotFound(id));
        };
        patch.apply_to(&mut existing);
        self.store.upsert(&existing).await?;
        tracing::info!(animal_id = id, "Animal updated");
        Ok(existing)
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.store.delete_by_id(id).await?;
        tracing::info!(animal_id = id, "Animal deleted");
        Ok(())
    }
}
