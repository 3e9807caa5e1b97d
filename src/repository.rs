//! Data access for the `animals` table.
//!
//! [`AnimalStore`] is the seam between the service layer and the database.
//! [`SqliteAnimalStore`] is the production implementation; every statement
//! binds its inputs as parameters.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::types::Animal;

/// Failure raised by the storage layer. Absence of a row is never an error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database could not be reached (pool timeout, closed pool, I/O).
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    /// The statement itself failed (constraint violation, malformed row, ...).
    #[error("storage query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StorageError::Unavailable(err)
            }
            _ => StorageError::Query(err),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Every row, ordered by id.
    async fn list_all(&self) -> StorageResult<Vec<Animal>>;

    async fn get_by_id(&self, id: i32) -> StorageResult<Option<Animal>>;

    /// Exact match on `species`. An empty string only matches empty species.
    async fn list_by_species(&self, species: &str) -> StorageResult<Vec<Animal>>;

    /// Substring match on `name` using the store's `LIKE` semantics.
    async fn list_by_name_containing(&self, keyword: &str) -> StorageResult<Vec<Animal>>;

    /// Inserts the record, or replaces every column of the row with the same id.
    async fn upsert(&self, animal: &Animal) -> StorageResult<()>;

    /// Removes the row if present; a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> StorageResult<()>;
}

const SELECT_COLUMNS: &str = "SELECT id, name, scientific_name, species, habitat, description FROM animals";

const LIKE_ESCAPE: char = '!';

pub(crate) fn escape_like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

#[derive(Clone)]
pub struct SqliteAnimalStore {
    pool: SqlitePool,
}

impl SqliteAnimalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalStore for SqliteAnimalStore {
    async fn list_all(&self) -> StorageResult<Vec<Animal>> {
        let rows = sqlx::query_as::<_, Animal>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> StorageResult<Option<Animal>> {
        let row = sqlx::query_as::<_, Animal>(&format!("{} WHERE id = ?1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_by_species(&self, species: &str) -> StorageResult<Vec<Animal>> {
        let rows = sqlx::query_as::<_, Animal>(&format!("{} WHERE species = ?1 ORDER BY id", SELECT_COLUMNS))
            .bind(species)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_by_name_containing(&self, keyword: &str) -> StorageResult<Vec<Animal>> {
        let pattern = format!("%{}%", escape_like_pattern(keyword));
        let sql = format!("{} WHERE name LIKE ?1 ESCAPE '{}' ORDER BY id", SELECT_COLUMNS, LIKE_ESCAPE);
        let rows = sqlx::query_as::<_, Animal>(&sql).bind(pattern).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn upsert(&self, animal: &Animal) -> StorageResult<()> {
        sqlx::query(
            r#"INSERT INTO animals (id, name, scientific_name, species, habitat, description)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)
               ON CONFLICT(id) DO UPDATE SET
                   name = excluded.name,
                   scientific_name = excluded.scientific_name,
                   species = excluded.species,
                   habitat = excluded.habitat,
                   description = excluded.description"#,
        )
        .bind(animal.id)
        .bind(&animal.name)
        .bind(&animal.scientific_name)
        .bind(&animal.species)
        .bind(&animal.habitat)
        .bind(&animal.description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> StorageResult<()> {
        sqlx::query("DELETE FROM animals WHERE id = ?1").bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
