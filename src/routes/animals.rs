//! `/animals` endpoints.
//!
//! Collection-returning mutations (create, delete) answer with the full list
//! after the write, matching what existing clients expect.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    types::{Animal, AnimalPatch, NameQuery, SpeciesQuery},
};

/// GET /animals/all
pub async fn list_animals(State(state): State<AppState>) -> AppResult<Json<Vec<Animal>>> {
    state.metrics.inc_listed();
    Ok(Json(state.animals.get_all().await?))
}

/// GET /animals/{id}
///
/// Responds with 404 when no record has this id.
pub async fn get_animal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Animal>> {
    let Path(id) = id?;
    state.metrics.inc_fetched();
    match state.animals.get_by_id(id).await?.ok_or_not_found(&format!("Animal {}", id)) {
        Ok(animal) => Ok(Json(animal)),
        Err(e) => {
            state.metrics.inc_not_found();
            Err(e)
        }
    }
}

/// GET /animals/species_search?species=
pub async fn search_by_species(
    State(state): State<AppState>,
    query: Result<Query<SpeciesQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Animal>>> {
    let Query(query) = query?;
    state.metrics.inc_searches();
    Ok(Json(state.animals.get_by_species(&query.species).await?))
}

/// GET /animals/name_search?name=
pub async fn search_by_name(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Animal>>> {
    let Query(query) = query?;
    state.metrics.inc_searches();
    Ok(Json(state.animals.get_by_name(&query.name).await?))
}

/// POST /animals/new
pub async fn create_animal(
    State(state): State<AppState>,
    payload: Result<Json<Animal>, JsonRejection>,
) -> AppResult<Json<Vec<Animal>>> {
    let Json(animal) = payload?;
    state.animals.create(&animal).await?;
    state.metrics.inc_created();
    Ok(Json(state.animals.get_all().await?))
}

/// PUT /animals/update/{id}
pub async fn update_animal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AnimalPatch>, JsonRejection>,
) -> AppResult<Json<Animal>> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    match state.animals.update(id, patch).await {
        Ok(updated) => {
            state.metrics.inc_updated();
            Ok(Json(updated))
        }
        Err(e) => {
            let err = AppError::from(e);
            if matches!(err, AppError::NotFound(_)) {
                state.metrics.inc_not_found();
            }
            Err(err)
        }
    }
}

/// DELETE /animals/delete/{id}
pub async fn delete_animal(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<Animal>>> {
    let Path(id) = id?;
    state.animals.delete(id).await?;
    state.metrics.inc_deleted();
    Ok(Json(state.animals.get_all().await?))
}
