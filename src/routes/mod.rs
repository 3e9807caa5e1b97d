//! HTTP route handlers for the Animal Registry API.
//!
//! - `animals`: record CRUD and search endpoints
//! - `health`: liveness, readiness, version and metrics endpoints

pub mod animals;
pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// All routes, bound to `state`, without transport layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/animals/all", get(animals::list_animals))
        .route("/animals/species_search", get(animals::search_by_species))
        .route("/animals/name_search", get(animals::search_by_name))
        .route("/animals/new", post(animals::create_animal))
        .route("/animals/update/{id}", put(animals::update_animal))
        .route("/animals/delete/{id}", delete(animals::delete_animal))
        .route("/animals/{id}", get(animals::get_animal))
        .with_state(state)
}
