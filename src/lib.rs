//! # Animal Registry
//!
//! A small REST service for animal records backed by a single SQLite table.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON (de)serialization
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (embedded TOML, local file, environment)
//! - [`db`]: pool creation and schema bootstrap
//! - [`repository`]: the [`repository::AnimalStore`] trait and its SQLite implementation
//! - [`service`]: record service, including the update overlay
//! - [`routes`]: HTTP handlers
//! - [`error`]: HTTP error responses
//! - [`metrics`]: operation counters
//! - [`middleware`]: security headers
//! - [`state`]: shared application state
//! - [`types`]: the `Animal` record and request DTOs

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
