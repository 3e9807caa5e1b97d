use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    middleware::from_fn_with_state,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::setup_test_db;
use crate::config::AppConfig;
use crate::routes;
use crate::state::AppState;

async fn setup_test_app() -> (Router, AppState) {
    let pool = setup_test_db().await;
    let state = AppState::new(pool, AppConfig::default());
    let app = routes::router(state.clone()).layer(from_fn_with_state(
        state.config.clone(),
        crate::middleware::security_headers::security_headers_middleware,
    ));
    (app, state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn bengal_tiger() -> Value {
    json!({
        "id": 4,
        "name": "Bengal tiger",
        "scientificName": "Panthera tigris tigris",
        "species": "Tigris",
        "habitat": "Asia",
        "description": "Largest living cat species."
    })
}

fn has_id(list: &Value, id: i64) -> bool {
    list.as_array().unwrap().iter().any(|a| a["id"] == id)
}

#[tokio::test]
async fn test_full_lifecycle() {
    let (app, _) = setup_test_app().await;

    let (status, list) = send(&app, Method::POST, "/animals/new", Some(bengal_tiger())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(has_id(&list, 4));

    let (status, all) = send(&app, Method::GET, "/animals/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(has_id(&all, 4));

    let (status, updated) =
        send(&app, Method::PUT, "/animals/update/4", Some(json!({ "name": "Siberian tiger" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Siberian tiger");
    assert_eq!(updated["species"], "Tigris");

    let (status, fetched) = send(&app, Method::GET, "/animals/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Siberian tiger");
    assert_eq!(fetched["species"], "Tigris");
    assert_eq!(fetched["scientificName"], "Panthera tigris tigris");

    let (status, remaining) = send(&app, Method::DELETE, "/animals/delete/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!has_id(&remaining, 4));

    let (status, body) = send(&app, Method::GET, "/animals/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_accepts_animal_id_key_and_missing_text_fields() {
    let (app, _) = setup_test_app().await;

    let (status, _) =
        send(&app, Method::POST, "/animals/new", Some(json!({ "animalId": 9, "name": "Ocelot" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send(&app, Method::GET, "/animals/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Ocelot");
    assert_eq!(fetched["species"], "");
    assert_eq!(fetched["habitat"], "");
}

#[tokio::test]
async fn test_update_preserves_identity_fields() {
    let (app, _) = setup_test_app().await;
    send(&app, Method::POST, "/animals/new", Some(bengal_tiger())).await;

    let patch = json!({
        "id": 90,
        "name": "Siberian tiger",
        "scientificName": "Panthera tigris altaica",
        "species": "Other",
        "habitat": "Tundra",
        "description": "description"
    });
    let (status, updated) = send(&app, Method::PUT, "/animals/update/4", Some(patch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 4);
    assert_eq!(updated["species"], "Tigris");
    assert_eq!(updated["habitat"], "Asia");
    assert_eq!(updated["scientificName"], "Panthera tigris altaica");

    let (status, _) = send(&app, Method::GET, "/animals/90", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_returns_404() {
    let (app, state) = setup_test_app().await;

    let (status, body) =
        send(&app, Method::PUT, "/animals/update/77", Some(json!({ "name": "Ghost" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(state.animals.get_by_id(77).await.unwrap(), None);
    assert_eq!(state.metrics.get_snapshot().not_found, 1);
}

#[tokio::test]
async fn test_delete_missing_is_ok() {
    let (app, _) = setup_test_app().await;

    let (status, list) = send(&app, Method::DELETE, "/animals/delete/12345", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_species_search() {
    let (app, _) = setup_test_app().await;
    send(&app, Method::POST, "/animals/new", Some(bengal_tiger())).await;
    send(&app, Method::POST, "/animals/new", Some(json!({ "id": 5, "name": "Snow leopard", "species": "Uncia" })))
        .await;

    let (status, found) = send(&app, Method::GET, "/animals/species_search?species=Tigris", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert!(has_id(&found, 4));

    let (_, partial) = send(&app, Method::GET, "/animals/species_search?species=Tig", None).await;
    assert_eq!(partial, json!([]));

    // Missing parameter defaults to "" which only matches empty species
    let (status, empty) = send(&app, Method::GET, "/animals/species_search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn test_name_search() {
    let (app, _) = setup_test_app().await;
    send(&app, Method::POST, "/animals/new", Some(bengal_tiger())).await;
    send(&app, Method::POST, "/animals/new", Some(json!({ "id": 5, "name": "Snow leopard", "species": "Uncia" })))
        .await;

    let (status, found) = send(&app, Method::GET, "/animals/name_search?name=tiger", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert!(has_id(&found, 4));

    let (_, injected) =
        send(&app, Method::GET, "/animals/name_search?name=%27%20OR%201%3D1%20--", None).await;
    assert_eq!(injected, json!([]));

    // Missing parameter defaults to "" which matches every name
    let (_, all) = send(&app, Method::GET, "/animals/name_search", None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let (app, _) = setup_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/animals/new")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // id is required on create
    let (status, _) = send(&app, Method::POST, "/animals/new", Some(json!({ "name": "No id" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, Method::GET, "/animals/all", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let (app, _) = setup_test_app().await;

    let (status, body) = send(&app, Method::GET, "/animals/tiger", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_json_responses_are_not_cached() {
    let (app, _) = setup_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/animals/all").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get("cache-control").unwrap(), "no-store");
    assert!(headers.contains_key("x-content-type-options"));
    assert!(headers.contains_key("referrer-policy"));
}
