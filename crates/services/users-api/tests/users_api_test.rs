//! End-to-end tests for the users endpoints.
//!
//! These tests drive the full router against the in-memory store, so no
//! network listener is needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain::User;
use users_api_lib::config::UsersApiConfig;
use users_api_lib::repository::InMemoryUserStore;
use users_api_lib::routes::create_router;
use users_api_lib::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(users: Vec<User>) -> Router {
    let store = InMemoryUserStore::with_users(users).expect("unique ids");
    create_router(AppState::new(Arc::new(store), UsersApiConfig::default()))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ninjas() -> Vec<User> {
    vec![
        User::new(1, "Naruto", 10),
        User::new(2, "Sasuke", 18),
        User::new(3, "Kakashi", 50),
    ]
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_list_users() {
    let app = app_with(ninjas());

    let (status, body) = call(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        json!([
            { "id": 1, "name": "Naruto", "age": 10, "isOfAge": false },
            { "id": 2, "name": "Sasuke", "age": 18, "isOfAge": true },
            { "id": 3, "name": "Kakashi", "age": 50, "isOfAge": true }
        ])
    );
}

#[tokio::test]
async fn test_list_users_empty_store() {
    let app = app_with(Vec::new());

    let (status, body) = call(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app_with(Vec::new());

    let (status, body) = call(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "id": 2, "name": "gabriel", "age": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": true, "data": "Usuário criado com sucesso" }));

    let (status, body) = call(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "id": 2, "name": "gabriel", "age": 20, "isOfAge": true }
        })
    );
}

#[tokio::test]
async fn test_create_duplicate_id_fails() {
    let app = app_with(ninjas());

    let (status, body) = call(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "id": 1, "name": "Boruto", "age": 12 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "data": "Falha ao criar o usuário" }));
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = app_with(ninjas());

    let (status, body) = call(&app, Method::GET, "/users/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "data": "Usuário não encontrado" }));
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let app = app_with(ninjas());

    let (status, body) = call(&app, Method::DELETE, "/users/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": "Usuário excluído com sucesso" }));

    let (status, body) = call(&app, Method::DELETE, "/users/2", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "data": "Falha ao remover o usuário" }));

    let (_, body) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_malformed_id_on_delete() {
    let app = app_with(ninjas());

    let (status, body) = call(&app, Method::DELETE, "/users/not-a-number", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "data": "Identificador de usuário inválido" }));
}

#[tokio::test]
async fn test_create_with_missing_fields() {
    let app = app_with(Vec::new());

    let (status, body) = call(&app, Method::POST, "/users", Some(json!({ "name": "Shikamaru" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "data": "Dados do usuário inválidos" }));

    let (_, body) = call(&app, Method::GET, "/users", None).await;
    assert_eq!(body["data"], json!([]));
}

// =============================================================================
// Ambient routes
// =============================================================================

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = app_with(ninjas());

    let (status, body) = call(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "service": "users-api", "users": 3 }));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app_with(Vec::new());

    let (status, body) = call(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
}
