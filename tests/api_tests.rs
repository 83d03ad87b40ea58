//! Tests de la superficie HTTP sin base de datos.
//!
//! Se usa un router de prueba con handlers stub que replican la forma de
//! las rutas reales, para verificar enrutamiento, códigos de estado y
//! parsing de parámetros sin necesidad de PostgreSQL.

use axum::{
    body::Body,
    extract::{Path, Query},
    http::{Request, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct PaginacionParams {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    100
}

// Router de prueba con la misma forma que el de producción
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({"status": "ok", "service": "gestion_alquiler"}))
            }),
        )
        .route(
            "/auth/login",
            post(|| async { (StatusCode::UNAUTHORIZED, "Credenciales inválidas") }),
        )
        .route(
            "/Clientes",
            get(|Query(params): Query<PaginacionParams>| async move {
                Json(json!({"skip": params.skip, "limit": params.limit}))
            }),
        )
        .route(
            "/Clientes/:id",
            get(|Path(id): Path<Uuid>| async move { Json(json!({"id": id})) }),
        )
        .route(
            "/Usuarios/:id/cambiar-password",
            put(|Path(_id): Path<Uuid>| async { StatusCode::OK }),
        )
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "gestion_alquiler");
}

#[tokio::test]
async fn test_login_rechaza_credenciales_invalidas() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"username": "nadie", "password": "incorrecta"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_paginacion_por_defecto() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/Clientes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["skip"], 0);
    assert_eq!(body["limit"], 100);
}

#[tokio::test]
async fn test_paginacion_explicita() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/Clientes?skip=20&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["skip"], 20);
    assert_eq!(body["limit"], 10);
}

#[tokio::test]
async fn test_path_uuid_invalido_devuelve_400() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/Clientes/no-es-un-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ruta_desconocida_devuelve_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cambiar_password_enrutado() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/Usuarios/{}/cambiar-password", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
