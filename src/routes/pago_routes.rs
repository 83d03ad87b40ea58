use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::pago_controller::PagoController;
use crate::dto::common::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::models::pago::{CreatePagoRequest, PagoResponse, UpdatePagoRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pago_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pago))
        .route("/", get(list_pagos))
        .route("/:id", get(get_pago))
        .route("/:id", put(update_pago))
        .route("/:id", delete(delete_pago))
}

#[derive(Debug, Deserialize)]
struct PagoListParams {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
    contrato_id: Option<Uuid>,
}

fn default_limit() -> i64 {
    100
}

async fn create_pago(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreatePagoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PagoResponse>>), AppError> {
    let controller = PagoController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_pago(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PagoResponse>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_pagos(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PagoListParams>,
) -> Result<Json<Vec<PagoResponse>>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    let response = controller
        .list(params.skip, params.limit, params.contrato_id)
        .await?;
    Ok(Json(response))
}

async fn update_pago(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePagoRequest>,
) -> Result<Json<ApiResponse<PagoResponse>>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_pago(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PagoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
