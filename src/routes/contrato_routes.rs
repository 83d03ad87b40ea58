use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::contrato_controller::ContratoController;
use crate::dto::common::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::models::contrato::{ContratoResponse, CreateContratoRequest, UpdateContratoRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contrato_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_contrato))
        .route("/", get(list_contratos))
        .route("/:id", get(get_contrato))
        .route("/:id", put(update_contrato))
        .route("/:id", delete(delete_contrato))
}

#[derive(Debug, Deserialize)]
struct ContratoListParams {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    solo_activos: bool,
}

fn default_limit() -> i64 {
    100
}

async fn create_contrato(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateContratoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContratoResponse>>), AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_contrato(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ContratoResponse>, AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_contratos(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<ContratoListParams>,
) -> Result<Json<Vec<ContratoResponse>>, AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller
        .list(params.skip, params.limit, params.solo_activos)
        .await?;
    Ok(Json(response))
}

async fn update_contrato(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContratoRequest>,
) -> Result<Json<ApiResponse<ContratoResponse>>, AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_contrato(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ContratoController::new(state.pool.clone());
    let response = controller.delete(id, user.usuario_id).await?;
    Ok(Json(response))
}
