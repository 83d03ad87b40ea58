use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::common::{ApiResponse, PaginacionParams};
use crate::middleware::AuthenticatedUser;
use crate::models::vehiculo::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehiculo))
        .route("/", get(list_vehiculos))
        .route("/:id", get(get_vehiculo))
        .route("/:id", put(update_vehiculo))
        .route("/:id", delete(delete_vehiculo))
}

async fn create_vehiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehiculoResponse>>), AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehiculo(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehiculos(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PaginacionParams>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.list(params.skip, params.limit).await?;
    Ok(Json(response))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
