use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::tipo_vehiculo_controller::TipoVehiculoController;
use crate::dto::common::{ApiResponse, PaginacionParams};
use crate::middleware::AuthenticatedUser;
use crate::models::tipo_vehiculo::{
    CreateTipoVehiculoRequest, TipoVehiculoResponse, UpdateTipoVehiculoRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tipo_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tipo_vehiculo))
        .route("/", get(list_tipos_vehiculo))
        .route("/:id", get(get_tipo_vehiculo))
        .route("/:id", put(update_tipo_vehiculo))
        .route("/:id", delete(delete_tipo_vehiculo))
}

async fn create_tipo_vehiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateTipoVehiculoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TipoVehiculoResponse>>), AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_tipo_vehiculo(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TipoVehiculoResponse>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_tipos_vehiculo(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PaginacionParams>,
) -> Result<Json<Vec<TipoVehiculoResponse>>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.list(params.skip, params.limit).await?;
    Ok(Json(response))
}

async fn update_tipo_vehiculo(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTipoVehiculoRequest>,
) -> Result<Json<ApiResponse<TipoVehiculoResponse>>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_tipo_vehiculo(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TipoVehiculoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
