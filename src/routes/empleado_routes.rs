use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::empleado_controller::EmpleadoController;
use crate::dto::common::{ApiResponse, PaginacionParams};
use crate::middleware::AuthenticatedUser;
use crate::models::empleado::{CreateEmpleadoRequest, EmpleadoResponse, UpdateEmpleadoRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_empleado_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_empleado))
        .route("/", get(list_empleados))
        .route("/:id", get(get_empleado))
        .route("/:id", put(update_empleado))
        .route("/:id", delete(delete_empleado))
}

async fn create_empleado(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateEmpleadoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EmpleadoResponse>>), AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_empleado(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EmpleadoResponse>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_empleados(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PaginacionParams>,
) -> Result<Json<Vec<EmpleadoResponse>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.list(params.skip, params.limit).await?;
    Ok(Json(response))
}

async fn update_empleado(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmpleadoRequest>,
) -> Result<Json<ApiResponse<EmpleadoResponse>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_empleado(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = EmpleadoController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
