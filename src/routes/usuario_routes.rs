use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::usuario_controller::UsuarioController;
use crate::dto::common::{ApiResponse, PaginacionParams};
use crate::middleware::AuthenticatedUser;
use crate::models::usuario::{
    CambiarPasswordRequest, CreateUsuarioRequest, UpdateUsuarioRequest, UsuarioResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_usuario_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_usuario))
        .route("/", get(list_usuarios))
        .route("/:id", get(get_usuario))
        .route("/:id", put(update_usuario))
        .route("/:id/cambiar-password", put(cambiar_password))
        .route("/:id", delete(delete_usuario))
}

/// Crear usuario no exige token: es la vía de bootstrap del primer admin.
async fn create_usuario(
    State(state): State<AppState>,
    Json(request): Json<CreateUsuarioRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UsuarioResponse>>), AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.create(request, None).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_usuario(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UsuarioResponse>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_usuarios(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PaginacionParams>,
) -> Result<Json<Vec<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.list(params.skip, params.limit).await?;
    Ok(Json(response))
}

async fn update_usuario(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUsuarioRequest>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn cambiar_password(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<CambiarPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller
        .cambiar_password(id, user.usuario_id, request)
        .await?;
    Ok(Json(response))
}

async fn delete_usuario(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UsuarioController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
