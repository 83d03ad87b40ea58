use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::common::{ApiResponse, PaginacionParams};
use crate::middleware::AuthenticatedUser;
use crate::models::cliente::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cliente))
        .route("/", get(list_clientes))
        .route("/:id", get(get_cliente))
        .route("/:id", put(update_cliente))
        .route("/:id", delete(delete_cliente))
}

async fn create_cliente(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateClienteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ClienteResponse>>), AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.create(request, user.usuario_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_cliente(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ClienteResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_clientes(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<PaginacionParams>,
) -> Result<Json<Vec<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.list(params.skip, params.limit).await?;
    Ok(Json(response))
}

async fn update_cliente(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.update(id, user.usuario_id, request).await?;
    Ok(Json(response))
}

async fn delete_cliente(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
