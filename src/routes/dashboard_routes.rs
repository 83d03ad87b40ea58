use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::auth_dto::DashboardCounts;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/counts", get(get_counts))
}

async fn get_counts(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<DashboardCounts>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.counts().await?;
    Ok(Json(response))
}
