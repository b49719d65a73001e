use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::maintenance_dto::DashboardResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:vehicle_id", get(get_dashboard))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.get_dashboard(vehicle_id, user.user_id).await?;
    Ok(Json(response))
}
