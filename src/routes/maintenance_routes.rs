use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateLogRequest, HistoryItemResponse, LogResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct LogFilterQuery {
    pub task_key: Option<String>,
}

pub fn create_maintenance_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/log", post(create_log))
        .route("/log/:vehicle_id", get(list_logs))
        .route("/history", get(history))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_log(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateLogRequest>,
) -> Result<Json<ApiResponse<LogResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create_log(user.user_id, request).await?;
    Ok(Json(response))
}

async fn list_logs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
    Query(filter): Query<LogFilterQuery>,
) -> Result<Json<Vec<LogResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller
        .list_by_vehicle(vehicle_id, user.user_id, filter.task_key)
        .await?;
    Ok(Json(response))
}

async fn history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<HistoryItemResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.history(user.user_id).await?;
    Ok(Json(response))
}
