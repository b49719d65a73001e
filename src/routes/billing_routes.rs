use axum::{
    extract::State,
    http::HeaderMap,
    middleware,
    routing::post,
    Extension, Json, Router,
};

use crate::controllers::billing_controller::BillingController;
use crate::dto::billing_dto::{CheckoutRequest, CheckoutResponse, WebhookEvent};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_billing_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/checkout", post(checkout))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    // El webhook lo llama la pasarela, no el usuario: va sin JWT
    Router::new()
        .route("/webhook", post(webhook))
        .merge(protected)
}

async fn checkout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone(), &state.config);
    let response = controller.checkout(user.user_id, &user.email, request).await?;
    Ok(Json(response))
}

async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<WebhookEvent>,
) -> Result<Json<serde_json::Value>, AppError> {
    let signature = headers
        .get("x-webhook-secret")
        .and_then(|v| v.to_str().ok());

    let controller = BillingController::new(state.pool.clone(), &state.config);
    controller.webhook(signature, event).await?;
    Ok(Json(serde_json::json!({ "received": true })))
}
