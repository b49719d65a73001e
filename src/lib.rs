pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    // En desarrollo se acepta cualquier origen; en producción solo los
    // configurados en CORS_ORIGINS
    let cors = if state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(state.clone()),
        )
        .nest(
            "/api/vehicle",
            routes::vehicle_routes::create_vehicle_router(state.clone()),
        )
        .nest(
            "/api",
            routes::maintenance_routes::create_maintenance_router(state.clone()),
        )
        .nest(
            "/api/dashboard",
            routes::dashboard_routes::create_dashboard_router(state.clone()),
        )
        .nest(
            "/api/billing",
            routes::billing_routes::create_billing_router(state.clone()),
        )
        .layer(cors)
        .with_state(state)
}

async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "car_care_backend"
    }))
}
