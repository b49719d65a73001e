//! Middleware de CORS
//!
//! En desarrollo se acepta cualquier origen; en producción solo los
//! orígenes configurados, con los métodos que la API realmente expone.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// CORS abierto para desarrollo local
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// CORS restringido a los orígenes de CORS_ORIGINS
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(&origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    // La API solo expone GET/POST/PUT/DELETE; OPTIONS es el preflight
    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("x-webhook-secret"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
