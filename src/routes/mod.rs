//! Rutas HTTP
//!
//! Ensambla los routers de cada recurso bajo `/api`.

pub mod breakdown_routes;
pub mod contract_routes;
pub mod fmd_routes;
pub mod work_order_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/fmd", fmd_routes::create_fmd_router())
        .nest("/api/breakdowns", breakdown_routes::create_breakdown_router())
        .nest("/api/work-orders", work_order_routes::create_work_order_router())
        .nest("/api/contracts", contract_routes::create_contract_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "cmms-backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
