use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::controllers::fmd_controller::FmdController;
use crate::models::fmd_metrics::{FmdMetricsQuery, FmdMetricsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fmd_router() -> Router<AppState> {
    Router::new().route("/metrics", get(get_metrics))
}

async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<FmdMetricsQuery>,
) -> Result<Json<FmdMetricsResponse>, AppError> {
    let controller = FmdController::new(state.pool.clone(), state.config.default_period_days);
    let response = controller.metrics(query, Utc::now()).await?;
    Ok(Json(response))
}
