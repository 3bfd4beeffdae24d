use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::breakdown_controller::BreakdownController;
use crate::dto::api_response::ApiResponse;
use crate::models::breakdown::{BreakdownEvent, CreateBreakdownRequest, UpdateBreakdownRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_breakdown_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_breakdown))
        .route("/:id", put(update_breakdown))
}

async fn create_breakdown(
    State(state): State<AppState>,
    Json(request): Json<CreateBreakdownRequest>,
) -> Result<Json<ApiResponse<BreakdownEvent>>, AppError> {
    let controller = BreakdownController::new(state.pool.clone());
    let event = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        event,
        "Falla registrada exitosamente".to_string(),
    )))
}

async fn update_breakdown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBreakdownRequest>,
) -> Result<Json<ApiResponse<BreakdownEvent>>, AppError> {
    let controller = BreakdownController::new(state.pool.clone());
    let event = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(event)))
}
