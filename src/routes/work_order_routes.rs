use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

use crate::controllers::work_order_controller::WorkOrderController;
use crate::dto::invoicing_dto::InvoicingDecisionResponse;
use crate::models::work_order::UpdateInvoiceStatusRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_work_order_router() -> Router<AppState> {
    Router::new()
        .route("/:id/invoicing", get(get_invoicing))
        .route("/:id/invoice-status", put(update_invoice_status))
}

fn controller(state: &AppState) -> WorkOrderController {
    WorkOrderController::new(state.pool.clone(), state.config.contract_expiry_window_days)
}

async fn get_invoicing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoicingDecisionResponse>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(controller(&state).invoicing(id, today).await?))
}

async fn update_invoice_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInvoiceStatusRequest>,
) -> Result<Json<InvoicingDecisionResponse>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(controller(&state).update_invoice_status(id, request, today).await?))
}
