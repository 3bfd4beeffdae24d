use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::controllers::contract_controller::ContractController;
use crate::dto::api_response::ApiResponse;
use crate::dto::contract_dto::{ActiveSitesResponse, ExpiringContractsResponse, RefreshStatusResponse};
use crate::models::contract::{Contract, ContractFilters, CreateContractRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contract_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contracts).post(create_contract))
        .route("/expiring", get(list_expiring))
        .route("/active-sites", get(list_active_sites))
        .route("/refresh-status", post(refresh_status))
}

fn controller(state: &AppState) -> ContractController {
    ContractController::new(state.pool.clone(), state.config.contract_expiry_window_days)
}

async fn list_contracts(
    State(state): State<AppState>,
    Query(filters): Query<ContractFilters>,
) -> Result<Json<Vec<Contract>>, AppError> {
    Ok(Json(controller(&state).list(filters).await?))
}

async fn list_expiring(
    State(state): State<AppState>,
) -> Result<Json<ExpiringContractsResponse>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(controller(&state).expiring(today).await?))
}

async fn list_active_sites(
    State(state): State<AppState>,
) -> Result<Json<ActiveSitesResponse>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(controller(&state).active_sites(today).await?))
}

async fn create_contract(
    State(state): State<AppState>,
    Json(request): Json<CreateContractRequest>,
) -> Result<Json<ApiResponse<Contract>>, AppError> {
    let today = Utc::now().date_naive();
    let contract = controller(&state).create(request, today).await?;
    Ok(Json(ApiResponse::success_with_message(
        contract,
        "Contrato creado exitosamente".to_string(),
    )))
}

async fn refresh_status(
    State(state): State<AppState>,
) -> Result<Json<RefreshStatusResponse>, AppError> {
    let today = Utc::now().date_naive();
    Ok(Json(controller(&state).refresh_statuses(today).await?))
}
