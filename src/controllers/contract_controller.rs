use chrono::NaiveDate;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::contract_dto::{ActiveSitesResponse, ExpiringContractsResponse, RefreshStatusResponse};
use crate::models::contract::{Contract, ContractFilters, ContractStatus, CreateContractRequest};
use crate::repositories::contract_repository::ContractRepository;
use crate::services::contract_service::{expiring_within, stale_statuses};
use crate::services::invoicing_service::active_contract_sites;
use crate::utils::errors::AppResult;

pub struct ContractController {
    repository: ContractRepository,
    window_days: i64,
}

impl ContractController {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            repository: ContractRepository::new(pool),
            window_days,
        }
    }

    pub async fn list(&self, filters: ContractFilters) -> AppResult<Vec<Contract>> {
        self.repository.list(filters.status).await
    }

    pub async fn expiring(&self, today: NaiveDate) -> AppResult<ExpiringContractsResponse> {
        let contracts = self.repository.list(None).await?;
        Ok(ExpiringContractsResponse {
            window_days: self.window_days,
            contracts: expiring_within(&contracts, today, self.window_days),
        })
    }

    pub async fn active_sites(&self, today: NaiveDate) -> AppResult<ActiveSitesResponse> {
        let contracts = self.repository.list(None).await?;
        let mut sites: Vec<String> = active_contract_sites(&contracts, today, self.window_days)
            .into_iter()
            .collect();
        sites.sort();
        Ok(ActiveSitesResponse { sites })
    }

    /// El estado inicial se deriva de las fechas
    pub async fn create(
        &self,
        request: CreateContractRequest,
        today: NaiveDate,
    ) -> AppResult<Contract> {
        request.validate()?;
        let status = ContractStatus::evaluate(request.end_date, today, self.window_days);
        let contract = self.repository.create(&request, status).await?;
        log::info!("📄 Contrato {} para '{}' ({:?})", contract.id, contract.clinic, status);
        Ok(contract)
    }

    pub async fn refresh_statuses(&self, today: NaiveDate) -> AppResult<RefreshStatusResponse> {
        let contracts = self.repository.list(None).await?;
        let changes = stale_statuses(&contracts, today, self.window_days);
        let updated = if changes.is_empty() {
            0
        } else {
            self.repository.update_statuses(&changes).await?
        };

        log::info!("🔄 Estados de contratos: {} evaluados, {} actualizados", contracts.len(), updated);
        Ok(RefreshStatusResponse {
            evaluated: contracts.len(),
            updated,
        })
    }
}
