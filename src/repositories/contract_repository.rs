use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contract::{Contract, ContractStatus, CreateContractRequest};
use crate::utils::errors::AppResult;

pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, status: Option<ContractStatus>) -> AppResult<Vec<Contract>> {
        let contracts = sqlx::query_as::<_, Contract>(
            r#"
            SELECT id, clinic, status, start_date, end_date
            FROM contracts
            WHERE ($1::contract_status IS NULL OR status = $1)
            ORDER BY end_date
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(contracts)
    }

    pub async fn create(
        &self,
        request: &CreateContractRequest,
        status: ContractStatus,
    ) -> AppResult<Contract> {
        let contract = sqlx::query_as::<_, Contract>(
            r#"
            INSERT INTO contracts (id, clinic, status, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, clinic, status, start_date, end_date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.clinic.trim())
        .bind(status)
        .bind(request.start_date)
        .bind(request.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(contract)
    }

    /// Aplica los estados recalculados en una sola transacción
    pub async fn update_statuses(&self, changes: &[(Uuid, ContractStatus)]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut updated = 0;

        for (id, status) in changes {
            let result = sqlx::query("UPDATE contracts SET status = $2 WHERE id = $1")
                .bind(*id)
                .bind(*status)
                .execute(&mut *tx)
                .await?;
            updated += result.rows_affected();
        }

        tx.commit().await?;
        Ok(updated)
    }
}
