use sqlx::PgPool;
use uuid::Uuid;

use crate::models::work_order::{InvoiceStatus, WorkOrder};
use crate::utils::errors::AppResult;

pub struct WorkOrderRepository {
    pool: PgPool,
}

impl WorkOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<WorkOrder>> {
        let work_order = sqlx::query_as::<_, WorkOrder>(
            r#"
            SELECT id, asset_id, status, maintenance_type, parts_replaced, invoice_status, due_date
            FROM work_orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work_order)
    }

    /// Nombre del sitio (clínica) del activo de la orden
    pub async fn find_site(&self, work_order_id: Uuid) -> AppResult<Option<String>> {
        let site: Option<String> = sqlx::query_scalar(
            r#"
            SELECT a.clinic
            FROM work_orders w
            JOIN assets a ON a.id = w.asset_id
            WHERE w.id = $1
            "#,
        )
        .bind(work_order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(site)
    }

    /// Cambia el estado de facturación si sigue siendo `expected`
    pub async fn update_invoice_status(
        &self,
        id: Uuid,
        expected: InvoiceStatus,
        invoice_status: InvoiceStatus,
    ) -> AppResult<Option<WorkOrder>> {
        let work_order = sqlx::query_as::<_, WorkOrder>(
            r#"
            UPDATE work_orders SET invoice_status = $3
            WHERE id = $1 AND invoice_status = $2
            RETURNING id, asset_id, status, maintenance_type, parts_replaced, invoice_status, due_date
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(invoice_status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(work_order)
    }
}
