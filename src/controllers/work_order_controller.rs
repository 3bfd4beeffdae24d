use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::invoicing_dto::InvoicingDecisionResponse;
use crate::models::work_order::{InvoiceStatus, UpdateInvoiceStatusRequest, WorkOrder};
use crate::repositories::contract_repository::ContractRepository;
use crate::repositories::work_order_repository::WorkOrderRepository;
use crate::services::invoicing_service::{
    active_contract_sites, has_active_contract_for_site, invoicing_action, needs_invoicing,
    validate_invoice_transition,
};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct WorkOrderController {
    work_orders: WorkOrderRepository,
    contracts: ContractRepository,
    window_days: i64,
}

impl WorkOrderController {
    pub fn new(pool: PgPool, window_days: i64) -> Self {
        Self {
            work_orders: WorkOrderRepository::new(pool.clone()),
            contracts: ContractRepository::new(pool),
            window_days,
        }
    }

    pub async fn invoicing(&self, id: Uuid, today: NaiveDate) -> AppResult<InvoicingDecisionResponse> {
        let (work_order, site, has_active_contract) = self.load_with_coverage(id, today).await?;
        Ok(decision(work_order, site, has_active_contract))
    }

    /// Avanza `none -> deposited -> paid`
    pub async fn update_invoice_status(
        &self,
        id: Uuid,
        request: UpdateInvoiceStatusRequest,
        today: NaiveDate,
    ) -> AppResult<InvoicingDecisionResponse> {
        request.validate()?;

        let (work_order, site, has_active_contract) = self.load_with_coverage(id, today).await?;
        check_invoice_update(&work_order, has_active_contract, request.invoice_status)?;

        let updated = self
            .work_orders
            .update_invoice_status(id, work_order.invoice_status, request.invoice_status)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Invoice status of work order {} changed concurrently", id))
            })?;

        log::info!(
            "💶 Orden {}: facturación {:?} -> {:?}",
            id,
            work_order.invoice_status,
            updated.invoice_status
        );
        Ok(decision(updated, site, has_active_contract))
    }

    async fn load_with_coverage(
        &self,
        id: Uuid,
        today: NaiveDate,
    ) -> AppResult<(WorkOrder, String, bool)> {
        let work_order = self
            .work_orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Work order", &id.to_string()))?;

        let site = self
            .work_orders
            .find_site(id)
            .await?
            .ok_or_else(|| not_found_error("Asset of work order", &id.to_string()))?;

        let contracts = self.contracts.list(None).await?;
        let sites = active_contract_sites(&contracts, today, self.window_days);
        let has_active_contract = has_active_contract_for_site(&sites, &site);

        Ok((work_order, site, has_active_contract))
    }
}

/// Valida el cambio de facturación pedido contra la orden almacenada
fn check_invoice_update(
    work_order: &WorkOrder,
    has_active_contract: bool,
    target: InvoiceStatus,
) -> AppResult<()> {
    let billable = needs_invoicing(work_order, has_active_contract);
    validate_invoice_transition(work_order, billable, target)?;
    Ok(())
}

fn decision(work_order: WorkOrder, site: String, has_active_contract: bool) -> InvoicingDecisionResponse {
    let billable = needs_invoicing(&work_order, has_active_contract);
    InvoicingDecisionResponse {
        work_order_id: work_order.id,
        status: work_order.status,
        site,
        has_active_contract,
        parts_replaced: work_order.parts_replaced,
        needs_invoicing: billable,
        invoice_status: work_order.invoice_status,
        action: invoicing_action(&work_order, billable),
    }
}
