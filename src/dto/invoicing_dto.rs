use serde::Serialize;
use uuid::Uuid;

use crate::models::work_order::{InvoiceStatus, WorkOrderStatus};
use crate::services::invoicing_service::InvoicingAction;

// Decisión de facturación de una orden de trabajo
#[derive(Debug, Serialize)]
pub struct InvoicingDecisionResponse {
    pub work_order_id: Uuid,
    pub status: WorkOrderStatus,
    pub site: String,
    pub has_active_contract: bool,
    pub parts_replaced: bool,
    pub needs_invoicing: bool,
    pub invoice_status: InvoiceStatus,
    pub action: InvoicingAction,
}
