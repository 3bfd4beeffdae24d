//! Modelo de WorkOrder
//!
//! Órdenes de trabajo de mantenimiento y sus campos de facturación.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Estado de la orden - mapea al ENUM work_order_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "work_order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

/// Estado de facturación - mapea al ENUM invoice_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "invoice_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[sqlx(rename = "none")]
    #[serde(rename = "none")]
    NotInvoiced,
    Deposited,
    Paid,
}

impl InvoiceStatus {
    /// Siguiente paso del flujo `none -> deposited -> paid`
    pub fn next(self) -> Option<InvoiceStatus> {
        match self {
            InvoiceStatus::NotInvoiced => Some(InvoiceStatus::Deposited),
            InvoiceStatus::Deposited => Some(InvoiceStatus::Paid),
            InvoiceStatus::Paid => None,
        }
    }
}

/// WorkOrder principal - mapea a la tabla work_orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkOrder {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub status: WorkOrderStatus,
    pub maintenance_type: String,
    pub parts_replaced: bool,
    pub invoice_status: InvoiceStatus,
    pub due_date: Option<NaiveDate>,
}

impl WorkOrder {
    pub fn is_completed(&self) -> bool {
        self.status == WorkOrderStatus::Completed
    }
}

/// Request para avanzar el estado de facturación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceStatusRequest {
    pub invoice_status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_status_sequence() {
        assert_eq!(InvoiceStatus::NotInvoiced.next(), Some(InvoiceStatus::Deposited));
        assert_eq!(InvoiceStatus::Deposited.next(), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::Paid.next(), None);
    }

    #[test]
    fn test_invoice_status_wire_names() {
        assert_eq!(serde_json::to_value(InvoiceStatus::NotInvoiced).unwrap(), "none");
        assert_eq!(serde_json::to_value(WorkOrderStatus::InProgress).unwrap(), "in_progress");
        let parsed: InvoiceStatus = serde_json::from_str("\"deposited\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Deposited);
    }
}
