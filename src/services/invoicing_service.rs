//! Regla de facturación para órdenes de trabajo completadas
//!
//! El trabajo sin contrato activo siempre se factura. Con contrato activo,
//! la mano de obra está cubierta y solo se facturan los repuestos.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use chrono::NaiveDate;

use crate::models::contract::{Contract, ContractStatus};
use crate::models::work_order::{InvoiceStatus, WorkOrder};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvoicingError {
    #[error("Work order {0} is not completed")]
    NotCompleted(Uuid),

    #[error("Work order {0} is covered by contract and does not need invoicing")]
    CoveredByContract(Uuid),

    #[error("Invalid invoice transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },
}

/// Acción de facturación que corresponde mostrar para una orden
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoicingAction {
    /// La orden todavía no está completada
    NotApplicable,
    CoveredByContract,
    Deposit,
    MarkPaid,
    Settled,
}

/// `true` si hay que emitir factura.
///
/// No mira el estado de la orden: el llamador solo debe usarlo con
/// órdenes completadas.
pub fn needs_invoicing(work_order: &WorkOrder, has_active_contract_for_site: bool) -> bool {
    !has_active_contract_for_site || work_order.parts_replaced
}

/// Sitios (clínicas) con al menos un contrato `active` a fecha `today`.
///
/// El estado se recalcula desde `end_date`: un contrato vencido deja de
/// cubrir su sitio aunque el estado almacenado no se haya refrescado.
pub fn active_contract_sites(
    contracts: &[Contract],
    today: NaiveDate,
    window_days: i64,
) -> HashSet<String> {
    contracts
        .iter()
        .filter(|c| ContractStatus::evaluate(c.end_date, today, window_days) == ContractStatus::Active)
        .map(|c| c.clinic.clone())
        .collect()
}

pub fn has_active_contract_for_site(active_sites: &HashSet<String>, site: &str) -> bool {
    active_sites.contains(site)
}

pub fn invoicing_action(work_order: &WorkOrder, needs_invoicing: bool) -> InvoicingAction {
    if !work_order.is_completed() {
        return InvoicingAction::NotApplicable;
    }
    if !needs_invoicing {
        return InvoicingAction::CoveredByContract;
    }
    match work_order.invoice_status {
        InvoiceStatus::NotInvoiced => InvoicingAction::Deposit,
        InvoiceStatus::Deposited => InvoicingAction::MarkPaid,
        InvoiceStatus::Paid => InvoicingAction::Settled,
    }
}

/// Valida un cambio de estado de facturación: solo avanza un paso
/// (`none -> deposited -> paid`) y solo en órdenes completadas facturables.
pub fn validate_invoice_transition(
    work_order: &WorkOrder,
    needs_invoicing: bool,
    target: InvoiceStatus,
) -> Result<(), InvoicingError> {
    if !work_order.is_completed() {
        return Err(InvoicingError::NotCompleted(work_order.id));
    }
    if !needs_invoicing {
        return Err(InvoicingError::CoveredByContract(work_order.id));
    }
    if work_order.invoice_status.next() != Some(target) {
        return Err(InvoicingError::InvalidTransition {
            from: work_order.invoice_status,
            to: target,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::work_order::WorkOrderStatus;

    fn work_order(parts_replaced: bool) -> WorkOrder {
        WorkOrder {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            status: WorkOrderStatus::Completed,
            maintenance_type: "corrective".to_string(),
            parts_replaced,
            invoice_status: InvoiceStatus::NotInvoiced,
            due_date: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(clinic: &str, status: ContractStatus, end_date: NaiveDate) -> Contract {
        Contract {
            id: Uuid::new_v4(),
            clinic: clinic.to_string(),
            status,
            start_date: date(2023, 1, 1),
            end_date,
        }
    }

    #[test]
    fn test_needs_invoicing_truth_table() {
        assert!(!needs_invoicing(&work_order(false), true));
        assert!(needs_invoicing(&work_order(true), true));
        assert!(needs_invoicing(&work_order(false), false));
        assert!(needs_invoicing(&work_order(true), false));
    }

    #[test]
    fn test_active_sites_ignore_other_statuses() {
        let today = date(2024, 6, 1);
        let contracts = vec![
            contract("Clínica Norte", ContractStatus::Active, date(2025, 1, 1)),
            contract("Clínica Sur", ContractStatus::ExpiringSoon, date(2024, 6, 20)),
            contract("Hospital Central", ContractStatus::Expired, date(2024, 1, 1)),
        ];
        let sites = active_contract_sites(&contracts, today, 30);
        assert!(has_active_contract_for_site(&sites, "Clínica Norte"));
        assert!(!has_active_contract_for_site(&sites, "Clínica Sur"));
        assert!(!has_active_contract_for_site(&sites, "Hospital Central"));
    }

    #[test]
    fn test_lapsed_contract_with_stale_status_does_not_cover_site() {
        let today = date(2024, 6, 1);
        let stale = contract("Clínica Norte", ContractStatus::Active, date(2024, 5, 1));
        let sites = active_contract_sites(&[stale], today, 30);
        assert!(!has_active_contract_for_site(&sites, "Clínica Norte"));
    }

    #[test]
    fn test_action_for_open_order() {
        let mut order = work_order(true);
        order.status = WorkOrderStatus::InProgress;
        assert_eq!(invoicing_action(&order, true), InvoicingAction::NotApplicable);
    }

    #[test]
    fn test_action_follows_invoice_status() {
        let mut order = work_order(true);
        assert_eq!(invoicing_action(&order, false), InvoicingAction::CoveredByContract);
        assert_eq!(invoicing_action(&order, true), InvoicingAction::Deposit);
        order.invoice_status = InvoiceStatus::Deposited;
        assert_eq!(invoicing_action(&order, true), InvoicingAction::MarkPaid);
        order.invoice_status = InvoiceStatus::Paid;
        assert_eq!(invoicing_action(&order, true), InvoicingAction::Settled);
    }

    #[test]
    fn test_transition_rules() {
        let mut order = work_order(false);
        assert!(validate_invoice_transition(&order, true, InvoiceStatus::Deposited).is_ok());
        assert_eq!(
            validate_invoice_transition(&order, true, InvoiceStatus::Paid),
            Err(InvoicingError::InvalidTransition {
                from: InvoiceStatus::NotInvoiced,
                to: InvoiceStatus::Paid,
            })
        );
        assert_eq!(
            validate_invoice_transition(&order, false, InvoiceStatus::Deposited),
            Err(InvoicingError::CoveredByContract(order.id))
        );

        order.status = WorkOrderStatus::Cancelled;
        assert_eq!(
            validate_invoice_transition(&order, true, InvoiceStatus::Deposited),
            Err(InvoicingError::NotCompleted(order.id))
        );
    }
}
