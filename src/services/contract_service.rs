//! Ventanas de vencimiento de contratos

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::contract::{Contract, ContractStatus};

/// Contratos cuyo estado calculado difiere del almacenado
pub fn stale_statuses(
    contracts: &[Contract],
    today: NaiveDate,
    window_days: i64,
) -> Vec<(Uuid, ContractStatus)> {
    contracts
        .iter()
        .filter_map(|c| {
            let status = ContractStatus::evaluate(c.end_date, today, window_days);
            (status != c.status).then_some((c.id, status))
        })
        .collect()
}

/// Contratos no vencidos que terminan dentro de la ventana, ordenados por fecha de fin
pub fn expiring_within(contracts: &[Contract], today: NaiveDate, window_days: i64) -> Vec<Contract> {
    let mut expiring: Vec<Contract> = contracts
        .iter()
        .filter(|c| {
            ContractStatus::evaluate(c.end_date, today, window_days) == ContractStatus::ExpiringSoon
        })
        .cloned()
        .collect();
    expiring.sort_by_key(|c| c.end_date);
    expiring
}
