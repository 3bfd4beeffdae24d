//! Modelo de Contract
//!
//! Contratos de mantenimiento por clínica (sitio). Solo se usan como
//! consulta: "¿hay un contrato activo que cubra este sitio?".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Días antes del vencimiento en los que un contrato pasa a `expiring_soon`
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Estado del contrato - mapea al ENUM contract_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "contract_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl ContractStatus {
    /// Estado de un contrato según su fecha de fin y el día de hoy
    pub fn evaluate(end_date: NaiveDate, today: NaiveDate, window_days: i64) -> ContractStatus {
        if end_date < today {
            ContractStatus::Expired
        } else if (end_date - today).num_days() <= window_days {
            ContractStatus::ExpiringSoon
        } else {
            ContractStatus::Active
        }
    }
}

/// Contract principal - mapea a la tabla contracts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contract {
    pub id: Uuid,
    pub clinic: String,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Request para registrar un contrato
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_contract_dates"))]
pub struct CreateContractRequest {
    #[validate(length(min = 1, max = 200))]
    pub clinic: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn validate_contract_dates(request: &CreateContractRequest) -> Result<(), ValidationError> {
    if request.end_date < request.start_date {
        let mut error = ValidationError::new("contract_dates");
        error.message = Some("end_date must not precede start_date".into());
        return Err(error);
    }
    Ok(())
}

/// Filtros para listar contratos
#[derive(Debug, Default, Deserialize)]
pub struct ContractFilters {
    pub status: Option<ContractStatus>,
}
