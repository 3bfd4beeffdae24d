//! Modelo de BreakdownEvent
//!
//! Un episodio de falla de un activo, con su ventana de parada
//! (breakdown) y su ventana de reparación técnica (repair).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::utils::errors::{AppError, AppResult};

/// Evento de falla - mapea a la tabla breakdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BreakdownEvent {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub breakdown_start: DateTime<Utc>,
    pub breakdown_end: Option<DateTime<Utc>>,
    pub repair_start: Option<DateTime<Utc>>,
    pub repair_end: Option<DateTime<Utc>>,
    pub is_planned_stop: bool,
}

/// Intervalos de una falla completada, ya sin opcionales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedBreakdown {
    pub breakdown_start: DateTime<Utc>,
    pub breakdown_end: DateTime<Utc>,
    pub repair_start: DateTime<Utc>,
    pub repair_end: DateTime<Utc>,
}

impl CompletedBreakdown {
    /// Tiempo técnico de reparación
    pub fn repair_duration(&self) -> chrono::Duration {
        self.repair_end - self.repair_start
    }

    /// Tiempo total fuera de servicio (incluye diagnóstico y espera de repuestos)
    pub fn downtime(&self) -> chrono::Duration {
        self.breakdown_end - self.breakdown_start
    }
}

impl BreakdownEvent {
    /// Devuelve los intervalos si la falla cuenta para fiabilidad:
    /// no es una parada planificada y tiene los cuatro timestamps.
    pub fn completed(&self) -> Option<CompletedBreakdown> {
        if self.is_planned_stop {
            return None;
        }

        Some(CompletedBreakdown {
            breakdown_start: self.breakdown_start,
            breakdown_end: self.breakdown_end?,
            repair_start: self.repair_start?,
            repair_end: self.repair_end?,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.completed().is_some()
    }

    /// Una vez cerrada la reparación el evento ya no se modifica
    pub fn is_finalized(&self) -> bool {
        self.repair_end.is_some()
    }
}

/// Request para registrar una falla
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_create_breakdown"))]
pub struct CreateBreakdownRequest {
    pub asset_id: Uuid,
    pub breakdown_start: DateTime<Utc>,
    pub breakdown_end: Option<DateTime<Utc>>,
    pub repair_start: Option<DateTime<Utc>>,
    pub repair_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_planned_stop: bool,
}

/// Request para completar los timestamps de una falla abierta
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBreakdownRequest {
    pub breakdown_end: Option<DateTime<Utc>>,
    pub repair_start: Option<DateTime<Utc>>,
    pub repair_end: Option<DateTime<Utc>>,
    pub is_planned_stop: Option<bool>,
}

fn validate_create_breakdown(request: &CreateBreakdownRequest) -> Result<(), ValidationError> {
    validate_intervals(
        request.breakdown_start,
        request.breakdown_end,
        request.repair_start,
        request.repair_end,
    )
}

/// Comprueba `breakdown_start <= breakdown_end` y `repair_start <= repair_end`
/// cuando ambos extremos están presentes.
pub fn validate_intervals(
    breakdown_start: DateTime<Utc>,
    breakdown_end: Option<DateTime<Utc>>,
    repair_start: Option<DateTime<Utc>>,
    repair_end: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if let Some(end) = breakdown_end {
        if end < breakdown_start {
            let mut error = ValidationError::new("breakdown_interval");
            error.message = Some("breakdown_end must not precede breakdown_start".into());
            return Err(error);
        }
    }

    if let (Some(start), Some(end)) = (repair_start, repair_end) {
        if end < start {
            let mut error = ValidationError::new("repair_interval");
            error.message = Some("repair_end must not precede repair_start".into());
            return Err(error);
        }
    }

    Ok(())
}

impl BreakdownEvent {
    /// Aplica un update parcial y devuelve el evento resultante
    pub fn merged_with(&self, update: &UpdateBreakdownRequest) -> BreakdownEvent {
        BreakdownEvent {
            breakdown_end: update.breakdown_end.or(self.breakdown_end),
            repair_start: update.repair_start.or(self.repair_start),
            repair_end: update.repair_end.or(self.repair_end),
            is_planned_stop: update.is_planned_stop.unwrap_or(self.is_planned_stop),
            ..self.clone()
        }
    }

    /// Aplica el update sobre un evento no finalizado y valida los
    /// intervalos resultantes.
    pub fn apply_update(&self, update: &UpdateBreakdownRequest) -> AppResult<BreakdownEvent> {
        if self.is_finalized() {
            return Err(AppError::Conflict(format!(
                "Breakdown {} is finalized and can no longer be modified",
                self.id
            )));
        }

        let merged = self.merged_with(update);
        validate_intervals(
            merged.breakdown_start,
            merged.breakdown_end,
            merged.repair_start,
            merged.repair_end,
        )
        .map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("intervals", e);
            AppError::Validation(errors)
        })?;

        Ok(merged)
    }
}
