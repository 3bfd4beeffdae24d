//! Modelos de métricas FMD (fiabilidad, mantenibilidad, disponibilidad)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Periodo de análisis por defecto, en días
pub const DEFAULT_PERIOD_DAYS: i64 = 30;

/// Rango aceptado para `period_days`
pub const MIN_PERIOD_DAYS: i64 = 1;
pub const MAX_PERIOD_DAYS: i64 = 3650;

/// Resultado del cálculo de MTTR / MTBF / disponibilidad.
///
/// Todos los valores se redondean a 2 decimales con escala fija,
/// de modo que `6` se serializa como `"6.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmdMetrics {
    /// Horas
    pub mttr: Decimal,
    /// Horas
    pub mtbf: Decimal,
    /// Porcentaje
    pub availability: Decimal,
    pub total_breakdowns: u32,
}

impl FmdMetrics {
    /// Sin fallas completadas la disponibilidad se reporta al 100%.
    /// Es un valor optimista por defecto, no una medición.
    pub fn no_data() -> Self {
        Self {
            mttr: Decimal::new(0, 2),
            mtbf: Decimal::new(0, 2),
            availability: Decimal::new(10000, 2),
            total_breakdowns: 0,
        }
    }

    /// Indica si la disponibilidad es el valor por defecto sin datos
    pub fn is_default(&self) -> bool {
        self.total_breakdowns == 0
    }
}

/// Query params del endpoint de métricas
#[derive(Debug, Deserialize, Validate)]
pub struct FmdMetricsQuery {
    #[validate(range(min = 1, max = 3650))]
    pub period_days: Option<i64>,
    pub asset_id: Option<Uuid>,
}

/// Response de métricas para el dashboard
#[derive(Debug, Serialize)]
pub struct FmdMetricsResponse {
    pub asset_id: Option<Uuid>,
    pub period_days: i64,
    #[serde(flatten)]
    pub metrics: FmdMetrics,
    pub availability_is_default: bool,
}
