//! Motor de métricas FMD
//!
//! Agrega eventos de falla en MTTR, MTBF y disponibilidad sobre una
//! ventana de análisis. Cálculo puro: los eventos llegan ya filtrados
//! por rango de fechas (y opcionalmente por activo) desde el repositorio.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::models::breakdown::{BreakdownEvent, CompletedBreakdown};
use crate::models::fmd_metrics::FmdMetrics;

const MILLIS_PER_HOUR: i64 = 3_600_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Calcula MTTR / MTBF / disponibilidad.
///
/// - Solo cuentan las fallas completadas (no planificadas, con los cuatro timestamps).
/// - `uptime = period_days * 24h - Σdowntime`, sin recortar; un uptime negativo
///   deja el MTBF en 0.
/// - Sin fallas completadas devuelve [`FmdMetrics::no_data`] (disponibilidad 100%).
pub fn compute_metrics(
    events: &[BreakdownEvent],
    period_days: i64,
) -> Result<FmdMetrics, MetricsError> {
    if period_days <= 0 {
        return Err(MetricsError::InvalidArgument(format!(
            "period_days must be positive, got {}",
            period_days
        )));
    }

    let completed: Vec<CompletedBreakdown> =
        events.iter().filter_map(BreakdownEvent::completed).collect();

    if completed.is_empty() {
        return Ok(FmdMetrics::no_data());
    }

    let total_breakdowns = completed.len() as u32;
    let count = Decimal::from(total_breakdowns);

    let total_repair_time: Decimal = completed
        .iter()
        .map(|b| to_hours(b.repair_duration()))
        .sum();
    let total_downtime: Decimal = completed.iter().map(|b| to_hours(b.downtime())).sum();

    let analysis_window = Decimal::from(period_days) * Decimal::from(24);
    let total_uptime = analysis_window - total_downtime;

    let mttr = total_repair_time / count;
    let mtbf = if total_uptime > Decimal::ZERO {
        total_uptime / count
    } else {
        Decimal::ZERO
    };

    let availability = if (mtbf + mttr).is_zero() {
        Decimal::ONE_HUNDRED
    } else {
        mtbf / (mtbf + mttr) * Decimal::ONE_HUNDRED
    };

    Ok(FmdMetrics {
        mttr: round2(mttr),
        mtbf: round2(mtbf),
        availability: round2(availability),
        total_breakdowns,
    })
}

/// Cuántos eventos quedan fuera del cálculo (paradas planificadas o incompletos)
pub fn excluded_count(events: &[BreakdownEvent]) -> usize {
    events.iter().filter(|e| !e.is_completed()).count()
}

fn to_hours(duration: chrono::Duration) -> Decimal {
    Decimal::from(duration.num_milliseconds()) / Decimal::from(MILLIS_PER_HOUR)
}

/// Redondeo a 2 decimales con escala fija (6 -> 6.00)
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn breakdown(day: u32, down: (u32, u32), repair: (u32, u32)) -> BreakdownEvent {
        BreakdownEvent {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            breakdown_start: at(day, down.0),
            breakdown_end: Some(at(day, down.1)),
            repair_start: Some(at(day, repair.0)),
            repair_end: Some(at(day, repair.1)),
            is_planned_stop: false,
        }
    }

    #[test]
    fn test_round2_keeps_trailing_zeros() {
        assert_eq!(round2(Decimal::from(6)).to_string(), "6.00");
        assert_eq!(round2(Decimal::new(99162011, 6)).to_string(), "99.16");
        assert_eq!(round2(Decimal::new(1005, 3)).to_string(), "1.01");
    }

    #[test]
    fn test_to_hours_uses_milliseconds() {
        assert_eq!(to_hours(chrono::Duration::minutes(90)), Decimal::new(15, 1));
    }

    #[test]
    fn test_rejects_non_positive_period() {
        assert!(matches!(
            compute_metrics(&[], 0),
            Err(MetricsError::InvalidArgument(_))
        ));
        assert!(compute_metrics(&[], -5).is_err());
    }

    #[test]
    fn test_empty_defaults() {
        let metrics = compute_metrics(&[], 30).unwrap();
        assert_eq!(metrics, FmdMetrics::no_data());
        assert!(metrics.is_default());
    }

    #[test]
    fn test_incomplete_events_are_skipped() {
        let mut open = breakdown(1, (0, 10), (2, 8));
        open.repair_end = None;
        let metrics = compute_metrics(&[open.clone()], 30).unwrap();
        assert_eq!(metrics.total_breakdowns, 0);
        assert_eq!(excluded_count(&[open]), 1);
    }

    #[test]
    fn test_two_breakdowns_average() {
        let events = vec![breakdown(1, (0, 10), (2, 8)), breakdown(2, (0, 10), (2, 8))];
        let metrics = compute_metrics(&events, 30).unwrap();
        assert_eq!(metrics.total_breakdowns, 2);
        assert_eq!(metrics.mttr.to_string(), "6.00");
        assert_eq!(metrics.mtbf.to_string(), "350.00");
        assert_eq!(metrics.availability.to_string(), "98.31");
    }

    #[test]
    fn test_downtime_beyond_window_floors_mtbf() {
        let mut long = breakdown(1, (0, 0), (2, 8));
        long.breakdown_end = Some(at(2, 6));
        let metrics = compute_metrics(&[long], 1).unwrap();
        assert_eq!(metrics.mtbf.to_string(), "0.00");
        assert_eq!(metrics.mttr.to_string(), "6.00");
        assert_eq!(metrics.availability.to_string(), "0.00");
    }

    #[test]
    fn test_zero_mtbf_and_mttr_reports_full_availability() {
        let mut event = breakdown(1, (0, 0), (5, 5));
        event.breakdown_end = Some(at(2, 0));
        let metrics = compute_metrics(&[event], 1).unwrap();
        assert_eq!(metrics.total_breakdowns, 1);
        assert_eq!(metrics.availability.to_string(), "100.00");
    }
}
