use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use validator::Validate;

use crate::models::fmd_metrics::{
    FmdMetricsQuery, FmdMetricsResponse, MAX_PERIOD_DAYS, MIN_PERIOD_DAYS,
};
use crate::repositories::breakdown_repository::BreakdownRepository;
use crate::services::fmd_metrics_service::{compute_metrics, excluded_count};
use crate::utils::errors::{AppError, AppResult};

pub struct FmdController {
    repository: BreakdownRepository,
    default_period_days: i64,
}

impl FmdController {
    pub fn new(pool: PgPool, default_period_days: i64) -> Self {
        Self {
            repository: BreakdownRepository::new(pool),
            default_period_days,
        }
    }

    /// Métricas sobre `[now - period_days, now]`
    pub async fn metrics(
        &self,
        query: FmdMetricsQuery,
        now: DateTime<Utc>,
    ) -> AppResult<FmdMetricsResponse> {
        query.validate()?;

        let period_days = resolve_period_days(query.period_days, self.default_period_days)?;

        let since = now - Duration::days(period_days);
        let events = self
            .repository
            .find_in_window(since, now, query.asset_id)
            .await?;

        log::info!(
            "📊 FMD: {} eventos en {} días ({} excluidos)",
            events.len(),
            period_days,
            excluded_count(&events)
        );

        let metrics = compute_metrics(&events, period_days)?;
        let availability_is_default = metrics.is_default();

        Ok(FmdMetricsResponse {
            asset_id: query.asset_id,
            period_days,
            metrics,
            availability_is_default,
        })
    }
}

/// Periodo pedido o el configurado, siempre dentro de `1..=3650`
fn resolve_period_days(requested: Option<i64>, default_period_days: i64) -> AppResult<i64> {
    let period_days = requested.unwrap_or(default_period_days);
    if !(MIN_PERIOD_DAYS..=MAX_PERIOD_DAYS).contains(&period_days) {
        return Err(AppError::InvalidArgument(format!(
            "period_days must be between {} and {}, got {}",
            MIN_PERIOD_DAYS, MAX_PERIOD_DAYS, period_days
        )));
    }
    Ok(period_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_period_uses_default() {
        assert_eq!(resolve_period_days(None, 30).unwrap(), 30);
        assert_eq!(resolve_period_days(Some(7), 30).unwrap(), 7);
    }

    #[test]
    fn test_resolve_period_rejects_out_of_range_default() {
        assert!(matches!(
            resolve_period_days(None, 1_000_000_000_000),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve_period_days(None, 0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(resolve_period_days(Some(3651), 30).is_err());
    }
}
