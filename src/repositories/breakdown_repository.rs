use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::breakdown::{BreakdownEvent, CreateBreakdownRequest};
use crate::utils::errors::AppResult;

pub struct BreakdownRepository {
    pool: PgPool,
}

impl BreakdownRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fallas iniciadas dentro de `[since, until]`, opcionalmente de un solo activo
    pub async fn find_in_window(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
        asset_id: Option<Uuid>,
    ) -> AppResult<Vec<BreakdownEvent>> {
        let events = sqlx::query_as::<_, BreakdownEvent>(
            r#"
            SELECT id, asset_id, breakdown_start, breakdown_end, repair_start, repair_end, is_planned_stop
            FROM breakdowns
            WHERE breakdown_start >= $1
              AND breakdown_start <= $2
              AND ($3::uuid IS NULL OR asset_id = $3)
            ORDER BY breakdown_start
            "#,
        )
        .bind(since)
        .bind(until)
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BreakdownEvent>> {
        let event = sqlx::query_as::<_, BreakdownEvent>(
            r#"
            SELECT id, asset_id, breakdown_start, breakdown_end, repair_start, repair_end, is_planned_stop
            FROM breakdowns
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn asset_exists(&self, asset_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM assets WHERE id = $1)")
            .bind(asset_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn create(&self, request: &CreateBreakdownRequest) -> AppResult<BreakdownEvent> {
        let event = sqlx::query_as::<_, BreakdownEvent>(
            r#"
            INSERT INTO breakdowns (id, asset_id, breakdown_start, breakdown_end, repair_start, repair_end, is_planned_stop)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, asset_id, breakdown_start, breakdown_end, repair_start, repair_end, is_planned_stop
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.asset_id)
        .bind(request.breakdown_start)
        .bind(request.breakdown_end)
        .bind(request.repair_start)
        .bind(request.repair_end)
        .bind(request.is_planned_stop)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Persiste los timestamps de un evento. Solo actualiza filas aún no finalizadas.
    pub async fn update(&self, event: &BreakdownEvent) -> AppResult<Option<BreakdownEvent>> {
        let updated = sqlx::query_as::<_, BreakdownEvent>(
            r#"
            UPDATE breakdowns SET
                breakdown_end = $2,
                repair_start = $3,
                repair_end = $4,
                is_planned_stop = $5
            WHERE id = $1 AND repair_end IS NULL
            RETURNING id, asset_id, breakdown_start, breakdown_end, repair_start, repair_end, is_planned_stop
            "#,
        )
        .bind(event.id)
        .bind(event.breakdown_end)
        .bind(event.repair_start)
        .bind(event.repair_end)
        .bind(event.is_planned_stop)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}
