use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::breakdown::{BreakdownEvent, CreateBreakdownRequest, UpdateBreakdownRequest};
use crate::repositories::breakdown_repository::BreakdownRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct BreakdownController {
    repository: BreakdownRepository,
}

impl BreakdownController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BreakdownRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateBreakdownRequest) -> AppResult<BreakdownEvent> {
        request.validate()?;

        if !self.repository.asset_exists(request.asset_id).await? {
            return Err(not_found_error("Asset", &request.asset_id.to_string()));
        }

        let event = self.repository.create(&request).await?;
        log::info!("🔧 Falla registrada {} para activo {}", event.id, event.asset_id);
        Ok(event)
    }

    /// Completa timestamps; un evento con `repair_end` ya no se modifica
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBreakdownRequest,
    ) -> AppResult<BreakdownEvent> {
        request.validate()?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Breakdown", &id.to_string()))?;

        let merged = existing.apply_update(&request)?;

        let updated = self.repository.update(&merged).await?.ok_or_else(|| {
            AppError::Conflict(format!("Breakdown {} was finalized concurrently", id))
        })?;

        if updated.is_finalized() {
            log::info!("✅ Falla {} finalizada", id);
        }
        Ok(updated)
    }
}
