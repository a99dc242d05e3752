use super::repository::{DeleteOutcome, Model, PerkRepository};
use crate::shared::config::SeedPerk;
use crate::shared::error::ApiError;
use chrono::Utc;
use contracts::domain::a001_perk::aggregate::Perk;
use uuid::Uuid;

pub const IN_USE_MESSAGE: &str = "Cannot delete: in use";

/// Заполнение хранилища начальными перками из конфигурации
pub async fn seed(repo: &PerkRepository, seed: &[SeedPerk]) -> usize {
    for s in seed {
        let id = s
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        repo.insert(Model {
            id,
            title: s.title.clone(),
            category: s.category.clone(),
            discount_percent: s.discount_percent,
            merchant: s.merchant.clone(),
            description: s.description.clone(),
            created_at: s.created_at.unwrap_or_else(Utc::now),
            is_locked: s.locked,
            is_deleted: false,
        })
        .await;
    }
    seed.len()
}

pub async fn list_all(repo: &PerkRepository) -> Vec<Perk> {
    repo.list_all().await
}

pub async fn get_by_id(repo: &PerkRepository, id: &str) -> Result<Perk, ApiError> {
    repo.get_by_id(id).await.ok_or(ApiError::NotFound)
}

/// Мягкое удаление перка
pub async fn delete(repo: &PerkRepository, id: &str) -> Result<(), ApiError> {
    match repo.soft_delete(id).await {
        DeleteOutcome::Deleted => {
            tracing::info!("perk {} deleted", id);
            Ok(())
        }
        DeleteOutcome::NotFound => Err(ApiError::NotFound),
        DeleteOutcome::Locked => Err(ApiError::Conflict(IN_USE_MESSAGE.to_string())),
    }
}
