use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a001_perk::aggregate::{Perk, PerkId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Строка хранилища перков
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: String,
    pub title: String,
    pub category: String,
    pub discount_percent: Option<f64>,
    pub merchant: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_locked: bool,
    pub is_deleted: bool,
}

impl From<Model> for Perk {
    fn from(m: Model) -> Self {
        Perk {
            id: PerkId::new(m.id),
            title: m.title,
            category: m.category,
            discount_percent: m.discount_percent,
            merchant: m.merchant,
            description: m.description,
            created_at: Some(m.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Результат мягкого удаления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Locked,
}

/// In-memory хранилище перков
#[derive(Debug, Default)]
pub struct PerkRepository {
    rows: RwLock<HashMap<String, Model>>,
}

impl PerkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, model: Model) {
        self.rows.write().await.insert(model.id.clone(), model);
    }

    pub async fn list_all(&self) -> Vec<Perk> {
        let rows = self.rows.read().await;
        let mut items: Vec<Model> = rows.values().filter(|m| !m.is_deleted).cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        items.into_iter().map(Into::into).collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Perk> {
        let rows = self.rows.read().await;
        rows.get(id)
            .filter(|m| !m.is_deleted)
            .cloned()
            .map(Into::into)
    }

    pub async fn soft_delete(&self, id: &str) -> DeleteOutcome {
        let mut rows = self.rows.write().await;
        match rows.get_mut(id) {
            Some(m) if m.is_deleted => DeleteOutcome::NotFound,
            Some(m) if m.is_locked => DeleteOutcome::Locked,
            Some(m) => {
                m.is_deleted = true;
                DeleteOutcome::Deleted
            }
            None => DeleteOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn model(id: &str, day: u32) -> Model {
        Model {
            id: id.to_string(),
            title: format!("Perk {id}"),
            category: "food".to_string(),
            discount_percent: Some(10.0),
            merchant: None,
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            is_locked: false,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn lists_newest_first_without_deleted() {
        let repo = PerkRepository::new();
        repo.insert(model("a", 1)).await;
        repo.insert(model("b", 3)).await;
        repo.insert(model("c", 2)).await;
        assert_eq!(repo.soft_delete("c").await, DeleteOutcome::Deleted);

        let ids: Vec<String> = repo
            .list_all()
            .await
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn deleted_perk_is_not_found() {
        let repo = PerkRepository::new();
        repo.insert(model("a", 1)).await;
        assert!(repo.get_by_id("a").await.is_some());

        assert_eq!(repo.soft_delete("a").await, DeleteOutcome::Deleted);
        assert!(repo.get_by_id("a").await.is_none());
        assert_eq!(repo.soft_delete("a").await, DeleteOutcome::NotFound);
        assert_eq!(repo.soft_delete("missing").await, DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn locked_perk_survives_delete() {
        let repo = PerkRepository::new();
        repo.insert(Model {
            is_locked: true,
            ..model("a", 1)
        })
        .await;
        assert_eq!(repo.soft_delete("a").await, DeleteOutcome::Locked);
        assert!(repo.get_by_id("a").await.is_some());
    }

    #[test]
    fn created_at_is_serialized_as_rfc3339() {
        let perk: Perk = model("a", 5).into();
        assert_eq!(perk.created_at.as_deref(), Some("2024-01-05T00:00:00.000Z"));
    }
}
