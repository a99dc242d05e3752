use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор перка.
///
/// Сервер выдаёт строковые идентификаторы произвольного вида, поэтому
/// никакой валидации формата здесь нет.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PerkId(pub String);

impl PerkId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PerkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PerkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PerkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Перк — скидка или бонус от партнёра.
///
/// Клиент только читает перк; изменение и удаление выполняет сервер.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    #[serde(alias = "_id")]
    pub id: PerkId,

    pub title: String,

    /// Открытый словарь: неизвестные категории допустимы.
    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO 8601 строка в том виде, в каком её отдал сервер.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Perk {
    /// Скидка, которую стоит показывать: только строго положительная.
    pub fn visible_discount(&self) -> Option<f64> {
        self.discount_percent.filter(|d| *d > 0.0)
    }

    pub fn merchant(&self) -> Option<&str> {
        non_blank(self.merchant.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    pub fn created_at(&self) -> Option<&str> {
        non_blank(self.created_at.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "id": "42",
            "title": "Coffee",
            "category": "food",
            "discountPercent": 20,
            "merchant": "Cafe X",
            "createdAt": "2024-01-05T00:00:00Z"
        }"#;
        let perk: Perk = serde_json::from_str(json).unwrap();
        assert_eq!(perk.id.as_str(), "42");
        assert_eq!(perk.discount_percent, Some(20.0));
        assert_eq!(perk.merchant(), Some("Cafe X"));
        assert_eq!(perk.description(), None);
        assert_eq!(perk.created_at(), Some("2024-01-05T00:00:00Z"));
    }

    #[test]
    fn accepts_mongo_style_id() {
        let perk: Perk = serde_json::from_str(r#"{"_id":"abc","title":"T"}"#).unwrap();
        assert_eq!(perk.id, PerkId::from("abc"));
        assert_eq!(perk.category, "");
    }

    #[test]
    fn zero_and_missing_discount_are_hidden() {
        let mut perk: Perk = serde_json::from_str(r#"{"id":"1","title":"T"}"#).unwrap();
        assert_eq!(perk.visible_discount(), None);
        perk.discount_percent = Some(0.0);
        assert_eq!(perk.visible_discount(), None);
        perk.discount_percent = Some(20.0);
        assert_eq!(perk.visible_discount(), Some(20.0));
    }

    #[test]
    fn blank_optional_text_counts_as_absent() {
        let perk: Perk =
            serde_json::from_str(r#"{"id":"1","title":"T","merchant":"  ","description":""}"#)
                .unwrap();
        assert_eq!(perk.merchant(), None);
        assert_eq!(perk.description(), None);
    }
}
