use serde::{Deserialize, Serialize};

use super::aggregate::Perk;

/// Ответ `GET /api/perks/:id`.
///
/// `perk` опционален: тело без перка клиент считает ошибкой загрузки,
/// а не поводом упасть на десериализации.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerkResponse {
    #[serde(default)]
    pub perk: Option<Perk>,
}

/// Ответ `GET /api/perks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerkListResponse {
    #[serde(default)]
    pub perks: Vec<Perk>,
}

/// Тело любой ошибки API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_perk_field_is_none() {
        let resp: PerkResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.perk.is_none());
    }

    #[test]
    fn error_body_without_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert_eq!(body.message, None);
        assert_eq!(
            serde_json::to_string(&ApiErrorBody::new("Perk not found")).unwrap(),
            r#"{"message":"Perk not found"}"#
        );
    }
}
