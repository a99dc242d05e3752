//! Perk Details - Model Layer
//!
//! API access and the browser capabilities the details page depends on.
//! Each capability is a trait so the view model can run against test doubles.

use crate::shared::api_utils::{api_url, encode_segment};
use async_trait::async_trait;
use contracts::domain::a001_perk::aggregate::{Perk, PerkId};
use contracts::domain::a001_perk::dto::{ApiErrorBody, PerkListResponse, PerkResponse};
use contracts::shared::routes::{api_perk_path, API_PERKS_PATH};
use gloo_net::http::{Request, Response};
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;
use thiserror::Error;

/// Failure of a perk API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server-supplied text, if any.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    /// 2xx response without a perk in the body.
    #[error("response contained no perk")]
    MissingPerk,
}

impl ApiError {
    /// Text that may be shown to the user as is.
    ///
    /// Transport and decode details stay in the log; callers substitute their
    /// own fallback when this returns `None`.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Server { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            ApiError::MissingPerk => Some("Perk not found".to_string()),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Data access for perks.
#[async_trait(?Send)]
pub trait PerkApi {
    async fn read(&self, id: &PerkId) -> Result<Perk, ApiError>;
    async fn remove(&self, id: &PerkId) -> Result<(), ApiError>;
    async fn list(&self) -> Result<Vec<Perk>, ApiError>;
}

/// `PerkApi` over HTTP (gloo-net / fetch).
#[derive(Clone, Copy, Default)]
pub struct HttpPerkApi;

impl HttpPerkApi {
    pub fn new() -> Self {
        Self
    }

    fn perk_url(id: &PerkId) -> String {
        api_url(&api_perk_path(&encode_segment(id.as_str())))
    }
}

/// Turns a non-2xx response into `ApiError::Server`, keeping the body message.
async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|body| body.message),
        Err(e) => {
            log::warn!("failed to read error body (HTTP {}): {}", status, e);
            None
        }
    };
    ApiError::Server { status, message }
}

#[async_trait(?Send)]
impl PerkApi for HttpPerkApi {
    async fn read(&self, id: &PerkId) -> Result<Perk, ApiError> {
        let response = Request::get(&Self::perk_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        let body: PerkResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body.perk.ok_or(ApiError::MissingPerk)
    }

    async fn remove(&self, id: &PerkId) -> Result<(), ApiError> {
        let response = Request::delete(&Self::perk_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(response).await);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Perk>, ApiError> {
        let response = Request::get(&api_url(API_PERKS_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(response).await);
        }

        let body: PerkListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.perks)
    }
}

/// Programmatic navigation.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// `Navigator` backed by the leptos router.
///
/// Must be created inside a component rendered under `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn from_context() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str, options: NavigateOptions| navigate(path, options)),
        }
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Blocking yes/no prompt.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`; no window means "declined".
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        if let Some(win) = web_sys::window() {
            win.confirm_with_message(message).unwrap_or(false)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_to_user() {
        let err = ApiError::Server {
            status: 404,
            message: Some("Perk not found".into()),
        };
        assert_eq!(err.user_message().as_deref(), Some("Perk not found"));
    }

    #[test]
    fn blank_or_missing_server_message_is_not_shown() {
        let blank = ApiError::Server {
            status: 500,
            message: Some("  ".into()),
        };
        let missing = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(blank.user_message(), None);
        assert_eq!(missing.user_message(), None);
        assert_eq!(ApiError::Transport("offline".into()).user_message(), None);
        assert_eq!(ApiError::Decode("eof".into()).user_message(), None);
    }

    #[test]
    fn missing_perk_reads_as_not_found() {
        assert_eq!(
            ApiError::MissingPerk.user_message().as_deref(),
            Some("Perk not found")
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Cannot delete: in use".into()),
        };
        assert_eq!(err.to_string(), "HTTP 409: Cannot delete: in use");
    }
}
