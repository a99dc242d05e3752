use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::domain::a001_perk::{repository::PerkRepository, service};
use crate::handlers;
use crate::shared::config::Config;
use crate::shared::logger::request_logger;

/// Общее состояние обработчиков
#[derive(Clone, Default)]
pub struct AppState {
    pub perks: Arc<PerkRepository>,
}

impl AppState {
    /// Состояние с перками из конфигурации
    pub async fn seeded(config: &Config) -> Self {
        let state = Self::default();
        let count = service::seed(&state.perks, &config.seed).await;
        tracing::info!("seeded {} perks", count);
        state
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/perks", get(handlers::a001_perk::list_all))
        .route(
            "/api/perks/:id",
            get(handlers::a001_perk::get_by_id).delete(handlers::a001_perk::delete),
        )
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
