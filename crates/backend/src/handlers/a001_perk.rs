use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_perk::dto::{PerkListResponse, PerkResponse};

use crate::domain::a001_perk::service;
use crate::routes::AppState;
use crate::shared::error::ApiError;

/// GET /api/perks
pub async fn list_all(State(state): State<AppState>) -> Json<PerkListResponse> {
    Json(PerkListResponse {
        perks: service::list_all(&state.perks).await,
    })
}

/// GET /api/perks/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PerkResponse>, ApiError> {
    let perk = service::get_by_id(&state.perks, &id).await?;
    Ok(Json(PerkResponse { perk: Some(perk) }))
}

/// DELETE /api/perks/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service::delete(&state.perks, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
