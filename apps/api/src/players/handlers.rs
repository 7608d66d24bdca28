//! Axum route handlers for players.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::player::PlayerRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

/// POST /api/v1/players
pub async fn handle_create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerRow>), AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let player = state.reviews.create_player(name).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/v1/players
pub async fn handle_list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    Ok(Json(state.reviews.list_players().await?))
}
