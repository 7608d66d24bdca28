//! Axum route handlers for peer reviews.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::review::{NewReview, ReviewRow, ReviewWithNames};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub reviewer_id: Uuid,
    pub target_player_id: Uuid,
    pub message: String,
}

/// A review as shown on the target's page.
#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewer_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewWithNames> for ReviewView {
    fn from(review: ReviewWithNames) -> Self {
        Self {
            reviewer_name: review.reviewer_display_name().to_string(),
            id: review.id,
            reviewer_id: review.reviewer_id,
            message: review.message,
            created_at: review.created_at,
        }
    }
}

impl CreateReviewRequest {
    fn validate(self) -> Result<NewReview, AppError> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("message cannot be empty".to_string()));
        }
        if self.reviewer_id == self.target_player_id {
            return Err(AppError::Validation(
                "players cannot review themselves".to_string(),
            ));
        }
        Ok(NewReview {
            reviewer_id: self.reviewer_id,
            target_player_id: self.target_player_id,
            message: message.to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reviews
pub async fn handle_create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewRow>), AppError> {
    let review = request.validate()?;

    for id in [review.reviewer_id, review.target_player_id] {
        if state.reviews.get_player(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Player {id} not found")));
        }
    }

    let row = state.reviews.insert_review(&review).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/players/:id/reviews
///
/// Reviews about the player, newest first.
pub async fn handle_list_reviews(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewView>>, AppError> {
    let reviews = state.reviews.reviews_for_target(player_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewView::from).collect()))
}
