use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Display name used when a review's author no longer exists.
pub const ANONYMOUS_REVIEWER: &str = "Anônimo";
/// Display name used when a review's target no longer exists.
pub const UNKNOWN_TARGET: &str = "Desconhecido";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub target_player_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a review. `message` is already trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub reviewer_id: Uuid,
    pub target_player_id: Uuid,
    pub message: String,
}

/// A review joined with both players' display names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewWithNames {
    pub id: Uuid,
    pub reviewer_id: Uuid,
    pub target_player_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub reviewer_name: Option<String>,
    pub target_name: Option<String>,
}

impl ReviewWithNames {
    pub fn reviewer_display_name(&self) -> &str {
        self.reviewer_name.as_deref().unwrap_or(ANONYMOUS_REVIEWER)
    }

    pub fn target_display_name(&self) -> &str {
        self.target_name.as_deref().unwrap_or(UNKNOWN_TARGET)
    }
}
