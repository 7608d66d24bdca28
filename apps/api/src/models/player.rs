use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
