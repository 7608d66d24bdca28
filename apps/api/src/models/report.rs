use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub player_id: Uuid,
    pub analysis: String,
    pub vocational_recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for persisting a generated report.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub player_id: Uuid,
    pub analysis: String,
    pub vocational_recommendation: String,
}
