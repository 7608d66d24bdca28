use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::player::PlayerRow;
use crate::models::report::{NewReport, ReportRow};
use crate::models::review::{NewReview, ReviewRow, ReviewWithNames};
use crate::store::{ReportStore, ReviewStore};

const REVIEW_WITH_NAMES_SELECT: &str = r#"
    SELECT r.id, r.reviewer_id, r.target_player_id, r.message, r.created_at,
           reviewer.name AS reviewer_name,
           target.name AS target_name
    FROM reviews r
    LEFT JOIN players reviewer ON reviewer.id = r.reviewer_id
    LEFT JOIN players target ON target.id = r.target_player_id
"#;

/// PostgreSQL-backed store. Tables are described in `schema.sql`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn create_player(&self, name: &str) -> Result<PlayerRow, AppError> {
        let player = sqlx::query_as::<_, PlayerRow>(
            "INSERT INTO players (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        info!("Created player {} ({})", player.id, player.name);
        Ok(player)
    }

    async fn list_players(&self) -> Result<Vec<PlayerRow>, AppError> {
        Ok(sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, created_at FROM players ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_player(&self, id: Uuid) -> Result<Option<PlayerRow>, AppError> {
        Ok(sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, created_at FROM players WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (reviewer_id, target_player_id, message)
            VALUES ($1, $2, $3)
            RETURNING id, reviewer_id, target_player_id, message, created_at
            "#,
        )
        .bind(review.reviewer_id)
        .bind(review.target_player_id)
        .bind(&review.message)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted review {} from {} about {}",
            row.id, row.reviewer_id, row.target_player_id
        );
        Ok(row)
    }

    async fn reviews_for_target(
        &self,
        target_player_id: Uuid,
    ) -> Result<Vec<ReviewWithNames>, AppError> {
        let sql = format!(
            "{REVIEW_WITH_NAMES_SELECT} WHERE r.target_player_id = $1 ORDER BY r.created_at DESC"
        );
        Ok(sqlx::query_as::<_, ReviewWithNames>(&sql)
            .bind(target_player_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn all_reviews(&self) -> Result<Vec<ReviewWithNames>, AppError> {
        let sql = format!("{REVIEW_WITH_NAMES_SELECT} ORDER BY r.created_at DESC");
        Ok(sqlx::query_as::<_, ReviewWithNames>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl ReportStore for PgStore {
    async fn save_report(&self, report: &NewReport) -> Result<ReportRow, AppError> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            INSERT INTO reports (player_id, analysis, vocational_recommendation)
            VALUES ($1, $2, $3)
            RETURNING id, player_id, analysis, vocational_recommendation, created_at
            "#,
        )
        .bind(report.player_id)
        .bind(&report.analysis)
        .bind(&report.vocational_recommendation)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved report {} for player {}", row.id, row.player_id);
        Ok(row)
    }

    async fn reports_for_player(&self, player_id: Uuid) -> Result<Vec<ReportRow>, AppError> {
        Ok(sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, player_id, analysis, vocational_recommendation, created_at
            FROM reports
            WHERE player_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_report(&self, id: Uuid) -> Result<Option<ReportRow>, AppError> {
        Ok(sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, player_id, analysis, vocational_recommendation, created_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
