//! In-memory store for handler tests.
//!
//! Timestamps come from a fake clock that advances one second per insert, so
//! "newest first" ordering is deterministic.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::player::PlayerRow;
use crate::models::report::{NewReport, ReportRow};
use crate::models::review::{NewReview, ReviewRow, ReviewWithNames};
use crate::store::{ReportStore, ReviewStore};

#[derive(Default)]
struct Inner {
    ticks: i64,
    players: Vec<PlayerRow>,
    reviews: Vec<ReviewRow>,
    reports: Vec<ReportRow>,
}

impl Inner {
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }

    fn with_names(&self, review: &ReviewRow) -> ReviewWithNames {
        let name_of = |id: Uuid| {
            self.players
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
        };
        ReviewWithNames {
            id: review.id,
            reviewer_id: review.reviewer_id,
            target_player_id: review.target_player_id,
            message: review.message.clone(),
            created_at: review.created_at,
            reviewer_name: name_of(review.reviewer_id),
            target_name: name_of(review.target_player_id),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops a player row while keeping their reviews, as a deleted account would.
    pub async fn remove_player(&self, id: Uuid) {
        self.inner.write().await.players.retain(|p| p.id != id);
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn create_player(&self, name: &str) -> Result<PlayerRow, AppError> {
        let mut inner = self.inner.write().await;
        let player = PlayerRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: inner.now(),
        };
        inner.players.push(player.clone());
        Ok(player)
    }

    async fn list_players(&self) -> Result<Vec<PlayerRow>, AppError> {
        let mut players = self.inner.read().await.players.clone();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    async fn get_player(&self, id: Uuid) -> Result<Option<PlayerRow>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .players
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, AppError> {
        let mut inner = self.inner.write().await;
        let row = ReviewRow {
            id: Uuid::new_v4(),
            reviewer_id: review.reviewer_id,
            target_player_id: review.target_player_id,
            message: review.message.clone(),
            created_at: inner.now(),
        };
        inner.reviews.push(row.clone());
        Ok(row)
    }

    async fn reviews_for_target(
        &self,
        target_player_id: Uuid,
    ) -> Result<Vec<ReviewWithNames>, AppError> {
        let inner = self.inner.read().await;
        let mut reviews: Vec<_> = inner
            .reviews
            .iter()
            .filter(|r| r.target_player_id == target_player_id)
            .map(|r| inner.with_names(r))
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn all_reviews(&self) -> Result<Vec<ReviewWithNames>, AppError> {
        let inner = self.inner.read().await;
        let mut reviews: Vec<_> = inner.reviews.iter().map(|r| inner.with_names(r)).collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn save_report(&self, report: &NewReport) -> Result<ReportRow, AppError> {
        let mut inner = self.inner.write().await;
        let row = ReportRow {
            id: Uuid::new_v4(),
            player_id: report.player_id,
            analysis: report.analysis.clone(),
            vocational_recommendation: report.vocational_recommendation.clone(),
            created_at: inner.now(),
        };
        inner.reports.push(row.clone());
        Ok(row)
    }

    async fn reports_for_player(&self, player_id: Uuid) -> Result<Vec<ReportRow>, AppError> {
        let mut reports: Vec<_> = self
            .inner
            .read()
            .await
            .reports
            .iter()
            .filter(|r| r.player_id == player_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn get_report(&self, id: Uuid) -> Result<Option<ReportRow>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .reports
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}
