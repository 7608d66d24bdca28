//! Persistence seams.
//!
//! Handlers only see these traits. `PgStore` is the production backend;
//! `MemoryStore` backs the handler tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::player::PlayerRow;
use crate::models::report::{NewReport, ReportRow};
use crate::models::review::{NewReview, ReviewRow, ReviewWithNames};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Players and the reviews they write about each other.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn create_player(&self, name: &str) -> Result<PlayerRow, AppError>;

    /// All players, ordered by name.
    async fn list_players(&self) -> Result<Vec<PlayerRow>, AppError>;

    async fn get_player(&self, id: Uuid) -> Result<Option<PlayerRow>, AppError>;

    async fn insert_review(&self, review: &NewReview) -> Result<ReviewRow, AppError>;

    /// Reviews about `target_player_id`, newest first.
    async fn reviews_for_target(
        &self,
        target_player_id: Uuid,
    ) -> Result<Vec<ReviewWithNames>, AppError>;

    /// Every review in the system, newest first.
    async fn all_reviews(&self) -> Result<Vec<ReviewWithNames>, AppError>;
}

/// Generated vocational reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn save_report(&self, report: &NewReport) -> Result<ReportRow, AppError>;

    /// Reports for a player, newest first.
    async fn reports_for_player(&self, player_id: Uuid) -> Result<Vec<ReportRow>, AppError>;

    async fn get_report(&self, id: Uuid) -> Result<Option<ReportRow>, AppError>;
}
