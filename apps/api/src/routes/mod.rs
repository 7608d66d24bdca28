pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::players::handlers as players;
use crate::reports::handlers as reports;
use crate::reviews::handlers as reviews;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Players and peer reviews
        .route(
            "/api/v1/players",
            get(players::handle_list_players).post(players::handle_create_player),
        )
        .route("/api/v1/reviews", post(reviews::handle_create_review))
        .route(
            "/api/v1/players/:id/reviews",
            get(reviews::handle_list_reviews),
        )
        // Vocational reports
        .route(
            "/api/v1/reports/generate",
            post(reports::handle_generate_report),
        )
        .route(
            "/api/v1/players/:id/reports",
            get(reports::handle_list_reports),
        )
        .route("/api/v1/reports/:id/pdf", get(reports::handle_report_pdf))
        .route("/api/v1/reports/export", post(reports::handle_export_report))
        // Aggregate analytics
        .route("/api/v1/analytics", get(analytics::handle_analytics))
        .with_state(state)
}
