//! Axum route handler for aggregate analytics.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analytics::charts::{chart_series, ChartPoint};
use crate::analytics::models::AnalyticsReport;
use crate::analytics::prompts::ANALYTICS_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::complete_json;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, REVIEWS_PLACEHOLDER};
use crate::models::review::ReviewWithNames;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsCharts {
    pub characteristics: Vec<ChartPoint>,
    pub interest_areas: Vec<ChartPoint>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub report: AnalyticsReport,
    pub charts: AnalyticsCharts,
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        let charts = AnalyticsCharts {
            characteristics: chart_series(&report.common_characteristics),
            interest_areas: chart_series(&report.interest_areas),
        };
        Self { report, charts }
    }
}

#[derive(Serialize)]
struct PromptReview<'a> {
    reviewer: &'a str,
    target: &'a str,
    message: &'a str,
}

pub fn build_analytics_prompt(reviews: &[ReviewWithNames]) -> String {
    let items: Vec<PromptReview> = reviews
        .iter()
        .map(|r| PromptReview {
            reviewer: r.reviewer_display_name(),
            target: r.target_display_name(),
            message: &r.message,
        })
        .collect();
    let reviews_json = serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string());

    ANALYTICS_PROMPT_TEMPLATE
        .replace("{review_count}", &reviews.len().to_string())
        .replace(REVIEWS_PLACEHOLDER, &reviews_json)
}

/// GET /api/v1/analytics
///
/// Summarizes every review in the system. With no reviews, returns the empty
/// report without calling the model.
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let reviews = state.reviews.all_reviews().await?;
    if reviews.is_empty() {
        return Ok(Json(AnalyticsReport::empty().into()));
    }

    info!("Running analytics over {} review(s)", reviews.len());

    let prompt = build_analytics_prompt(&reviews);
    let report = complete_json::<AnalyticsReport>(
        state.summarizer.as_ref(),
        &prompt,
        JSON_ONLY_SYSTEM,
    )
    .await?
    .validate(reviews.len())?;

    Ok(Json(report.into()))
}
