//! Vocational report generation pipeline.
//!
//! player lookup → reviews about them → Ikigai prompt → JSON-mode completion
//! → semantic check → persist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, REVIEWS_PLACEHOLDER};
use crate::llm_client::{complete_json, LlmError, Summarizer};
use crate::models::report::{NewReport, ReportRow};
use crate::models::review::ReviewWithNames;
use crate::reports::prompts::IKIGAI_REPORT_PROMPT_TEMPLATE;
use crate::store::{ReportStore, ReviewStore};

/// What the model must return for a report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub analysis: String,
    pub vocational_recommendation: String,
}

impl GeneratedReport {
    fn validate(self) -> Result<Self, LlmError> {
        if self.analysis.trim().is_empty() {
            return Err(LlmError::SchemaMismatch("analysis is empty".to_string()));
        }
        if self.vocational_recommendation.trim().is_empty() {
            return Err(LlmError::SchemaMismatch(
                "vocationalRecommendation is empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// The slice of a review the model sees. Reviewer identity is left out.
#[derive(Serialize)]
struct PromptReview<'a> {
    message: &'a str,
    created_at: DateTime<Utc>,
}

pub fn build_report_prompt(player_name: &str, reviews: &[ReviewWithNames]) -> String {
    let items: Vec<PromptReview> = reviews
        .iter()
        .map(|r| PromptReview {
            message: &r.message,
            created_at: r.created_at,
        })
        .collect();
    let reviews_json = serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string());

    IKIGAI_REPORT_PROMPT_TEMPLATE
        .replace("{player_name}", player_name)
        .replace(REVIEWS_PLACEHOLDER, &reviews_json)
}

pub async fn generate_report(
    reviews_store: &dyn ReviewStore,
    reports_store: &dyn ReportStore,
    summarizer: &dyn Summarizer,
    player_id: Uuid,
) -> Result<ReportRow, AppError> {
    let player = reviews_store
        .get_player(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player {player_id} not found")))?;

    let reviews = reviews_store.reviews_for_target(player_id).await?;
    if reviews.is_empty() {
        return Err(AppError::NotFound(format!(
            "No reviews found for player {player_id}"
        )));
    }

    info!(
        "Generating report for player {} from {} review(s)",
        player.id,
        reviews.len()
    );

    let prompt = build_report_prompt(&player.name, &reviews);
    let generated = complete_json::<GeneratedReport>(summarizer, &prompt, JSON_ONLY_SYSTEM)
        .await?
        .validate()?;

    let row = reports_store
        .save_report(&NewReport {
            player_id,
            analysis: generated.analysis,
            vocational_recommendation: generated.vocational_recommendation,
        })
        .await?;
    Ok(row)
}
