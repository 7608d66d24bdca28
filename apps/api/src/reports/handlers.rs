//! Axum route handlers for the Reports API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::ReportRow;
use crate::reports::export::{render_pdf_response, DeliveryMode, ExportRequest};
use crate::reports::generator::generate_report;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub player_id: Uuid,
}

/// A saved report with its display number. The oldest report is #1.
#[derive(Debug, Serialize)]
pub struct NumberedReport {
    pub number: usize,
    pub id: Uuid,
    pub analysis: String,
    pub vocational_recommendation: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PdfQuery {
    #[serde(default)]
    pub mode: DeliveryMode,
}

/// Numbers a newest-first list so the newest gets the highest number.
pub fn number_reports(reports: Vec<ReportRow>) -> Vec<NumberedReport> {
    let count = reports.len();
    reports
        .into_iter()
        .enumerate()
        .map(|(index, r)| NumberedReport {
            number: count - index,
            id: r.id,
            analysis: r.analysis,
            vocational_recommendation: r.vocational_recommendation,
            created_at: r.created_at,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports/generate
///
/// Summarizes every review about the player into an Ikigai report and saves it.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<(StatusCode, Json<ReportRow>), AppError> {
    let report = generate_report(
        state.reviews.as_ref(),
        state.reports.as_ref(),
        state.summarizer.as_ref(),
        request.player_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/players/:id/reports
pub async fn handle_list_reports(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> Result<Json<Vec<NumberedReport>>, AppError> {
    let reports = state.reports.reports_for_player(player_id).await?;
    Ok(Json(number_reports(reports)))
}

/// GET /api/v1/reports/:id/pdf?mode=download|share
pub async fn handle_report_pdf(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Query(query): Query<PdfQuery>,
) -> Result<Response, AppError> {
    let report = state
        .reports
        .get_report(report_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))?;

    let player = state
        .reviews
        .get_player(report.player_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player {} not found", report.player_id)))?;

    let request = ExportRequest {
        subject_name: player.name,
        analysis_text: report.analysis,
        recommendation_text: report.vocational_recommendation,
        created_at: Some(report.created_at),
    };
    render_pdf_response(request, query.mode, state.page_config.clone()).await
}

/// POST /api/v1/reports/export?mode=download|share
///
/// Renders caller-supplied report text without touching the store.
pub async fn handle_export_report(
    State(state): State<AppState>,
    Query(query): Query<PdfQuery>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    render_pdf_response(request, query.mode, state.page_config.clone()).await
}
