//! PDF export of vocational reports.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::{self, PageConfig, ReportSection};

pub const REPORT_TITLE: &str = "Relatório de Avaliação";
pub const ANALYSIS_LABEL: &str = "Análise de Perfil";
pub const RECOMMENDATION_LABEL: &str = "Recomendação Vocacional";

/// Body of `POST /api/v1/reports/export`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub subject_name: String,
    pub analysis_text: String,
    pub recommendation_text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// How the browser should treat the PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Save to disk.
    #[default]
    Download,
    /// Open in place so the platform share sheet can pick it up.
    Share,
}

/// `relatorio_<subject with spaces as underscores>_<epoch millis | none>.pdf`
pub fn export_filename(subject_name: &str, created_at: Option<DateTime<Utc>>) -> String {
    let stamp = created_at
        .map(|ts| ts.timestamp_millis().to_string())
        .unwrap_or_else(|| "none".to_string());
    format!("relatorio_{}_{}.pdf", subject_name.replace(' ', "_"), stamp)
}

/// Builds the `Content-Disposition` value. The plain `filename` is an ASCII
/// fallback; `filename*` carries the exact UTF-8 name.
pub fn content_disposition(filename: &str, mode: DeliveryMode) -> String {
    let kind = match mode {
        DeliveryMode::Download => "attachment",
        DeliveryMode::Share => "inline",
    };
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "{kind}; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

/// Renders the report off the async runtime and wraps it in a PDF response.
pub async fn render_pdf_response(
    request: ExportRequest,
    mode: DeliveryMode,
    config: PageConfig,
) -> Result<Response, AppError> {
    let filename = export_filename(&request.subject_name, request.created_at);

    let bytes = tokio::task::spawn_blocking(move || {
        let sections = [
            ReportSection::new(ANALYSIS_LABEL, request.analysis_text),
            ReportSection::new(RECOMMENDATION_LABEL, request.recommendation_text),
        ];
        layout::render(
            REPORT_TITLE,
            &request.subject_name,
            &sections,
            request.created_at,
            &config,
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&filename, mode),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filename_replaces_spaces_and_uses_epoch_millis() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            export_filename("Ana Maria Silva", Some(ts)),
            "relatorio_Ana_Maria_Silva_1746100800000.pdf"
        );
        assert_eq!(export_filename("Ana", None), "relatorio_Ana_none.pdf");
    }

    #[test]
    fn test_content_disposition_modes() {
        let save = content_disposition("relatorio_Ana_none.pdf", DeliveryMode::Download);
        assert!(save.starts_with("attachment; filename=\"relatorio_Ana_none.pdf\""));

        let share = content_disposition("relatorio_Ana_none.pdf", DeliveryMode::Share);
        assert!(share.starts_with("inline;"));
    }

    #[test]
    fn test_content_disposition_encodes_non_ascii_names() {
        let value = content_disposition("relatorio_João_none.pdf", DeliveryMode::Download);
        assert!(value.contains("filename=\"relatorio_Jo_o_none.pdf\""));
        assert!(value.contains("filename*=UTF-8''relatorio_Jo%C3%A3o_none.pdf"));
        assert!(value.is_ascii());
    }

    #[test]
    fn test_export_request_uses_camel_case() {
        let request: ExportRequest = serde_json::from_str(
            r#"{"subjectName":"Ana","analysisText":"a","recommendationText":"b"}"#,
        )
        .unwrap();
        assert_eq!(request.subject_name, "Ana");
        assert!(request.created_at.is_none());
    }
}
