// Report layout: word-wrap, pagination and PDF encoding.
// Pure CPU work with no I/O; async callers run `render` inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod page;
pub mod paginator;
pub mod pdf;
pub mod wrap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

// Re-export the public API consumed by other modules (report handlers).
pub use page::{default_page_config, PageConfig};
pub use paginator::{paginate, ReportSection};

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Rejected before layout begins.
    #[error("Invalid layout input: {0}")]
    Input(String),

    /// Serialization failed after layout succeeded. No bytes are returned.
    #[error("PDF encoding failed: {0}")]
    Encoding(#[from] std::io::Error),
}

/// Lays out and encodes a report as PDF bytes.
pub fn render(
    title: &str,
    subject: &str,
    sections: &[ReportSection],
    created_at: Option<DateTime<Utc>>,
    config: &PageConfig,
) -> Result<Vec<u8>, LayoutError> {
    let document = paginate(title, subject, sections, created_at, config)?;
    let bytes = pdf::encode_pdf(&document, config)?;
    debug!(
        "Rendered report for '{subject}': {} page(s), {} line(s), {} bytes",
        document.page_count(),
        document.lines().count(),
        bytes.len()
    );
    Ok(bytes)
}
