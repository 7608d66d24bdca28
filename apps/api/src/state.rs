use std::sync::Arc;

use crate::layout::PageConfig;
use crate::llm_client::Summarizer;
use crate::store::{ReportStore, ReviewStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators are built once in `main` and held behind traits so tests can
/// swap in the in-memory store and a scripted summarizer.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn ReviewStore>,
    pub reports: Arc<dyn ReportStore>,
    pub summarizer: Arc<dyn Summarizer>,
    /// Page geometry for PDF export.
    pub page_config: PageConfig,
}
