//! Page geometry and the laid-out document model.
//!
//! Vertical offsets are measured downward from the top edge of the page and
//! mark the text baseline. The PDF encoder flips them into PDF user space.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFace;
use crate::layout::LayoutError;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry and vertical rhythm for exported reports. All lengths in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,

    pub title_size_pt: f32,
    pub title_step_pt: f32,
    pub subject_size_pt: f32,
    pub subject_step_pt: f32,
    /// Advance after the timestamp line.
    pub timestamp_step_pt: f32,
    /// Advance used in place of the timestamp line when there is no timestamp.
    pub no_timestamp_step_pt: f32,

    pub heading_size_pt: f32,
    pub heading_step_pt: f32,
    pub body_size_pt: f32,
    pub line_height_pt: f32,
    /// Extra advance after the last line of a section.
    pub section_gap_pt: f32,

    /// Offset from UTC used when printing the creation timestamp.
    pub utc_offset_minutes: i32,
}

/// Exclusive bound on `utc_offset_minutes` in either direction (24 hours).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

/// Returns the default page config.
///
/// Assumes: A4 portrait (595 × 842 pt), 20 mm margins, 11pt body text.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 595.0,
        page_height_pt: 842.0,
        margin_top_pt: 57.0,
        margin_bottom_pt: 57.0,
        margin_left_pt: 57.0,
        margin_right_pt: 57.0,
        title_size_pt: 20.0,
        title_step_pt: 28.0,
        subject_size_pt: 12.0,
        subject_step_pt: 18.0,
        timestamp_step_pt: 18.0,
        no_timestamp_step_pt: 8.0,
        heading_size_pt: 14.0,
        heading_step_pt: 22.0,
        body_size_pt: 11.0,
        line_height_pt: 16.0,
        section_gap_pt: 12.0,
        utc_offset_minutes: -180,
    }
}

impl PageConfig {
    /// Horizontal space available to a line.
    pub fn usable_width(&self) -> f32 {
        self.page_width_pt - self.margin_left_pt - self.margin_right_pt
    }

    /// Largest vertical offset a line may be placed at.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height_pt - self.margin_bottom_pt
    }

    /// Space a heading of `heading_lines` wrapped lines needs, together with
    /// its first body line, so it is not left alone at the page bottom.
    pub fn orphan_threshold(&self, heading_lines: usize) -> f32 {
        heading_lines as f32 * self.heading_step_pt + self.line_height_pt
    }

    /// Rejects geometries the paginator cannot honour.
    ///
    /// A fresh page must hold a heading plus one body line, and every step
    /// must move the cursor forward.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let steps = [
            self.title_step_pt,
            self.subject_step_pt,
            self.timestamp_step_pt,
            self.heading_step_pt,
            self.line_height_pt,
        ];
        if steps.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(LayoutError::Input(
                "vertical steps must be positive".to_string(),
            ));
        }
        if self.no_timestamp_step_pt < 0.0 || self.section_gap_pt < 0.0 {
            return Err(LayoutError::Input(
                "spacing must not be negative".to_string(),
            ));
        }
        if !(self.usable_width() > 0.0) {
            return Err(LayoutError::Input(
                "horizontal margins leave no usable width".to_string(),
            ));
        }
        let usable_height = self.bottom_limit() - self.margin_top_pt;
        if !(usable_height >= self.orphan_threshold(1)) {
            return Err(LayoutError::Input(format!(
                "page fits {usable_height}pt between margins, a heading and one line need {}pt",
                self.orphan_threshold(1)
            )));
        }
        if self.utc_offset_minutes.unsigned_abs() >= MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(LayoutError::Input(format!(
                "UTC offset of {} minutes is outside ±24h",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Laid-out document
// ────────────────────────────────────────────────────────────────────────────

/// Typographic role of a placed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRole {
    Title,
    Subject,
    Timestamp,
    Heading,
    Body,
}

/// A line of text fixed at a position on its page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge of the text.
    pub x: f32,
    /// Baseline offset from the top edge.
    pub y: f32,
    pub role: LineRole,
    pub face: FontFace,
    pub size_pt: f32,
}

/// A single page: its lines in placement order plus the cursor left after the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
    pub cursor: f32,
}

impl Page {
    pub(crate) fn new(top: f32) -> Self {
        Self {
            lines: Vec::new(),
            cursor: top,
        }
    }
}

/// The full laid-out report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every placed line in reading order, paired with its page index.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &PlacedLine)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.lines.iter().map(move |line| (i, line)))
    }
}
