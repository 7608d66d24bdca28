//! Paginator: lays a report out onto fixed-size pages.
//!
//! # Layout rules
//! - Title, subject and (optional) timestamp open the first page.
//! - Each section starts with its heading; if less than the whole wrapped
//!   heading plus one body line of space remains, the section moves to a new
//!   page so the heading is never orphaned.
//! - No line is placed below `page height − bottom margin`; a line that would be
//!   starts a new page at the top margin instead.
//! - Layout is a pure function of its inputs.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::layout::page::{Document, LineRole, Page, PageConfig, PlacedLine};
use crate::layout::wrap::wrap_text;
use crate::layout::LayoutError;

/// A labelled block of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub label: String,
    pub body: String,
}

impl ReportSection {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

/// Lays out a report. Fails only on malformed input.
pub fn paginate(
    title: &str,
    subject: &str,
    sections: &[ReportSection],
    created_at: Option<DateTime<Utc>>,
    config: &PageConfig,
) -> Result<Document, LayoutError> {
    if title.trim().is_empty() {
        return Err(LayoutError::Input("title must not be empty".to_string()));
    }
    if subject.trim().is_empty() {
        return Err(LayoutError::Input("subject must not be empty".to_string()));
    }
    if sections.is_empty() {
        return Err(LayoutError::Input(
            "at least one section is required".to_string(),
        ));
    }
    config.validate()?;

    let mut builder = PageBuilder::new(config);

    builder.place_wrapped(
        title,
        LineRole::Title,
        FontFace::Bold,
        config.title_size_pt,
        config.title_step_pt,
    );
    builder.place_wrapped(
        subject,
        LineRole::Subject,
        FontFace::Regular,
        config.subject_size_pt,
        config.subject_step_pt,
    );

    match created_at {
        Some(ts) => builder.place_wrapped(
            &format!(
                "Gerado em {}",
                format_timestamp(ts, config.utc_offset_minutes)
            ),
            LineRole::Timestamp,
            FontFace::Regular,
            config.body_size_pt,
            config.timestamp_step_pt,
        ),
        None => builder.advance(config.no_timestamp_step_pt),
    }

    for section in sections {
        let heading = wrap_text(
            &section.label,
            get_metrics(FontFace::Bold),
            config.heading_size_pt,
            config.usable_width(),
        );
        builder.ensure_room_for_heading(heading.len());
        builder.place_lines(
            heading,
            LineRole::Heading,
            FontFace::Bold,
            config.heading_size_pt,
            config.heading_step_pt,
        );
        builder.place_wrapped(
            &section.body,
            LineRole::Body,
            FontFace::Regular,
            config.body_size_pt,
            config.line_height_pt,
        );
        builder.advance(config.section_gap_pt);
    }

    Ok(Document {
        title: title.to_string(),
        pages: builder.finish(),
    })
}

/// Formats a timestamp the way reports print it: `dd/mm/yyyy HH:MM` in the
/// configured offset.
pub fn format_timestamp(ts: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    ts.with_timezone(&offset)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Page builder
// ────────────────────────────────────────────────────────────────────────────

struct PageBuilder<'a> {
    config: &'a PageConfig,
    finished: Vec<Page>,
    current: Page,
}

impl<'a> PageBuilder<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            finished: Vec::new(),
            current: Page::new(config.margin_top_pt),
        }
    }

    fn break_page(&mut self) {
        let full = std::mem::replace(&mut self.current, Page::new(self.config.margin_top_pt));
        self.finished.push(full);
    }

    fn advance(&mut self, step: f32) {
        self.current.cursor += step;
    }

    /// Starts a new page when the remaining space cannot hold every line of a
    /// wrapped heading and its first body line. A page with nothing on it yet
    /// is kept, so an oversized heading cannot produce a blank page.
    fn ensure_room_for_heading(&mut self, heading_lines: usize) {
        let remaining = self.config.bottom_limit() - self.current.cursor;
        if remaining < self.config.orphan_threshold(heading_lines)
            && !self.current.lines.is_empty()
        {
            self.break_page();
        }
    }

    fn place_wrapped(
        &mut self,
        text: &str,
        role: LineRole,
        face: FontFace,
        size_pt: f32,
        step: f32,
    ) {
        let lines = wrap_text(text, get_metrics(face), size_pt, self.config.usable_width());
        self.place_lines(lines, role, face, size_pt, step);
    }

    fn place_lines(
        &mut self,
        lines: Vec<String>,
        role: LineRole,
        face: FontFace,
        size_pt: f32,
        step: f32,
    ) {
        for line in lines {
            self.place(line, role, face, size_pt, step);
        }
    }

    fn place(&mut self, text: String, role: LineRole, face: FontFace, size_pt: f32, step: f32) {
        if self.current.cursor > self.config.bottom_limit() {
            self.break_page();
        }
        self.current.lines.push(PlacedLine {
            text,
            x: self.config.margin_left_pt,
            y: self.current.cursor,
            role,
            face,
            size_pt,
        });
        self.current.cursor += step;
    }

    fn finish(mut self) -> Vec<Page> {
        self.finished.push(self.current);
        self.finished
    }
}
