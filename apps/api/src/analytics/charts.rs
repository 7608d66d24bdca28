//! Bar-chart series for the analytics dashboard.
//!
//! Labels are truncated for the axis; the full text rides along for tooltips.
//! Values rank items by position: the first of `n` gets `n`, the last gets 1.

use serde::Serialize;

pub const MAX_LABEL_CHARS: usize = 20;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub full_name: String,
    pub value: usize,
}

/// Truncates to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn chart_series(items: &[String]) -> Vec<ChartPoint> {
    let len = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ChartPoint {
            name: truncate_label(item, MAX_LABEL_CHARS),
            full_name: item.clone(),
            value: len - index,
        })
        .collect()
}
