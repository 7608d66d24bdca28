//! Greedy word-wrap with hard line breaks.
//!
//! Every `\n` in the input ends the current line, even when the line is not
//! full. Runs of whitespace inside a paragraph collapse to a single space.
//! A word wider than the line is placed alone on its own line; it is never
//! hyphen-split.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` to `max_width_pt` at `size_pt`. Text that is empty or only
/// whitespace yields no lines; an empty paragraph between two `\n` yields an
/// empty line.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, metrics, size_pt, max_width_pt, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
    lines: &mut Vec<String>,
) {
    let space_w = metrics.space_width * size_pt;
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in paragraph.split_whitespace() {
        let word_w = metrics.measure_pt(word, size_pt);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    // Final (possibly empty) line of the paragraph.
    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, FontFace};

    fn wrap(text: &str, width: f32) -> Vec<String> {
        wrap_text(text, get_metrics(FontFace::Regular), 10.0, width)
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap("", 200.0).is_empty());
    }

    #[test]
    fn test_whitespace_only_text_has_no_lines() {
        assert!(wrap("   ", 200.0).is_empty());
        assert!(wrap(" \n\t\r\n", 200.0).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("Lorem ipsum", 200.0), vec!["Lorem ipsum"]);
    }

    #[test]
    fn test_newline_forces_break_even_when_line_has_room() {
        assert_eq!(wrap("primeira\nsegunda", 500.0), vec!["primeira", "segunda"]);
    }

    #[test]
    fn test_blank_paragraph_is_preserved() {
        assert_eq!(wrap("a\n\nb", 500.0), vec!["a", "", "b"]);
    }

    #[test]
    fn test_crlf_is_treated_as_newline() {
        assert_eq!(wrap("a\r\nb", 500.0), vec!["a", "b"]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let metrics = get_metrics(FontFace::Regular);
        let text = "Lorem ipsum ".repeat(40);
        let lines = wrap(&text, 150.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                metrics.measure_pt(line, 10.0) <= 150.0,
                "line '{line}' exceeds width"
            );
        }
    }

    #[test]
    fn test_wrapping_keeps_every_word_in_order() {
        let text = "um dois tres quatro cinco seis sete oito nove dez";
        let lines = wrap(text, 60.0);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_oversized_word_sits_alone_unsplit() {
        let word = "a".repeat(200);
        let text = format!("curta {word} fim");
        let lines = wrap(&text, 100.0);
        assert_eq!(lines, vec!["curta".to_string(), word, "fim".to_string()]);
    }

    #[test]
    fn test_newline_mid_wrap_breaks_at_exact_point() {
        let text = format!("{}\nfinal", "palavra ".repeat(30).trim_end());
        let lines = wrap(&text, 120.0);
        assert_eq!(lines.last().map(String::as_str), Some("final"));
        assert!(lines[lines.len() - 2].ends_with("palavra"));
    }
}
