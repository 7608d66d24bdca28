//! PDF encoding of a laid-out [`Document`].
//!
//! Text is set in the standard (non-embedded) Helvetica faces with
//! WinAnsiEncoding. Characters outside that code page are replaced with `?`;
//! zero-width joiners and variation selectors are dropped. Content streams are
//! zlib-compressed. No timestamps or random IDs are written, so identical
//! documents encode to identical bytes.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::layout::font_metrics::FontFace;
use crate::layout::page::{Document, PageConfig};
use crate::layout::LayoutError;

const FACES: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];
const PRODUCER: &str = "ikigai-api";

/// Serializes the document. Returns the complete file or an error; never a
/// partially written buffer.
pub fn encode_pdf(document: &Document, config: &PageConfig) -> Result<Vec<u8>, LayoutError> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let font_ids: Vec<Ref> = FACES.iter().map(|_| alloc()).collect();
    let page_ids: Vec<Ref> = document.pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = document.pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.document_info(info_id)
        .title(TextStr(&document.title))
        .producer(TextStr(PRODUCER));

    for (face, font_id) in FACES.iter().zip(&font_ids) {
        pdf.type1_font(*font_id)
            .base_font(Name(face.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page) in document.pages.iter().enumerate() {
        let mut content = Content::new();
        for line in &page.lines {
            if line.text.is_empty() {
                continue;
            }
            let baseline = config.page_height_pt - line.y;
            let bytes = encode_win_ansi(&line.text);
            content
                .begin_text()
                .set_font(Name(line.face.resource_name().as_bytes()), line.size_pt)
                .next_line(line.x, baseline)
                .show(Str(&bytes))
                .end_text();
        }
        let raw = content.finish();
        let compressed = compress(&raw)?;
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);

        let mut page_writer = pdf.page(page_ids[i]);
        page_writer
            .media_box(Rect::new(0.0, 0.0, config.page_width_pt, config.page_height_pt))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page_writer.resources();
        let mut fonts = resources.fonts();
        for (face, font_id) in FACES.iter().zip(&font_ids) {
            fonts.pair(Name(face.resource_name().as_bytes()), *font_id);
        }
    }

    Ok(pdf.finish())
}

fn compress(data: &[u8]) -> Result<Vec<u8>, LayoutError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Maps text onto WinAnsiEncoding (Windows-1252) bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let code = c as u32;
        let byte = match c {
            '\t' => Some(b' '),
            _ if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) => {
                Some(code as u8)
            }
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            '\u{200B}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' => None,
            _ => Some(b'?'),
        };
        if let Some(b) = byte {
            out.push(b);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::default_page_config;
    use crate::layout::paginator::{paginate, ReportSection};

    fn sample() -> Document {
        let sections = [
            ReportSection::new("Analise de Perfil", "Pessoa curiosa e empatica."),
            ReportSection::new("Recomendacao Vocacional", "Psicologia\nEducacao"),
        ];
        paginate("Relatorio de Avaliacao", "Ana", &sections, None, &default_page_config())
            .unwrap()
    }

    #[test]
    fn test_output_is_a_complete_pdf_file() {
        let bytes = encode_pdf(&sample(), &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len() - 16..]).to_string();
        assert!(tail.contains("%%EOF"), "missing trailer: {tail}");
    }

    #[test]
    fn test_encoding_is_byte_identical_across_runs() {
        let config = default_page_config();
        let a = encode_pdf(&sample(), &config).unwrap();
        let b = encode_pdf(&sample(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extracted_text_contains_headings_and_body() {
        let bytes = encode_pdf(&sample(), &default_page_config()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Ana"), "extracted: {text}");
        assert!(text.contains("Recomendacao Vocacional"), "extracted: {text}");
        assert!(text.contains("Psicologia"), "extracted: {text}");
    }

    #[test]
    fn test_win_ansi_keeps_portuguese_letters() {
        assert_eq!(encode_win_ansi("ação"), vec![b'a', 0xE7, 0xE3, b'o']);
    }

    #[test]
    fn test_win_ansi_maps_typographic_punctuation() {
        assert_eq!(encode_win_ansi("“—”"), vec![0x93, 0x97, 0x94]);
    }

    #[test]
    fn test_win_ansi_replaces_unsupported_symbols() {
        assert_eq!(encode_win_ansi("🧭 ok"), b"? ok".to_vec());
        assert_eq!(encode_win_ansi("✔\u{FE0F}"), b"?".to_vec());
    }
}
