//! Pagination and PDF output.

use std::iter;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::document::Document;
use crate::error::DocumentError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const FONT_SIZE_PT: f32 = 11.0;

/// Turns a [`Document`] into bytes.
pub trait Render {
    /// Renders `document`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the backend fails.
    fn render(&self, document: &Document) -> Result<Vec<u8>, DocumentError>;
}

/// One output page as plain text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Splits a document into pages of at most `lines_per_page` lines.
///
/// The header opens the first page. Each block, and the footer, starts a
/// new page when it does not fit on the current one, so blocks are never
/// split. Only a block taller than a whole page continues across pages.
/// Always returns at least one page.
pub fn paginate(document: &Document, lines_per_page: usize) -> Vec<Page> {
    let capacity = lines_per_page.max(1);
    let sections = iter::once(document.header())
        .chain(document.blocks().iter().map(String::as_str))
        .chain(iter::once(document.footer()));

    let mut pages = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (i, section) in sections.enumerate() {
        let lines: Vec<&str> = section.lines().collect();
        let is_header = i == 0;
        if !is_header && !current.is_empty() && current.len() + lines.len() > capacity {
            pages.push(Page {
                lines: std::mem::take(&mut current),
            });
        }
        for line in lines {
            if current.len() == capacity {
                pages.push(Page {
                    lines: std::mem::take(&mut current),
                });
            }
            current.push(line.to_string());
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(Page { lines: current });
    }
    pages
}

/// A4 portrait PDF in 11pt Courier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Lines that fit between the top and bottom margins.
    pub fn lines_per_page(&self) -> usize {
        ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / LINE_HEIGHT_MM) as usize
    }
}

impl Render for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, DocumentError> {
        let file_name = document.file_name();

        let pages = paginate(document, self.lines_per_page());
        debug!(file = %file_name, n_pages = pages.len(), "rendering PDF");

        let (doc, first_page, first_layer) = PdfDocument::new(
            document.kind().title(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(pdf_error(&file_name))?;

        for (i, page) in pages.iter().enumerate() {
            let (page_idx, layer_idx) = if i == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
            };
            let layer = doc.get_page(page_idx).get_layer(layer_idx);
            for (row, line) in page.lines().iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let y = PAGE_HEIGHT_MM - MARGIN_MM - (row as f32 + 1.0) * LINE_HEIGHT_MM;
                layer.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
        }

        doc.save_to_bytes().map_err(pdf_error(&file_name))
    }
}

fn pdf_error<E: std::fmt::Display>(file_name: &str) -> impl Fn(E) -> DocumentError + '_ {
    move |e| DocumentError::Pdf {
        file_name: file_name.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentKind;
    use reisekosten_calendar::YearMonth;

    fn doc(header: &str, blocks: &[&str], footer: &str) -> Document {
        Document::new(
            DocumentKind::Mileage,
            YearMonth::new(2026, 2).unwrap(),
            header.to_string(),
            blocks.iter().map(|b| b.to_string()).collect(),
            footer.to_string(),
        )
    }

    #[test]
    fn empty_document_has_one_page() {
        let pages = paginate(&doc("", &[], ""), 10);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines().is_empty());
    }

    #[test]
    fn block_moves_to_next_page_instead_of_splitting() {
        // 3 header lines + 2 + 2 fills 7 of 8; the next 2-line block moves.
        let d = doc("h1\nh2\nh3\n", &["a1\na2\n", "b1\nb2\n", "c1\nc2\n"], "f\n");
        let pages = paginate(&d, 8);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines(), &["h1", "h2", "h3", "a1", "a2", "b1", "b2"]);
        assert_eq!(pages[1].lines(), &["c1", "c2", "f"]);
    }

    #[test]
    fn oversized_block_gets_fresh_page_then_continues() {
        let d = doc("h\n", &["1\n2\n3\n4\n5\n"], "");
        let pages = paginate(&d, 3);
        assert_eq!(pages[0].lines(), &["h"]);
        assert_eq!(pages[1].lines(), &["1", "2", "3"]);
        assert_eq!(pages[2].lines(), &["4", "5"]);
    }

    #[test]
    fn pdf_has_magic_bytes() {
        let d = doc("Test Header\n", &["Block 1\nLine 2\n", "Block 2\n"], "Footer\n");
        let bytes = PdfRenderer.render(&d).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pdf_from_empty_document() {
        let bytes = PdfRenderer.render(&doc("", &[], "")).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn a4_line_capacity() {
        assert_eq!(PdfRenderer.lines_per_page(), 55);
    }
}
