//! Travel expense documents: text layout, reference numbers and PDF output.
//!
//! A [`Document`] is a header, an ordered list of self-contained blocks
//! (one customer header followed by one entry per assigned day) and a
//! footer with the total. [`paginate`] keeps every block on a single page;
//! [`PdfRenderer`] draws the pages with printpdf.

mod document;
mod error;
mod format;
mod id;
mod render;

pub use document::{
    Document, DocumentKind, ReportData, build_document, customer_header, document_footer,
    document_header, meal_allowance_entry, mileage_entry,
};
pub use error::DocumentError;
pub use format::{
    LINE_DOUBLE, LINE_SINGLE, LINE_WIDTH, amount_line, format_amount, format_date, right_align,
};
pub use id::{document_id, document_id_with};
pub use render::{Page, PdfRenderer, Render, paginate};
