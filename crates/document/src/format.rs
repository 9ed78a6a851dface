//! Number, date and column formatting for document text.

use chrono::NaiveDate;

/// Width of a document line in characters.
pub const LINE_WIDTH: usize = 60;

/// Single horizontal rule.
pub const LINE_SINGLE: &str = "------------------------------------------------------------";

/// Double horizontal rule.
pub const LINE_DOUBLE: &str = "============================================================";

/// Formats a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Formats an amount with two decimals and a comma separator, without
/// thousands grouping (`1234.56` becomes `"1234,56"`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}").replace('.', ",")
}

/// Pads `s` on the left to `width` characters. Longer strings are returned
/// unchanged.
pub fn right_align(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

/// Builds a full-width line with `label` on the left and `amount` EUR on
/// the right.
pub fn amount_line(label: &str, amount: f64) -> String {
    let value = format!("{} EUR", format_amount(amount));
    let room = LINE_WIDTH.saturating_sub(label.chars().count());
    format!("{label}{}", right_align(&value, room))
}
