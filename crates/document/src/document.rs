//! Document model and the text blocks that make it up.

use chrono::NaiveDate;
use reisekosten_calendar::YearMonth;
use reisekosten_workdays::{CostSummary, Customer, Rates, WorkdayAssignment};

use crate::format::{LINE_DOUBLE, LINE_SINGLE, LINE_WIDTH, amount_line, format_amount, format_date};

/// The two documents produced per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Kilometergelderstattung.
    Mileage,
    /// Verpflegungsmehraufwand.
    MealAllowance,
}

impl DocumentKind {
    /// Both kinds, in output order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Mileage, DocumentKind::MealAllowance];

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Mileage => "Kilometergelderstattung",
            DocumentKind::MealAllowance => "Verpflegungsmehraufwand",
        }
    }

    /// File name, e.g. `02_2026_Reisekosten_Kilometergelderstattung.pdf`.
    pub fn file_name(self, period: YearMonth) -> String {
        format!(
            "{:02}_{}_Reisekosten_{}.pdf",
            period.month(),
            period.year(),
            self.title()
        )
    }
}

/// Everything a document is built from.
#[derive(Debug, Clone, Copy)]
pub struct ReportData<'a> {
    pub customers: &'a [Customer],
    pub assignment: &'a WorkdayAssignment,
    pub costs: &'a CostSummary,
    pub rates: Rates,
}

/// A laid-out document: header, self-contained blocks, footer.
///
/// Every block is one semantic unit (a customer header or one day's entry)
/// and must not be split across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    period: YearMonth,
    header: String,
    blocks: Vec<String>,
    footer: String,
}

impl Document {
    /// Creates a document from pre-built parts.
    pub fn new(
        kind: DocumentKind,
        period: YearMonth,
        header: String,
        blocks: Vec<String>,
        footer: String,
    ) -> Self {
        Self {
            kind,
            period,
            header,
            blocks,
            footer,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn period(&self) -> YearMonth {
        self.period
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// File name of the rendered document.
    pub fn file_name(&self) -> String {
        self.kind.file_name(self.period)
    }
}

/// Builds the document of `kind` for a distributed month.
///
/// Customers without assigned days contribute no blocks.
pub fn build_document(kind: DocumentKind, data: &ReportData<'_>, document_id: &str) -> Document {
    let period = data.assignment.period();
    let header = document_header(
        kind,
        period,
        data.assignment.first_day(),
        data.assignment.last_day(),
        document_id,
    );

    let mut blocks = Vec::with_capacity(data.assignment.total_days() + data.customers.len());
    for (i, customer) in data.customers.iter().enumerate() {
        let days = data.assignment.days_for(i);
        if days.is_empty() {
            continue;
        }
        blocks.push(customer_header(customer));
        blocks.extend(days.iter().map(|&date| match kind {
            DocumentKind::Mileage => mileage_entry(date, customer.distance_km(), data.rates),
            DocumentKind::MealAllowance => meal_allowance_entry(date, data.rates),
        }));
    }

    let total = match kind {
        DocumentKind::Mileage => data.costs.total_mileage(),
        DocumentKind::MealAllowance => data.costs.total_meal_allowance(),
    };

    Document::new(kind, period, header, blocks, document_footer(total))
}

/// Header with date, reference number, title and period.
///
/// The document date is the last assigned day, or the last day of the
/// month when nothing was assigned.
pub fn document_header(
    kind: DocumentKind,
    period: YearMonth,
    first_day: Option<NaiveDate>,
    last_day: Option<NaiveDate>,
    document_id: &str,
) -> String {
    let document_date = last_day
        .or_else(|| period.dates().last())
        .map(format_date)
        .unwrap_or_default();
    let meta = [
        format!("DATUM:   {document_date}"),
        format!("BELEGNR: {document_id}"),
    ];
    let meta_width = meta.iter().map(|m| m.chars().count()).max().unwrap_or(0);
    let indent = " ".repeat(LINE_WIDTH.saturating_sub(meta_width));

    let span = match (first_day, last_day) {
        (Some(first), Some(last)) => format!("{} - {}", format_date(first), format_date(last)),
        _ => "-".to_string(),
    };

    let mut s = String::new();
    for line in &meta {
        s.push_str(&format!("{indent}{line}\n"));
    }
    s.push('\n');
    s.push_str(&format!("Reisekosten {} {period}\n", kind.title()));
    s.push_str(&format!("Zeitraum: {span}\n"));
    s.push_str(LINE_DOUBLE);
    s.push_str("\n\n");
    s
}

/// Trip header for one customer.
pub fn customer_header(customer: &Customer) -> String {
    format!(
        "{}) {}\nVon:    {}\nNach:   {}\nGrund:  {}\n{LINE_SINGLE}\n\n",
        customer.id(),
        customer.name(),
        customer.from(),
        customer.to(),
        customer.reason(),
    )
}

/// One day of mileage reimbursement.
pub fn mileage_entry(date: NaiveDate, distance_km: u32, rates: Rates) -> String {
    let label = format!(
        "Fahrkosten ({distance_km} km x {} EUR):",
        format_amount(rates.km())
    );
    format!(
        "Datum:  {}\n{}\n\n",
        format_date(date),
        amount_line(&label, rates.mileage_per_day(distance_km))
    )
}

/// One day of meal allowance.
pub fn meal_allowance_entry(date: NaiveDate, rates: Rates) -> String {
    format!(
        "Datum:  {}, 07:00 - 17:00\n{}\n\n",
        format_date(date),
        amount_line("Verpflegungsmehraufwand (8h - 24h):", rates.meal_allowance())
    )
}

/// Footer with the document total.
pub fn document_footer(total: f64) -> String {
    format!(
        "{LINE_SINGLE}\n{}\n{LINE_DOUBLE}\n",
        amount_line("GESAMTBETRAG:", total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn assert_contains_all(got: &str, wants: &[&str]) {
        for want in wants {
            assert!(got.contains(want), "missing {want:?} in:\n{got}");
        }
    }

    #[test]
    fn file_names() {
        let period = YearMonth::new(2026, 2).unwrap();
        assert_eq!(
            DocumentKind::Mileage.file_name(period),
            "02_2026_Reisekosten_Kilometergelderstattung.pdf"
        );
        assert_eq!(
            DocumentKind::MealAllowance.file_name(period),
            "02_2026_Reisekosten_Verpflegungsmehraufwand.pdf"
        );
    }

    #[test]
    fn customer_header_lines() {
        let c = Customer::new("1", "Acme Corp", 100)
            .with_route("Stuttgart", "München")
            .with_reason("Projektarbeit");
        assert_contains_all(
            &customer_header(&c),
            &[
                "1) Acme Corp",
                "Von:    Stuttgart",
                "Nach:   München",
                "Grund:  Projektarbeit",
                LINE_SINGLE,
            ],
        );
    }

    #[test]
    fn mileage_entry_text() {
        let got = mileage_entry(date(13), 100, Rates::default());
        assert_contains_all(
            &got,
            &["13.02.2026", "Fahrkosten (100 km x 0,30 EUR)", "30,00 EUR"],
        );
    }

    #[test]
    fn mileage_entry_amounts() {
        for (distance, amount) in [(50, "15,00 EUR"), (1, "0,30 EUR"), (200, "60,00 EUR")] {
            let got = mileage_entry(date(2), distance, Rates::default());
            assert!(got.contains(amount), "{distance} km: missing {amount} in:\n{got}");
        }
    }

    #[test]
    fn meal_allowance_entry_text() {
        let got = meal_allowance_entry(date(13), Rates::default());
        assert_contains_all(
            &got,
            &[
                "13.02.2026",
                "07:00 - 17:00",
                "Verpflegungsmehraufwand (8h - 24h)",
                "14,00 EUR",
            ],
        );
    }

    #[test]
    fn footer_text() {
        assert_contains_all(
            &document_footer(150.0),
            &["GESAMTBETRAG:", "150,00 EUR", LINE_SINGLE, LINE_DOUBLE],
        );
        assert!(document_footer(0.0).contains("0,00 EUR"));
    }

    #[test]
    fn header_text() {
        let period = YearMonth::new(2026, 2).unwrap();
        let got = document_header(
            DocumentKind::Mileage,
            period,
            Some(date(2)),
            Some(date(27)),
            "RK-2026-02-AB12",
        );
        assert_contains_all(
            &got,
            &[
                "DATUM:   27.02.2026",
                "BELEGNR: RK-2026-02-AB12",
                "Reisekosten Kilometergelderstattung 02/2026",
                "Zeitraum: 02.02.2026 - 27.02.2026",
                LINE_DOUBLE,
            ],
        );
        // Metadata block is right-aligned to the line width.
        let belegnr = got.lines().nth(1).unwrap();
        assert_eq!(belegnr.chars().count(), LINE_WIDTH);
    }

    #[test]
    fn header_without_days_uses_month_end() {
        let period = YearMonth::new(2026, 2).unwrap();
        let got = document_header(DocumentKind::MealAllowance, period, None, None, "X");
        assert_contains_all(&got, &["DATUM:   28.02.2026", "Zeitraum: -"]);
    }
}
