//! The monthly run: distribute, aggregate, build, render, deliver.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use reisekosten_calendar::YearMonth;
use reisekosten_document::{
    DocumentKind, PdfRenderer, Render, ReportData, build_document, document_id,
};
use reisekosten_mail::{Attachment, Envelope, Mailer, SmtpMailer, build_message, subject};
use reisekosten_workdays::{Customer, Policy, Rates, aggregate, distribute};

use crate::cli::Cli;
use crate::config;
use crate::convert;

/// Runs the full pipeline for the month selected on the command line.
pub fn run(cli: &Cli) -> Result<()> {
    let period = cli
        .period
        .unwrap_or_else(|| YearMonth::of(Local::now().date_naive()));
    let _run = info_span!("run", %period).entered();

    let path = config::resolve_path(cli.config.as_deref())?;
    info!(path = %path.display(), "loading configuration");
    let config = config::load(&path)?;

    let customers = convert::build_customers(&config);
    let policy = convert::build_policy(&config);
    let rates = convert::build_rates(&config.rates)?;

    let attachments = render_reports(period, &customers, policy, rates, &PdfRenderer)?;

    match &cli.out_dir {
        Some(dir) => write_attachments(dir, &attachments),
        None => {
            let mailer = SmtpMailer::new(convert::build_smtp_settings(&config.smtp))
                .context("failed to set up SMTP transport")?;
            let envelope = convert::build_envelope(&config.email);
            send_report(&mailer, &envelope, period, &attachments)
        }
    }
}

/// Distributes the month, computes costs and renders both documents.
///
/// Every document is rendered before anything is returned, so a rendering
/// failure never leaves a partial set for delivery.
pub fn render_reports(
    period: YearMonth,
    customers: &[Customer],
    policy: Policy,
    rates: Rates,
    renderer: &dyn Render,
) -> Result<Vec<Attachment>> {
    let assignment = distribute(period, customers, policy)
        .with_context(|| format!("failed to distribute business days for {period}"))?;
    info!(
        n_customers = customers.len(),
        n_days = assignment.total_days(),
        "business days distributed"
    );

    let costs = aggregate(customers, &assignment, rates);
    info!(
        mileage = costs.total_mileage(),
        meal_allowance = costs.total_meal_allowance(),
        "costs aggregated"
    );

    let data = ReportData {
        customers,
        assignment: &assignment,
        costs: &costs,
        rates,
    };

    DocumentKind::ALL
        .iter()
        .map(|&kind| -> Result<Attachment> {
            let id = document_id(period);
            let document = build_document(kind, &data, &id);
            let bytes = renderer
                .render(&document)
                .with_context(|| format!("failed to render {}", document.file_name()))?;
            info!(document = %document.file_name(), id = %id, bytes = bytes.len(), "rendered");
            Ok(Attachment::new(document.file_name(), bytes))
        })
        .collect()
}

/// Writes every attachment into `dir`, creating it if needed.
pub fn write_attachments(dir: &Path, attachments: &[Attachment]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    for attachment in attachments {
        let path = dir.join(&attachment.file_name);
        fs::write(&path, &attachment.data)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "document written");
    }
    Ok(())
}

/// Mails all attachments in a single message.
pub fn send_report(
    mailer: &dyn Mailer,
    envelope: &Envelope,
    period: YearMonth,
    attachments: &[Attachment],
) -> Result<()> {
    let message = build_message(envelope, &subject(period), attachments)
        .context("failed to build email")?;
    mailer
        .send(&message)
        .with_context(|| format!("failed to send report to {}", envelope.to))?;
    info!(to = %envelope.to, n_attachments = attachments.len(), "report sent");
    Ok(())
}
