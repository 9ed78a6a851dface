//! Message assembly: envelope, subject and PDF attachments.

use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment as MailAttachment, Mailbox, MultiPart, SinglePart};
use reisekosten_calendar::YearMonth;

use crate::error::MailError;

const BODY_HTML: &str = "Dokumente anbei.<br>";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Sender and recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub from: String,
    pub to: String,
}

/// A rendered document to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

/// Subject line for the report of `period`.
pub fn subject(period: YearMonth) -> String {
    format!("Deine Reisekostenabrechnung {period}")
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Builds the message with an HTML note and every attachment as PDF.
///
/// # Errors
///
/// Returns [`MailError::InvalidAddress`] for malformed addresses and
/// [`MailError::Build`] if the message cannot be assembled.
pub fn build_message(
    envelope: &Envelope,
    subject: &str,
    attachments: &[Attachment],
) -> Result<Message, MailError> {
    let content_type = ContentType::parse(PDF_CONTENT_TYPE).map_err(|e| MailError::Build {
        reason: e.to_string(),
    })?;

    let body = attachments.iter().fold(
        MultiPart::mixed().singlepart(SinglePart::html(BODY_HTML.to_string())),
        |parts, a| {
            parts.singlepart(
                MailAttachment::new(a.file_name.clone()).body(a.data.clone(), content_type.clone()),
            )
        },
    );

    Message::builder()
        .from(mailbox(&envelope.from)?)
        .to(mailbox(&envelope.to)?)
        .subject(subject)
        .multipart(body)
        .map_err(|e| MailError::Build {
            reason: e.to_string(),
        })
}
