//! SMTP delivery of the monthly travel expense documents.
//!
//! [`build_message`] assembles the mail (HTML note plus one PDF attachment
//! per document); a [`Mailer`] delivers it. [`SmtpMailer`] uses implicit
//! TLS on port 465 and STARTTLS on every other port.

mod error;
mod mailer;
mod message;

pub use error::MailError;
pub use lettre::Message;
pub use mailer::{IMPLICIT_TLS_PORT, Mailer, SmtpMailer, SmtpSettings};
pub use message::{Attachment, Envelope, build_message, subject};
