//! Message delivery.

use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::error::MailError;

/// Port on which the server expects implicit TLS; every other port uses
/// STARTTLS.
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

/// Delivers a finished message.
pub trait Mailer {
    /// Sends `message`.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] if delivery fails.
    fn send(&self, message: &Message) -> Result<(), MailError>;
}

/// [`Mailer`] backed by a blocking lettre SMTP transport.
pub struct SmtpMailer {
    settings: SmtpSettings,
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Creates the transport for `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] if the TLS parameters for the host
    /// cannot be set up.
    pub fn new(settings: SmtpSettings) -> Result<Self, MailError> {
        let builder = if settings.port == IMPLICIT_TLS_PORT {
            SmtpTransport::relay(&settings.host)
        } else {
            SmtpTransport::starttls_relay(&settings.host)
        }
        .map_err(|e| transport_error(&settings, e))?
        .port(settings.port);

        let builder = if settings.user.is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
        };

        Ok(Self {
            transport: builder.build(),
            settings,
        })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &Message) -> Result<(), MailError> {
        info!(host = %self.settings.host, port = self.settings.port, "sending email");
        self.transport
            .send(message)
            .map_err(|e| transport_error(&self.settings, e))?;
        info!("email sent");
        Ok(())
    }
}

fn transport_error(settings: &SmtpSettings, e: impl std::fmt::Display) -> MailError {
    MailError::Transport {
        host: settings.host.clone(),
        port: settings.port,
        reason: e.to_string(),
    }
}
