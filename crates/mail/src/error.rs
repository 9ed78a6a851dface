//! Error types for the reisekosten-mail crate.

/// Error type for all fallible operations in the reisekosten-mail crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MailError {
    /// Returned when a sender or recipient address cannot be parsed.
    #[error("invalid email address {address:?}: {reason}")]
    InvalidAddress {
        /// The rejected address.
        address: String,
        /// Parser message.
        reason: String,
    },

    /// Returned when the message cannot be assembled.
    #[error("failed to build message: {reason}")]
    Build {
        /// Builder message.
        reason: String,
    },

    /// Returned when the SMTP server cannot be reached or rejects the message.
    #[error("SMTP delivery via {host}:{port} failed: {reason}")]
    Transport {
        /// SMTP host.
        host: String,
        /// SMTP port.
        port: u16,
        /// Transport message.
        reason: String,
    },
}
