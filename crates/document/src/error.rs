//! Error types for the reisekosten-document crate.

/// Error type for all fallible operations in the reisekosten-document crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    /// Returned when the PDF backend fails to build or serialise a document.
    #[error("PDF rendering failed for {file_name}: {reason}")]
    Pdf {
        /// File name of the document being rendered.
        file_name: String,
        /// Backend error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_pdf() {
        let err = DocumentError::Pdf {
            file_name: "a.pdf".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "PDF rendering failed for a.pdf: boom");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DocumentError>();
    }
}
