//! Error types for habit service requests.
//!
//! Every variant is a transport-level failure from the caller's point of
//! view: the card stays in place and is flagged as not persisted.

/// Errors that can occur while talking to the habit service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    #[error("request to habit service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("habit service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The service answered `{"success": false}`.
    #[error("habit service rejected the habit{}", format_reason(.message.as_deref()))]
    Rejected {
        /// Optional explanation sent by the service.
        message: Option<String>,
    },

    /// The configured base URL cannot be used.
    #[error("invalid habit service url: {0}")]
    InvalidBaseUrl(String),
}

fn format_reason(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

/// A specialized Result type for habit service operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_status() {
        let err = Error::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "habit service returned status 500: boom");
    }

    #[test]
    fn error_display_rejected() {
        let err = Error::Rejected { message: None };
        assert_eq!(err.to_string(), "habit service rejected the habit");

        let err = Error::Rejected {
            message: Some("duplicate name".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "habit service rejected the habit: duplicate name"
        );
    }

    #[test]
    fn error_display_invalid_url() {
        let err = Error::InvalidBaseUrl("nope".to_string());
        assert_eq!(err.to_string(), "invalid habit service url: nope");
    }
}
