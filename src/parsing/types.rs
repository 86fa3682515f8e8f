//! Error definitions for the parsing pipeline.

use reqwest::StatusCode;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while acquiring a document or converting it through MinerU.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Remote source could not be fetched.
    #[error("Download failed: {reason}")]
    DownloadFailed {
        /// URL that was requested.
        url: String,
        /// Status line or transport error describing the failure.
        reason: String,
    },
    /// Local source does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Path supplied by the caller.
        path: PathBuf,
    },
    /// MinerU answered with a non-200 status.
    #[error("MinerU request failed: HTTP {status}\n{body}")]
    UpstreamStatus {
        /// HTTP status returned by MinerU.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },
    /// MinerU answered 200 with a body that is not JSON.
    #[error("Failed to parse JSON response: {error}\nRaw response: {body}")]
    InvalidJson {
        /// Decoder error message.
        error: String,
        /// Raw response text.
        body: String,
    },
    /// MinerU answered 200 with JSON lacking a string `md_content`.
    #[error("Response missing 'md_content' field.\nRaw response: {response}")]
    MissingContent {
        /// Entire decoded response.
        response: Value,
    },
    /// Local filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// HTTP layer failed before a MinerU response was received.
    #[error("MinerU request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Coarse classification of [`ParseError`] used by callers that render or count failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Fetching a remote source failed.
    Download,
    /// Local source path does not exist.
    NotFound,
    /// MinerU returned a non-200 status.
    UpstreamHttp,
    /// MinerU returned 200 with an unusable body.
    UpstreamMalformed,
    /// Any other failure while running the pipeline.
    Processing,
}

impl ParseError {
    /// Classify the error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::DownloadFailed { .. } => ParseErrorKind::Download,
            Self::NotFound { .. } => ParseErrorKind::NotFound,
            Self::UpstreamStatus { .. } => ParseErrorKind::UpstreamHttp,
            Self::InvalidJson { .. } | Self::MissingContent { .. } => {
                ParseErrorKind::UpstreamMalformed
            }
            Self::Io { .. } | Self::Transport(_) => ParseErrorKind::Processing,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_status_message_embeds_code_and_body() {
        let err = ParseError::UpstreamStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
        assert_eq!(err.kind(), ParseErrorKind::UpstreamHttp);
    }

    #[test]
    fn missing_content_embeds_decoded_response() {
        let err = ParseError::MissingContent {
            response: json!({ "other": "x" }),
        };
        assert!(err.to_string().contains(r#"{"other":"x"}"#));
        assert_eq!(err.kind(), ParseErrorKind::UpstreamMalformed);
    }

    #[test]
    fn not_found_names_the_path() {
        let err = ParseError::NotFound {
            path: PathBuf::from("/nope/report.pdf"),
        };
        assert_eq!(err.to_string(), "File not found: /nope/report.pdf");
        assert_eq!(err.kind(), ParseErrorKind::NotFound);
    }
}
