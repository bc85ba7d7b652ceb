//! Error types for the sharing client and the failure taxonomy shown to users.

use thiserror::Error;

/// Failure classes of a sharing request. Each maps to one fixed user-facing sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The generation service answered with a non-2xx status or a non-success payload.
    ServiceRejected,
    /// Network error, timeout, or a reply that could not be decoded.
    TransportError,
    /// The sharing page answered with a non-2xx status.
    FetchFailed,
    /// The sharing page has no usable `description` meta tag.
    ExtractionFailed,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ServiceRejected => "service_rejected",
            FailureKind::TransportError => "transport_error",
            FailureKind::FetchFailed => "fetch_failed",
            FailureKind::ExtractionFailed => "extraction_failed",
        }
    }
}

/// Errors from talking to the sharing service or fetching the sharing page.
#[derive(Error, Debug)]
pub enum SharingError {
    #[error("Sharing API returned HTTP {status}")]
    Rejected { status: u16 },

    #[error("Sharing API declined the request: {payload}")]
    Declined { payload: String },

    #[error("Malformed sharing API reply: {0}")]
    Malformed(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Sharing page returned HTTP {status}")]
    PageUnavailable { status: u16 },
}

impl SharingError {
    /// The user-facing failure class for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            SharingError::Rejected { .. } | SharingError::Declined { .. } => {
                FailureKind::ServiceRejected
            }
            SharingError::Malformed(_) | SharingError::Transport(_) => FailureKind::TransportError,
            SharingError::PageUnavailable { .. } => FailureKind::FetchFailed,
        }
    }
}
