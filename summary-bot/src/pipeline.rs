//! Sharing-request pipeline: submit → link-ready reply → settle delay → fetch page → extract summary.
//!
//! Every step can end the request; nothing is retried. Failure details are logged here and reduced
//! to a [`FailureKind`] for the reply.

use std::sync::Arc;
use std::time::Duration;

use sharing_client::{extract_description, FailureKind, SharingError, SharingService};
use tracing::{error, info, instrument, warn};

use crate::core::Chat;
use crate::dispatch::SharingRequest;
use crate::reply::ReplyEmitter;

/// Final outcome of one sharing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharingResult {
    Success {
        sharing_url: String,
        summary_text: String,
    },
    /// The user already has the sharing link; fetching or extracting the summary failed.
    PartialSuccess {
        sharing_url: String,
        kind: FailureKind,
        detail: String,
    },
    /// Failed before a sharing link was obtained.
    Failure { kind: FailureKind, detail: String },
}

impl SharingResult {
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SharingResult::Success { .. } => None,
            SharingResult::PartialSuccess { kind, .. } | SharingResult::Failure { kind, .. } => {
                Some(*kind)
            }
        }
    }

    pub fn sharing_url(&self) -> Option<&str> {
        match self {
            SharingResult::Success { sharing_url, .. }
            | SharingResult::PartialSuccess { sharing_url, .. } => Some(sharing_url),
            SharingResult::Failure { .. } => None,
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            SharingResult::Success { .. } => "success",
            SharingResult::PartialSuccess { .. } => "partial_success",
            SharingResult::Failure { .. } => "failure",
        }
    }
}

/// Runs sharing requests against a [`SharingService`]. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct SharingPipeline {
    service: Arc<dyn SharingService>,
    settle_delay: Duration,
}

impl SharingPipeline {
    /// `settle_delay` is the blind wait between getting the sharing URL and fetching the page; the
    /// service renders the summary asynchronously and has no readiness signal.
    pub fn new(service: Arc<dyn SharingService>, settle_delay: Duration) -> Self {
        Self {
            service,
            settle_delay,
        }
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Executes one request. The link-ready reply (if any) is sent through `emitter` before this
    /// returns; the caller sends the final reply for the returned result.
    #[instrument(skip(self, request, emitter), fields(chat_id = chat.id))]
    pub async fn execute(
        &self,
        request: &SharingRequest,
        chat: &Chat,
        emitter: &ReplyEmitter,
    ) -> SharingResult {
        info!(article_url = %request.article_url, "step: pipeline submit");
        let sharing_url = match self.service.submit(&request.article_url).await {
            Ok(url) => url,
            Err(e) => {
                log_failure(&e, None);
                return SharingResult::Failure {
                    kind: e.kind(),
                    detail: e.to_string(),
                };
            }
        };

        emitter.emit_link_ready(chat, &sharing_url).await;

        info!(
            settle_delay_ms = self.settle_delay.as_millis() as u64,
            "step: pipeline waiting for page to settle"
        );
        tokio::time::sleep(self.settle_delay).await;

        let page = match self.service.fetch_page(&sharing_url).await {
            Ok(page) => page,
            Err(e) => {
                log_failure(&e, Some(&sharing_url));
                return SharingResult::PartialSuccess {
                    sharing_url,
                    kind: e.kind(),
                    detail: e.to_string(),
                };
            }
        };

        let result = match extract_description(&page) {
            Some(summary_text) => SharingResult::Success {
                sharing_url,
                summary_text,
            },
            None => {
                warn!(sharing_url = %sharing_url, "No description meta tag on sharing page");
                SharingResult::PartialSuccess {
                    detail: format!("no description meta tag at {}", sharing_url),
                    sharing_url,
                    kind: FailureKind::ExtractionFailed,
                }
            }
        };
        info!(outcome = result.outcome(), "step: pipeline finished");
        result
    }
}

fn log_failure(err: &SharingError, sharing_url: Option<&str>) {
    let kind = err.kind().as_str();
    match err {
        SharingError::Transport(_) | SharingError::Malformed(_) => {
            error!(kind, sharing_url = ?sharing_url, error = %err, "Sharing request failed");
        }
        _ => {
            warn!(kind, sharing_url = ?sharing_url, error = %err, "Sharing request failed");
        }
    }
}
