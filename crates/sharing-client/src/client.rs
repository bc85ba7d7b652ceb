//! HTTP client for the sharing API and the rendered sharing page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::SharingError;
use crate::generation::GenerationReply;
use crate::mask_token;

/// Default sharing API endpoint.
pub const DEFAULT_SHARING_API_URL: &str = "https://300.ya.ru/api/sharing-url";

/// Sharing service operations used by the request pipeline. Tests can substitute another impl.
#[async_trait]
pub trait SharingService: Send + Sync {
    /// Submits an article URL; returns the sharing URL of the page that will hold the summary.
    async fn submit(&self, article_url: &str) -> Result<String, SharingError>;
    /// Fetches the rendered sharing page (no auth) and returns its markup.
    async fn fetch_page(&self, sharing_url: &str) -> Result<String, SharingError>;
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    article_url: &'a str,
}

/// reqwest-based [`SharingService`]. Every request carries the client-wide timeout.
#[derive(Clone)]
pub struct SharingClient {
    http: Client,
    endpoint: String,
    oauth_token: String,
}

impl SharingClient {
    /// Builds a client for `endpoint` authenticating with `oauth_token`; `timeout` bounds every request.
    pub fn new(
        endpoint: String,
        oauth_token: String,
        timeout: Duration,
    ) -> Result<Self, SharingError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            oauth_token,
        })
    }
}

#[async_trait]
impl SharingService for SharingClient {
    #[instrument(skip(self))]
    async fn submit(&self, article_url: &str) -> Result<String, SharingError> {
        info!(
            endpoint = %self.endpoint,
            oauth_token = %mask_token(&self.oauth_token),
            "step: sharing API submit request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.oauth_token))
            .json(&SubmitRequest { article_url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SharingError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(body = %body, "Sharing API reply body");

        match GenerationReply::decode(&body)? {
            GenerationReply::Ready { sharing_url } => {
                info!(sharing_url = %sharing_url, "step: sharing API submit done");
                Ok(sharing_url)
            }
            GenerationReply::Other(payload) => Err(SharingError::Declined {
                payload: payload.to_string(),
            }),
        }
    }

    #[instrument(skip(self))]
    async fn fetch_page(&self, sharing_url: &str) -> Result<String, SharingError> {
        info!("step: sharing page fetch request");

        let response = self.http.get(sharing_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SharingError::PageUnavailable {
                status: status.as_u16(),
            });
        }

        let page = response.text().await?;
        info!(page_len = page.len(), "step: sharing page fetch done");
        Ok(page)
    }
}
