//! Sharing service config: endpoint, credential, settle delay, HTTP timeout. Loaded from env.

use anyhow::Result;
use sharing_client::DEFAULT_SHARING_API_URL;
use std::env;
use std::time::Duration;

use super::base::non_empty_var;

pub(crate) const DEFAULT_SETTLE_DELAY_SECS: u64 = 3;
pub(crate) const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SharingConfig {
    /// SHARING_API_URL
    pub api_url: String,
    /// OAUTH_TOKEN, sent as `Authorization: OAuth <token>`
    pub oauth_token: String,
    /// SETTLE_DELAY_SECS: wait between receiving the sharing URL and fetching the page
    pub settle_delay_secs: u64,
    /// HTTP_TIMEOUT_SECS: upper bound for each sharing API / page request
    pub http_timeout_secs: u64,
}

impl SharingConfig {
    /// Load from environment variables. OAUTH_TOKEN is required.
    pub fn from_env() -> Result<Self> {
        let oauth_token =
            non_empty_var("OAUTH_TOKEN").ok_or_else(|| anyhow::anyhow!("OAUTH_TOKEN not set"))?;
        let api_url =
            env::var("SHARING_API_URL").unwrap_or_else(|_| DEFAULT_SHARING_API_URL.to_string());
        let settle_delay_secs = env::var("SETTLE_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SETTLE_DELAY_SECS);
        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            oauth_token,
            settle_delay_secs,
            http_timeout_secs,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("SHARING_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
