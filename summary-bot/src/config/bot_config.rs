//! BotConfig: BaseConfig + SharingConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, SharingConfig};

/// Bot config: BaseConfig + SharingConfig. Read once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub sharing: SharingConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the env token.
    /// Fails when either required secret is missing. Call validate() after load.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let sharing = SharingConfig::from_env()?;
        Ok(Self { base, sharing })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.sharing.validate()
    }

    pub fn sharing(&self) -> &SharingConfig {
        &self.sharing
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn log_dir(&self) -> &str {
        &self.base.log_dir
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
}
