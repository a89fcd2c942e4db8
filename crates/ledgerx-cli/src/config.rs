/*
[INPUT]:  Optional YAML configuration file and LEDGERX_JWT environment variable
[OUTPUT]: Resolved client configuration and credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use ledgerx_adapter::{ClientConfig, Credentials, LedgerxClient};
use serde::{Deserialize, Serialize};

/// Environment variable holding the exchange JWT
pub const JWT_ENV_VAR: &str = "LEDGERX_JWT";

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// JWT issued by the exchange; `LEDGERX_JWT` takes precedence
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_trade_base_url")]
    pub trade_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            jwt_token: None,
            api_base_url: default_api_base_url(),
            trade_base_url: default_trade_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.ledgerx.com".to_string()
}

fn default_trade_base_url() -> String {
    "https://trade.ledgerx.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse YAML config")?;
        Ok(config)
    }

    /// Apply the JWT from the environment, if present and non-empty
    pub fn with_jwt_override(mut self, jwt_token: Option<String>) -> Self {
        if let Some(token) = jwt_token.filter(|token| !token.trim().is_empty()) {
            self.jwt_token = Some(token);
        }
        self
    }

    pub fn credentials(&self) -> Result<Credentials> {
        match self.jwt_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(Credentials::new(token)),
            _ => bail!("no JWT configured; set {JWT_ENV_VAR} or jwt_token in the config file"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn build_client(&self) -> Result<LedgerxClient> {
        let client = LedgerxClient::with_config_and_base_urls(
            self.client_config(),
            self.credentials()?,
            &self.api_base_url,
            &self.trade_base_url,
        )
        .context("build LedgerX client")?;
        Ok(client)
    }
}
