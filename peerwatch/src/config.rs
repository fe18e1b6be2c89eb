use std::{
    num::NonZeroU64,
    path::Path,
    time::{Duration, Instant},
};

use peerwatch_rpc_client::RpcClientConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use url::Url;

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file:\n{0}")]
    Read(std::io::Error),
    #[error("failed to parse config:\n{0}")]
    Parse(serde_yaml::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Config file as it is written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// URL of the JSON-RPC endpoint
    #[serde(default)]
    pub url: String,
    /// Seconds between two requests
    #[serde(default)]
    pub interval_seconds: i64,
    /// Optional timeout for a single http request
    #[serde(default)]
    pub http_req_timeout_millis: Option<NonZeroU64>,
}

/// Validated config. Built once at startup and never changed afterwards.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub rpc_client: RpcClientConfig,
    pub interval: Duration,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let cfg = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::Read)?;

        Self::parse(&cfg)
    }

    pub fn parse(cfg: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(cfg).map_err(ConfigError::Parse)
    }

    pub fn validate(self) -> Result<WatchConfig, ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::Validation(
                "url must be provided in the config".to_owned(),
            ));
        }

        let url = Url::parse(&self.url)
            .map_err(|e| ConfigError::Validation(format!("url {:?} is invalid: {}", self.url, e)))?;

        let interval_seconds = u64::try_from(self.interval_seconds)
            .ok()
            .filter(|&secs| secs > 0)
            .ok_or_else(|| {
                ConfigError::Validation("intervalSeconds must be greater than zero".to_owned())
            })?;

        let interval = Duration::from_secs(interval_seconds);
        if Instant::now().checked_add(interval).is_none() {
            return Err(ConfigError::Validation(format!(
                "intervalSeconds {} is too large",
                interval_seconds
            )));
        }

        Ok(WatchConfig {
            rpc_client: RpcClientConfig {
                url,
                http_req_timeout_millis: self.http_req_timeout_millis,
            },
            interval,
        })
    }
}
