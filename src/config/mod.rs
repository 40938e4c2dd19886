#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::{MergeError, Result};
use crate::utils::validation::{
    validate_header, validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const USER_AGENT: &str = concat!("merge-client/", env!("CARGO_PKG_VERSION"));
pub const ACCOUNT_TOKEN_HEADER: &str = "X-Account-Token";

/// Merge 的部署區域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Environment {
    #[default]
    Production,
    ProductionEu,
    ProductionAp,
    Sandbox,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.merge.dev",
            Environment::ProductionEu => "https://api-eu.merge.dev",
            Environment::ProductionAp => "https://api-ap.merge.dev",
            Environment::Sandbox => "https://api-sandbox.merge.dev",
        }
    }
}

impl FromStr for Environment {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "production_eu" | "eu" => Ok(Environment::ProductionEu),
            "production_ap" | "ap" => Ok(Environment::ProductionAp),
            "sandbox" => Ok(Environment::Sandbox),
            _ => Err(MergeError::InvalidConfigValueError {
                field: "environment".to_string(),
                value: s.to_string(),
                reason: "Expected one of: production, production_eu, production_ap, sandbox"
                    .to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default)]
    pub account_token: Option<String>,
    #[serde(default)]
    pub environment: Environment,
    /// 覆寫環境預設的 base URL（自架 proxy 或測試伺服器）
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            account_token: None,
            environment: Environment::default(),
            base_url: None,
            timeout_seconds: None,
            headers: BTreeMap::new(),
        }
    }

    /// 從環境變數載入：`MERGE_API_KEY`（必填）、`MERGE_ACCOUNT_TOKEN`、
    /// `MERGE_ENVIRONMENT`、`MERGE_BASE_URL`、`MERGE_TIMEOUT_SECONDS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(None, |name| std::env::var(name).ok())
    }

    /// 以 `lookup` 讀取同一組變數；`MERGE_API_KEY` 缺少時改用 `fallback_api_key`
    pub fn from_lookup<F>(fallback_api_key: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("MERGE_API_KEY")
            .or(fallback_api_key)
            .ok_or_else(|| MergeError::MissingConfigError {
                field: "MERGE_API_KEY".to_string(),
            })?;

        let mut config = Self::new(api_key);
        config.account_token = lookup("MERGE_ACCOUNT_TOKEN");
        config.base_url = lookup("MERGE_BASE_URL");

        if let Some(env) = lookup("MERGE_ENVIRONMENT") {
            config.environment = env.parse()?;
        }

        if let Some(timeout) = lookup("MERGE_TIMEOUT_SECONDS") {
            let seconds = timeout
                .parse::<u64>()
                .map_err(|e| MergeError::InvalidConfigValueError {
                    field: "MERGE_TIMEOUT_SECONDS".to_string(),
                    value: timeout.clone(),
                    reason: e.to_string(),
                })?;
            config.timeout_seconds = Some(seconds);
        }

        Ok(config)
    }

    pub fn with_account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("base_url", self.base_url())?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 600)?;
        }
        if let Some(token) = &self.account_token {
            validate_non_empty_string("account_token", token)?;
        }
        for (name, value) in &self.headers {
            validate_header(name, value)?;
        }
        Ok(())
    }
}

/// 單次呼叫的覆寫選項
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub api_key: Option<String>,
    pub account_token: Option<String>,
    pub additional_headers: Vec<(String, String)>,
    pub additional_query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_query.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
