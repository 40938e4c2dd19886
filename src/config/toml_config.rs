use crate::config::ClientConfig;
use crate::utils::error::{MergeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// `json` 或 `compact`
    pub format: Option<String>,
}

fn env_placeholder() -> Result<&'static Regex> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PLACEHOLDER.get() {
        return Ok(re);
    }
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| MergeError::ConfigError {
        message: format!("env var pattern: {}", e),
    })?;
    Ok(PLACEHOLDER.get_or_init(|| re))
}

/// `${NAME}` 換成環境變數；沒設定的保留原字串，交給 `validate` 判斷
fn expand_env(raw: &str) -> Result<String> {
    let expanded = env_placeholder()?.replace_all(raw, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(expanded.into_owned())
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("📄 loading client config from {}", path.as_ref().display());
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(&expand_env(raw)?).map_err(|e| MergeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_client_config(self) -> ClientConfig {
        self.client
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

/// 變數替換後仍留著 `${...}` 代表環境變數沒有設定
pub(crate) fn ensure_resolved(field: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(MergeError::MissingConfigError {
            field: format!("{} ({})", field, value),
        });
    }
    Ok(())
}

impl TomlConfig {
    pub fn validate_logging(&self) -> Result<()> {
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !matches!(format, "json" | "compact") {
                return Err(MergeError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: json, compact".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        ensure_resolved("client.api_key", &self.client.api_key)?;
        self.validate_logging()?;
        self.client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[client]
api_key = "sk_test_123"
account_token = "acct_abc"
environment = "sandbox"
timeout_seconds = 30

[client.headers]
X-Request-Source = "nightly-sync"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.client.api_key, "sk_test_123");
        assert_eq!(config.client.account_token.as_deref(), Some("acct_abc"));
        assert_eq!(config.client.environment, Environment::Sandbox);
        assert_eq!(config.client.timeout_seconds, Some(30));
        assert_eq!(
            config.client.headers.get("X-Request-Source").map(String::as_str),
            Some("nightly-sync")
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[client]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.client.environment, Environment::Production);
        assert!(config.client.account_token.is_none());
        assert!(config.logging.is_none());
        assert!(!config.json_logging());
    }

    #[test]
    fn test_unresolved_env_var_fails_validation() {
        let toml_content = r#"
[client]
api_key = "${MERGE_CLIENT_TEST_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.client.api_key, "${MERGE_CLIENT_TEST_UNSET_VAR}");
        assert!(matches!(
            config.validate(),
            Err(MergeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[client").unwrap_err();
        assert!(matches!(err, MergeError::ConfigError { .. }));
    }
}
