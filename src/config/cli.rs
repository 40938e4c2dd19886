use crate::config::toml_config::ensure_resolved;
use crate::config::{ClientConfig, Environment, TomlConfig};
use crate::models::common::PassthroughMethod;
use crate::resources::Vertical;
use crate::utils::error::{MergeError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "merge-client")]
#[command(about = "Command line access to the Merge unified API")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overrides config file and MERGE_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Linked account token
    #[arg(long, global = true)]
    pub account_token: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub environment: Option<Environment>,

    /// Override the environment base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List a resource, e.g. `list ticketing tickets --query page_size=10`
    List {
        #[arg(value_enum)]
        vertical: Vertical,
        resource: String,
        /// Query parameter as key=value, repeatable
        #[arg(short, long = "query", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },
    /// Retrieve one object by id
    Retrieve {
        #[arg(value_enum)]
        vertical: Vertical,
        resource: String,
        id: String,
        #[arg(short, long = "query", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
    },
    /// Show the linked account behind the account token
    AccountDetails {
        #[arg(value_enum)]
        vertical: Vertical,
    },
    /// List linked accounts in the organization
    LinkedAccounts {
        #[arg(value_enum)]
        vertical: Vertical,
    },
    /// Send a request straight to the third-party API
    Passthrough {
        #[arg(value_enum)]
        vertical: Vertical,
        #[arg(value_parser = parse_method)]
        method: PassthroughMethod,
        path: String,
        /// Raw request body
        #[arg(long)]
        data: Option<String>,
    },
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔或環境變數載入的值
    pub fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(token) = &self.account_token {
            config.account_token = Some(token.clone());
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        config
    }

    /// 設定來源優先順序：命令列 > TOML 檔 > 環境變數，合併後才驗證
    pub fn resolve_config<F>(&self, toml: Option<TomlConfig>, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match toml {
            Some(toml) => {
                toml.validate_logging()?;
                toml.into_client_config()
            }
            None => ClientConfig::from_lookup(self.api_key.clone(), env)?,
        };

        let config = self.apply_overrides(base);
        ensure_resolved("client.api_key", &config.api_key)?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(MergeError::InvalidConfigValueError {
            field: "query".to_string(),
            value: raw.to_string(),
            reason: "Expected key=value".to_string(),
        }),
    }
}

fn parse_method(raw: &str) -> Result<PassthroughMethod> {
    serde_json::from_value(serde_json::Value::String(raw.to_ascii_uppercase())).map_err(|_| {
        MergeError::InvalidConfigValueError {
            field: "method".to_string(),
            value: raw.to_string(),
            reason: "Expected GET, OPTIONS, HEAD, POST, PUT, PATCH or DELETE".to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_command() {
        let cli = CliConfig::try_parse_from([
            "merge-client",
            "list",
            "ticketing",
            "tickets",
            "--query",
            "page_size=10",
            "-q",
            "status=OPEN",
        ])
        .unwrap();
        match cli.command {
            Command::List {
                vertical,
                resource,
                query,
            } => {
                assert_eq!(vertical, Vertical::Ticketing);
                assert_eq!(resource, "tickets");
                assert_eq!(
                    query,
                    vec![
                        ("page_size".to_string(), "10".to_string()),
                        ("status".to_string(), "OPEN".to_string())
                    ]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_passthrough_method() {
        let cli = CliConfig::try_parse_from([
            "merge-client",
            "passthrough",
            "filestorage",
            "get",
            "/files",
        ])
        .unwrap();
        match cli.command {
            Command::Passthrough {
                vertical, method, ..
            } => {
                assert_eq!(vertical, Vertical::FileStorage);
                assert_eq!(method, PassthroughMethod::Get);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_win() {
        let cli = CliConfig::try_parse_from([
            "merge-client",
            "--api-key",
            "flag-key",
            "--environment",
            "sandbox",
            "account-details",
            "hris",
        ])
        .unwrap();
        let config = cli.apply_overrides(ClientConfig::new("file-key"));
        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.account_token, None);
    }

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    fn account_details_cli(flags: &[&str]) -> CliConfig {
        let mut args = vec!["merge-client"];
        args.extend_from_slice(flags);
        args.extend_from_slice(&["account-details", "hris"]);
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_flag_api_key_keeps_other_env_settings() {
        let cli = account_details_cli(&["--api-key", "flag-key"]);
        let env = env_of(&[
            ("MERGE_ACCOUNT_TOKEN", "acct"),
            ("MERGE_ENVIRONMENT", "sandbox"),
            ("MERGE_TIMEOUT_SECONDS", "15"),
        ]);
        let config = cli.resolve_config(None, env).unwrap();

        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.account_token.as_deref(), Some("acct"));
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.timeout_seconds, Some(15));
    }

    #[test]
    fn test_flag_beats_env_api_key() {
        let cli = account_details_cli(&["--api-key", "flag-key"]);
        let env = env_of(&[("MERGE_API_KEY", "env-key")]);
        assert_eq!(cli.resolve_config(None, env).unwrap().api_key, "flag-key");
    }

    #[test]
    fn test_bad_env_value_is_reported() {
        let cli = account_details_cli(&["--api-key", "flag-key"]);
        let env = env_of(&[("MERGE_ENVIRONMENT", "mars")]);
        assert!(matches!(
            cli.resolve_config(None, env),
            Err(MergeError::InvalidConfigValueError { ref field, .. }) if field == "environment"
        ));
    }

    #[test]
    fn test_missing_api_key_everywhere() {
        let cli = account_details_cli(&[]);
        assert!(matches!(
            cli.resolve_config(None, env_of(&[])),
            Err(MergeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_flag_fills_unresolved_toml_api_key() {
        let raw = "[client]\napi_key = \"${MERGE_CLIENT_CLI_TEST_UNSET}\"\nenvironment = \"production_eu\"\n";

        let cli = account_details_cli(&[]);
        let toml = TomlConfig::from_toml_str(raw).unwrap();
        assert!(matches!(
            cli.resolve_config(Some(toml), env_of(&[])),
            Err(MergeError::MissingConfigError { .. })
        ));

        let cli = account_details_cli(&["--api-key", "flag-key"]);
        let toml = TomlConfig::from_toml_str(raw).unwrap();
        let config = cli.resolve_config(Some(toml), env_of(&[])).unwrap();
        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.environment, Environment::ProductionEu);
    }

    #[test]
    fn test_rejects_bad_query() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
        assert_eq!(
            parse_key_value("remote_id=a=b").unwrap(),
            ("remote_id".to_string(), "a=b".to_string())
        );
    }
}
