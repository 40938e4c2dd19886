use anyhow::Context;
use clap::Parser;
use merge_client::config::cli::Command;
use merge_client::config::{ClientConfig, CliConfig, RequestOptions, TomlConfig};
use merge_client::core::query::encode_path_segment;
use merge_client::models::common::{DataPassthroughRequest, LinkedAccountsListParams};
use merge_client::resources::shared;
use merge_client::utils::logger;
use merge_client::{Endpoint, HttpMethod, MergeClient};
use std::collections::BTreeMap;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    tracing::info!("🚀 merge-client targeting {}", config.base_url());
    let client = MergeClient::new(config)?;
    let options = RequestOptions::default();

    let value: serde_json::Value = match &cli.command {
        Command::List {
            vertical,
            resource,
            query,
        } => {
            let query: BTreeMap<_, _> = query.iter().cloned().collect();
            let endpoint =
                Endpoint::json(HttpMethod::Get, vertical.path(resource)).with_query(&query)?;
            client.send(endpoint, &options).await?
        }
        Command::Retrieve {
            vertical,
            resource,
            id,
            query,
        } => {
            let query: BTreeMap<_, _> = query.iter().cloned().collect();
            let path = format!("{}/{}", vertical.path(resource), encode_path_segment(id));
            let endpoint = Endpoint::json(HttpMethod::Get, path).with_query(&query)?;
            client.send(endpoint, &options).await?
        }
        Command::AccountDetails { vertical } => {
            let details = client
                .send(shared::account_details(*vertical)?, &options)
                .await?;
            serde_json::to_value(details)?
        }
        Command::LinkedAccounts { vertical } => {
            let endpoint =
                shared::linked_accounts(*vertical, &LinkedAccountsListParams::default())?;
            serde_json::to_value(client.send(endpoint, &options).await?)?
        }
        Command::Passthrough {
            vertical,
            method,
            path,
            data,
        } => {
            let mut request = DataPassthroughRequest::new(*method, path.clone());
            request.data = data.clone();
            let response = client
                .send(shared::passthrough(*vertical, &request)?, &options)
                .await?;
            serde_json::to_value(response)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn load_config(cli: &CliConfig) -> anyhow::Result<ClientConfig> {
    let toml = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        ),
        None => None,
    };
    init_logging(cli.verbose, toml.as_ref());

    cli.resolve_config(toml, |name| std::env::var(name).ok())
        .context("invalid client configuration (set MERGE_API_KEY, use --config or pass --api-key)")
}

fn init_logging(verbose: bool, toml: Option<&TomlConfig>) {
    match toml {
        Some(toml) if toml.json_logging() => logger::init_json_logger(toml.log_level()),
        _ => logger::init_cli_logger(verbose),
    }
}
