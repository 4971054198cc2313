/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Node API responses printed as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use raiden_api_cli::{Command, NodeConfig};
use raiden_api_client::RaidenClient;

#[derive(Parser, Debug)]
#[command(name = "raiden-api", version, about = "Command-line client for a Raiden node's REST API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", env = "RAIDEN_API_URL")]
    base_url: Option<String>,
    #[arg(long = "api-version", value_name = "VERSION", env = "RAIDEN_API_VERSION")]
    api_version: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit without contacting the node
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?
        .with_overrides(args.base_url.clone(), args.api_version.clone());
    let client = RaidenClient::with_config(config.into_client_config()?)
        .context("create node client")?;
    info!(api_root = %client.api_root(), "node client ready");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("no command given; run with --help to list commands")?;
    let output = command.run(&client).await.context("node request failed")?;
    if let Some(output) = output {
        println!("{output}");
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<NodeConfig> {
    let Some(path) = path else {
        return Ok(NodeConfig::default());
    };
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    NodeConfig::from_file(path_str).context("load config")
}
