/*
[INPUT]:  CLI arguments, optional YAML configuration file, LEDGERX_JWT
[OUTPUT]: Exchange JSON printed to stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledgerx_cli::{CliConfig, Command, JWT_ENV_VAR};

#[derive(Parser, Debug)]
#[command(name = "ledgerx-cli", version, about = "LedgerX REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?
        .with_jwt_override(std::env::var(JWT_ENV_VAR).ok());
    let client = config.build_client()?;

    let command = args.command.unwrap_or_default();
    info!(command = command.name(), "calling LedgerX");

    let data = command
        .run(&client)
        .await
        .context("LedgerX request failed")?;

    println!("{}", serde_json::to_string_pretty(&data)?);
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

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    match path {
        Some(path) => CliConfig::from_file(path).context("load config"),
        None => Ok(CliConfig::default()),
    }
}
