use std::path::PathBuf;

use anyhow::Context;
use cep_core::{config::Config, dispatcher, provider_factory::ProviderRegistry};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Look up a Brazilian postal code (CEP) on ViaCEP and ApiCEP, first answer wins", long_about = None)]
struct Cli {
    /// Config file (JSON or TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Postal codes to look up, e.g. 01001000 or 01001-000
    ceps: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the address blocks.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let reg = ProviderRegistry::from_config(&cfg)?;
    tracing::debug!(providers = ?reg.names(), timeout_ms = cfg.race.timeout_ms, "dispatching");

    let mut stdout = std::io::stdout().lock();
    dispatcher::run(&reg, &cli.ceps, cfg.race.timeout(), &mut stdout)
        .await
        .context("address lookup failed")?;
    Ok(())
}
