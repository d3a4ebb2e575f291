//! TC-CLI: contract calls against a tick-based ledger node.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tc_01_call_engine::CallEngineService;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tc_cli::{commands, ClientConfig, Cli, Command};

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.log_level.as_deref())?;

    // Load configuration
    let config = ClientConfig::resolve(&cli.global).context("configuration error")?;
    debug!("Resolved {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Identity => commands::show_identity(&config, &mut out),
        Command::Calls => commands::show_calls(&mut out),
        command => {
            let session = commands::connect(&config)?;
            let mut service = CallEngineService::new(session);
            commands::execute(command, &config, &mut service, &mut out)
        }
    }
}
