use anyhow::Context;
use clap::{Parser, ValueEnum};
use ziwei_config::ZiweiConfig;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("ziwei error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ZiweiConfig::load_with_dotenv().context("failed to load ziwei configuration")?;
    let default_format = cli::OutputFormat::from_str(&config.general.default_format, true)
        .map_err(|error| anyhow::anyhow!("invalid general.default_format: {error}"))?;
    let flags = cli.global_flags(default_format);

    tracing::debug!(format = ?flags.format, "configuration loaded");
    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ZIWEI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
