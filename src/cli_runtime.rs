use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use activity_signup::model::{ClientConfig, LoginStrategy};

use crate::Commands;

#[derive(Parser)]
#[command(name = "activity-signup")]
#[command(about = "Sign students up for school activities", long_about = None)]
pub(crate) struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also try "mr."/"mrs." spellings of the username when logging in
    #[arg(long, global = true)]
    username_variants: bool,

    /// Write logs here when running the TUI
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        None => {
            if let Some(path) = &cli.log_file {
                init_file_logging(path)?;
            }
            activity_signup::tui::run(config)?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!(
                    "`--log-file` is only supported when running the TUI (no subcommand)"
                );
            }
            init_stderr_logging();
            crate::cli_exec::handle_command(command, &config)?
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if cli.username_variants {
        config.login_strategy = LoginStrategy::HonorificVariants;
    }
    Ok(config)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

// The TUI owns the terminal, so logs only go to an explicit file.
fn init_file_logging(path: &std::path::Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
