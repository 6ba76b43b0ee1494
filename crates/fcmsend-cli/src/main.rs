//! fcmsend - forward a push notification to Firebase Cloud Messaging
//!
//! Reads a JSON notification file, builds the FCM payload, POSTs it, and
//! prints the provider's raw response to stdout.

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use commands::send::SendOptions;
use commands::CommandContext;
use fcmsend_core::ForwarderConfig;
use std::path::PathBuf;
use std::process;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fcmsend")]
#[command(version = fcmsend_core::VERSION)]
#[command(about = "Send a push notification described by a JSON file", long_about = None)]
struct Cli {
    /// Notification JSON file
    file: PathBuf,

    /// Configuration file path
    #[arg(short, long, env = "FCMSEND_CONFIG")]
    config: Option<PathBuf>,

    /// Push endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Print the payload instead of sending it
    #[arg(long)]
    dryrun: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FCMSEND_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    log_subscriber(filter, std::io::stderr).init();
}

/// Subscriber used by the binary; stdout is reserved for the response body,
/// so `writer` is stderr outside of tests.
fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
        .with(filter)
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    let ctx = CommandContext::new(config);

    let opts = SendOptions { dryrun: cli.dryrun };
    commands::send::execute(&ctx, &cli.file, opts, &mut std::io::stdout()).await
}

fn build_config(cli: &Cli) -> Result<ForwarderConfig> {
    let mut config = ForwarderConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = Some(timeout);
    }
    if cli.insecure {
        config.tls.verify = false;
    }

    Ok(config)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<fcmsend_core::Error>()
        .map(fcmsend_core::Error::exit_code)
        .unwrap_or(1)
}
