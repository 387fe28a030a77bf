use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voxtext::cli::{handle_transcribe_command, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Failures end the run with a printed message, not a structured error
    if let Err(err) = handle_transcribe_command(cli).await {
        eprintln!("Error: {:#}", err);
    }

    Ok(())
}
