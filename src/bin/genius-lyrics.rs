mod commands;

use clap::Parser;
use commands::{execute_command, Commands};
use genius_lyrics::{ClientConfig, GeniusClientImpl};
use std::time::Duration;

/// Genius artist, song and lyrics lookup
#[derive(Parser)]
#[command(
    name = "genius-lyrics",
    about = "Look up artists, songs and lyrics on Genius",
    long_about = None
)]
struct Cli {
    /// Genius API access token
    #[arg(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 3.0)]
    timeout: f64,

    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::builder()
        .filter_module("genius_lyrics", level)
        .parse_default_env()
        .init();

    let timeout = match Duration::try_from_secs_f64(args.timeout) {
        Ok(timeout) => timeout,
        Err(e) => {
            eprintln!("❌ Invalid timeout {}: {e}", args.timeout);
            std::process::exit(2);
        }
    };

    let config = ClientConfig::new(args.token).with_timeout(timeout);
    let client = GeniusClientImpl::with_config(
        Box::new(http_client::native::NativeClient::new()),
        config,
    );

    if let Err(e) = execute_command(args.command, &client).await {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
