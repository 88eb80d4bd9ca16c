//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `metasnap` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Dispatch to the API server or a one-off analysis

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use metasnap::config::{Cli, Command};
use metasnap::initialization::init_logger_with;
use metasnap::{analyze_url, run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, then from next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(cli.opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(&config).await,
        Command::Analyze { url } => analyze_and_print(&config, &url).await,
    };

    if let Err(e) = outcome {
        eprintln!("metasnap error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn analyze_and_print(config: &Config, url: &str) -> Result<()> {
    let result = analyze_url(config, url)
        .await
        .context("Failed to initialize HTTP client")?;
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
