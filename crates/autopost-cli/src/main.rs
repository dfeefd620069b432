//! bsky-autopost-bot - log in to Bluesky and optionally publish one post.
//!
//! Credentials come from `BSKY_USERNAME` / `BSKY_PASSWORD` (or the matching
//! flags). With `-p <text>` the text is posted and the new record's URI is
//! printed; without it the bot only checks that it can log in.

mod cli;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use autopost::Outcome;
use cli::Cli;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("Version: {}", VERSION);
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose, cli.json_logs);

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config = cli.into_config().context("Invalid configuration")?;
    debug!(?config, "Configuration loaded");

    output::status("Logging in...");
    match autopost::run(&config).await? {
        Outcome::Authenticated => output::success("Logged in successfully"),
        Outcome::Posted(result) => {
            if json {
                output::json(&result)?;
            } else {
                println!("{}", result.uri);
                output::success("Post created");
            }
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
