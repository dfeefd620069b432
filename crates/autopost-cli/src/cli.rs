//! CLI argument definitions.

use clap::Parser;

use autopost::config::{PASSWORD_VAR, USERNAME_VAR};
use autopost::error::ConfigError;
use autopost::types::{DEFAULT_PDS, PdsUrl};
use autopost::xrpc::DEFAULT_TIMEOUT;
use autopost::Config;

/// Log in to Bluesky and optionally publish a post.
#[derive(Parser, Debug)]
#[command(name = "bsky-autopost-bot")]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Text to post; omit (or leave empty) to only log in
    #[arg(short = 'p', long = "post", value_name = "TEXT", allow_hyphen_values = true)]
    pub post: Option<String>,

    /// Handle or DID to authenticate with
    #[arg(long, env = USERNAME_VAR)]
    pub username: Option<String>,

    /// Account password or app password
    #[arg(long, env = PASSWORD_VAR, hide_env_values = true)]
    pub password: Option<String>,

    /// PDS base URL
    #[arg(long, env = "BSKY_PDS", default_value = DEFAULT_PDS)]
    pub pds: PdsUrl,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print the created post as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (--verbose, --verbose --verbose, ...)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Validate the arguments into a run configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        Ok(Config::new(self.username, self.password)?
            .with_pds(self.pds)
            .with_post(self.post)
            .with_timeout(std::time::Duration::from_secs(self.timeout)))
    }
}
