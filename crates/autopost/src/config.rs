//! Startup configuration.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::PdsUrl;
use crate::xrpc::DEFAULT_TIMEOUT;
use crate::Credentials;

/// Environment variable holding the account identifier.
pub const USERNAME_VAR: &str = "BSKY_USERNAME";

/// Environment variable holding the account secret.
pub const PASSWORD_VAR: &str = "BSKY_PASSWORD";

/// Everything a run needs, fixed before the first request.
///
/// # Example
///
/// ```
/// use autopost::Config;
///
/// let config = Config::new(Some("alice.bsky.social".into()), Some("hunter2".into()))
///     .unwrap()
///     .with_post(Some("hello world".into()));
/// assert_eq!(config.text(), Some("hello world"));
///
/// assert!(Config::new(Some("alice.bsky.social".into()), None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pds: PdsUrl,
    credentials: Credentials,
    text: Option<String>,
    timeout: Duration,
}

impl Config {
    /// Validate the credentials and build a config for the default PDS.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if either value is absent or empty.
    pub fn new(identifier: Option<String>, password: Option<String>) -> Result<Self, ConfigError> {
        let identifier = required(identifier, USERNAME_VAR)?;
        let password = required(password, PASSWORD_VAR)?;

        Ok(Self {
            pds: PdsUrl::default(),
            credentials: Credentials::new(identifier, password),
            text: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_pds(mut self, pds: PdsUrl) -> Self {
        self.pds = pds;
        self
    }

    /// Set the text to post. `None` or an empty string means authenticate only.
    pub fn with_post(mut self, text: Option<String>) -> Self {
        self.text = text.filter(|t| !t.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pds(&self) -> &PdsUrl {
        &self.pds
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The text to post, if a post was requested.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { name })
}
