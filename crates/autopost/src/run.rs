//! The authenticate-then-maybe-post flow.

use tracing::{info, instrument};

use crate::error::RunError;
use crate::xrpc::XrpcClient;
use crate::{Authenticator, Config, PostResult, Poster};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Logged in; no post was requested.
    Authenticated,
    /// Logged in and published a post.
    Posted(PostResult),
}

/// Authenticate, then publish the configured text if there is any.
///
/// At most two requests are made, one after the other. The first error ends
/// the run and is tagged with the step that failed.
#[instrument(skip(config), fields(pds = %config.pds()))]
pub async fn run(config: &Config) -> Result<Outcome, RunError> {
    let client =
        XrpcClient::new(config.pds().clone(), config.timeout()).map_err(RunError::Setup)?;

    info!("Logging in");
    let token = Authenticator::new(client.clone())
        .authenticate(config.credentials())
        .await
        .map_err(RunError::Authenticate)?;

    let Some(text) = config.text() else {
        info!("No post text given, skipping post");
        return Ok(Outcome::Authenticated);
    };

    let result = Poster::new(client, config.credentials().identifier())
        .post(&token, text)
        .await
        .map_err(RunError::Post)?;

    Ok(Outcome::Posted(result))
}
