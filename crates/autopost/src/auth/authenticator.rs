//! Session creation.

use tracing::{debug, info, instrument};

use crate::xrpc::XrpcClient;
use crate::xrpc::endpoints::{CREATE_SESSION, CreateSessionRequest, CreateSessionResponse};
use crate::{Error, Result};

use super::{AccessToken, Credentials};

/// Exchanges credentials for an [`AccessToken`] via `createSession`.
#[derive(Debug, Clone)]
pub struct Authenticator {
    client: XrpcClient,
}

impl Authenticator {
    pub fn new(client: XrpcClient) -> Self {
        Self { client }
    }

    /// Authenticate once against the PDS.
    ///
    /// A non-200 answer is reported as [`Error::Auth`] with the status code.
    /// There is no retry.
    #[instrument(skip(self, credentials), fields(identifier = %credentials.identifier()))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken> {
        info!("Creating session");

        let request = CreateSessionRequest {
            identifier: credentials.identifier(),
            password: credentials.password(),
        };

        let response: CreateSessionResponse = self
            .client
            .procedure(CREATE_SESSION, &request)
            .await
            .map_err(|e| e.into_error(Error::Auth))?;

        debug!("Session created");
        Ok(AccessToken::new(response.access_jwt, response.refresh_jwt))
    }
}
