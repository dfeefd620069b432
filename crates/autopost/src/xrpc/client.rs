//! XRPC HTTP client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::error::{DecodeError, Error, InvalidInputError, StatusError, TransportError};
use crate::types::PdsUrl;

use super::endpoints::XrpcErrorResponse;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a single XRPC call.
///
/// The caller decides whether a rejected status means a failed login or a
/// failed post; see [`XrpcError::into_error`].
#[derive(Debug, Error)]
pub enum XrpcError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Status(StatusError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl From<reqwest::Error> for XrpcError {
    fn from(err: reqwest::Error) -> Self {
        XrpcError::Transport(TransportError::from(err))
    }
}

impl XrpcError {
    /// Convert into the crate error, wrapping a rejected status with `rejected`.
    pub fn into_error(self, rejected: fn(StatusError) -> Error) -> Error {
        match self {
            XrpcError::Transport(e) => Error::Transport(e),
            XrpcError::Status(e) => rejected(e),
            XrpcError::Decode(e) => Error::Decode(e),
            XrpcError::InvalidInput(e) => Error::InvalidInput(e),
        }
    }
}

/// HTTP client for XRPC requests.
#[derive(Debug, Clone)]
pub struct XrpcClient {
    client: reqwest::Client,
    pds: PdsUrl,
}

impl XrpcClient {
    /// Create a new XRPC client for the given PDS.
    pub fn new(pds: PdsUrl, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bsky-autopost/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(TransportError::from)?;

        Ok(Self { client, pds })
    }

    /// Returns the PDS URL this client is configured for.
    pub fn pds(&self) -> &PdsUrl {
        &self.pds
    }

    /// Make an unauthenticated XRPC procedure (POST request).
    #[instrument(skip(self, body), fields(pds = %self.pds))]
    pub async fn procedure<B, R>(&self, method: &'static str, body: &B) -> Result<R, XrpcError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(%url, "XRPC procedure");

        let response = self.client.post(&url).json(body).send().await?;

        self.handle_response(method, response).await
    }

    /// Make an authenticated XRPC procedure (POST request).
    #[instrument(skip(self, body, token), fields(pds = %self.pds))]
    pub async fn procedure_authed<B, R>(
        &self,
        method: &'static str,
        body: &B,
        token: &str,
    ) -> Result<R, XrpcError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(%url, "XRPC authenticated procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(auth_headers(token)?)
            .send()
            .await?;

        self.handle_response(method, response).await
    }

    /// Handle an XRPC response, parsing the body or error.
    ///
    /// Anything other than 200 is a rejection.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        method: &'static str,
        response: reqwest::Response,
    ) -> Result<R, XrpcError> {
        let status = response.status();
        trace!(status = %status, "XRPC response");

        if status != StatusCode::OK {
            return Err(XrpcError::Status(parse_error_response(response).await));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|source| XrpcError::Decode(DecodeError { method, source }))
    }
}

/// Create authorization headers for authenticated requests.
///
/// An empty token still yields `Bearer ` with nothing after it.
pub(crate) fn auth_headers(token: &str) -> Result<HeaderMap, InvalidInputError> {
    let mut headers = HeaderMap::new();
    let auth_value = format!("Bearer {}", token);
    let auth_value =
        HeaderValue::from_str(&auth_value).map_err(|_| InvalidInputError::Header {
            name: "authorization",
        })?;
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Parse an XRPC error response.
async fn parse_error_response(response: reqwest::Response) -> StatusError {
    let status = response.status().as_u16();

    // Best effort: the body may be HTML from a proxy, or empty
    match response.json::<XrpcErrorResponse>().await {
        Ok(error_body) => StatusError::new(status, error_body.error, error_body.message),
        Err(_) => StatusError::new(status, None, None),
    }
}
