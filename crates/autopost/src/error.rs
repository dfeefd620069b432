//! Error types for autopost.
//!
//! A run either fails before any request is sent (configuration), while
//! reaching the server (transport), because the server rejected one of the two
//! calls (auth / post), or because a success response could not be decoded.

use std::fmt;
use thiserror::Error;

/// The unified error type for autopost operations.
///
/// `Auth` and `Post` are kept apart so callers can tell "never authenticated"
/// from "authenticated but the post was rejected".
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed startup configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The session endpoint answered with a non-200 status.
    #[error("authentication rejected: {0}")]
    Auth(StatusError),

    /// The record endpoint answered with a non-200 status.
    #[error("post rejected: {0}")]
    Post(StatusError),

    /// A 200 response whose body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (PDS URL, header values).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code for errors caused by a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth(e) | Error::Post(e) => Some(e.status),
            _ => None,
        }
    }
}

/// A failed [`run`](crate::run), tagged with the step that failed.
///
/// A rejected post is never reported as a failed login, even when the
/// underlying error is a transport or decode failure.
#[derive(Debug, Error)]
pub enum RunError {
    /// The HTTP client could not be built; nothing was sent.
    #[error("failed to set up HTTP client")]
    Setup(#[source] Error),

    /// The createSession call failed; no post was attempted.
    #[error("failed to authenticate")]
    Authenticate(#[source] Error),

    /// Logged in, but the createRecord call failed.
    #[error("failed to create post")]
    Post(#[source] Error),
}

impl RunError {
    /// The underlying error, whichever step it came from.
    pub fn error(&self) -> &Error {
        match self {
            RunError::Setup(e) | RunError::Authenticate(e) | RunError::Post(e) => e,
        }
    }
}

/// Startup configuration errors, detected before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was not supplied, or was empty.
    #[error("{name} is required")]
    Missing { name: &'static str },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    Client { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_builder() {
            TransportError::Client {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-200 answer from an XRPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
    /// XRPC error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status code: {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}

/// A success response body that did not match the expected shape.
#[derive(Debug, Error)]
#[error("invalid {method} response: {source}")]
pub struct DecodeError {
    /// The XRPC method whose response failed to decode.
    pub method: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid PDS URL format.
    #[error("invalid PDS URL '{value}': {reason}")]
    PdsUrl { value: String, reason: String },

    /// A value that cannot be placed in an HTTP header.
    #[error("invalid {name} header value")]
    Header { name: &'static str },
}
