//! Session token pair returned by createSession.

use std::fmt;

/// The access/refresh JWT pair for one run.
///
/// Produced by [`Authenticator::authenticate`](crate::Authenticator::authenticate)
/// and handed to the [`Poster`](crate::Poster). Tokens are never refreshed or
/// persisted.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    access_jwt: String,
    refresh_jwt: String,
}

impl AccessToken {
    /// Create a token pair.
    pub fn new(access_jwt: impl Into<String>, refresh_jwt: impl Into<String>) -> Self {
        Self {
            access_jwt: access_jwt.into(),
            refresh_jwt: refresh_jwt.into(),
        }
    }

    /// Returns the access JWT for use in authorization headers.
    pub fn access_jwt(&self) -> &str {
        &self.access_jwt
    }

    /// Returns the refresh JWT.
    pub fn refresh_jwt(&self) -> &str {
        &self.refresh_jwt
    }
}

// Hide token values in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_jwt", &"[REDACTED]")
            .field("refresh_jwt", &"[REDACTED]")
            .finish()
    }
}
