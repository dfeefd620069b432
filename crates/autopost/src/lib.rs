//! autopost - log in to a Bluesky PDS and publish a single text post.
//!
//! A run is two sequential XRPC calls: `createSession` to exchange the
//! account credentials for a token pair, then (only if there is text to
//! post) `createRecord` into the account's `app.bsky.feed.post` collection.
//!
//! # Example
//!
//! ```no_run
//! use autopost::{Config, Outcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(Some("alice.bsky.social".into()), Some("app-password".into()))?
//!     .with_post(Some("hello world".into()));
//!
//! if let Outcome::Posted(post) = autopost::run(&config).await? {
//!     println!("{}", post.uri);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Authenticator`] and [`Poster`] can also be driven directly with a
//! shared [`xrpc::XrpcClient`].

pub mod auth;
pub mod config;
pub mod error;
pub mod post;
mod run;
pub mod types;
pub mod xrpc;

pub use auth::{AccessToken, Authenticator, Credentials};
pub use config::Config;
pub use error::{Error, RunError};
pub use post::{PostEnvelope, PostRecord, PostResult, Poster};
pub use run::{Outcome, run};
pub use types::PdsUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
