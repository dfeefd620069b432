//! Authentication: credentials, tokens and the session exchange.

mod authenticator;
mod credentials;
mod tokens;

pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use tokens::AccessToken;
