//! XRPC HTTP plumbing.

mod client;
pub mod endpoints;

pub use client::{DEFAULT_TIMEOUT, XrpcClient, XrpcError};
