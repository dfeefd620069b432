//! Validated protocol types.

mod pds_url;

pub use pds_url::{DEFAULT_PDS, PdsUrl};
