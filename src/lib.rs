#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
mod parameters;
mod scheme;
mod site;
mod types;
mod unicode;

// Public API
pub use error::ParseError;
pub use parameters::Parameters;
pub use site::{DEFAULT_CHARSET, DEFAULT_PORT, Site};
pub use types::Scheme;
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
