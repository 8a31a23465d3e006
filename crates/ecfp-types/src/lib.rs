#![forbid(unsafe_code)]
#![doc = "Common error codes and curve identifiers for the ecfp crates."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;
