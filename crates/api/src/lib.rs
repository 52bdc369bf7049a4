//! Public API types for the eckit library
//!
//! This crate provides the error type shared by every eckit crate together
//! with the small value types (point forms, parameter encodings, key types
//! and key formats) that appear in the public signatures of the others.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;
