//! Error handling for primitive operations
//!
//! Primitives report failures with the workspace-wide error type so that
//! callers never need to translate between error enums.

pub use eckit_api::error::{validate, Error, Result};
