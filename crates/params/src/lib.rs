//! Constant values for the eckit library
//!
//! This crate holds the process-wide, read-only curve table together with
//! the numeric wire codes shared by every other eckit crate. It has no
//! dependencies and performs no computation beyond table lookups.

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ec::{CurveId, CurveInfo, CURVES};
pub use traditional::ecdh::*;
