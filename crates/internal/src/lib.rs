//! Internal utilities for the eckit library
//!
//! Nothing in here is part of the public API; the crate exists so that the
//! constant-time and big-endian helpers are written once.

#![forbid(unsafe_code)]

pub mod bigendian;
pub mod constant_time;

pub use constant_time::{ct_eq, ct_is_zero, ct_lt_be};
