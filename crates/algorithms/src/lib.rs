//! Curve-group backend and byte encodings for eckit
//!
//! This crate is the only place where eckit touches elliptic-curve
//! arithmetic. Field and group operations come from the RustCrypto curve
//! crates (`p256`, `p384`, `p521`, `k256`); eckit adds runtime curve
//! selection, validated point and scalar wrappers, and the DER and
//! base64url encodings the key formats are built from.
//!
//! # Security Features
//!
//! - Points are validated on every decode (length, tag, curve equation,
//!   point at infinity)
//! - Scalars are range-checked to `[1, n-1]` and zeroized on drop
//! - Shared secrets are returned in `Zeroizing` buffers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod ec;
pub use ec::{group, CurveGroup, Point, Scalar};

pub mod encoding;
