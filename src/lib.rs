//! # eckit
//!
//! Elliptic-curve key management: ECDH key agreement, key generation and
//! validation, SEC1 point encodings, PKCS#8 / SPKI / raw / JWK key
//! formats and ECDSA signature format conversion.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! eckit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): operating-system randomness
//! - `ecdh` (default): key agreement and key management
//! - `sign` (default): ECDSA signature format conversion
//! - `async-jobs` (default): run key jobs on tokio's blocking pool
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `eckit-api`: error type and shared enums
//! - `eckit-params`: the built-in curve table and wire constants
//! - `eckit-algorithms`: curve-group backend, DER and base64url helpers
//! - `eckit-ecdh`: key agreement, key formats and key jobs
//! - `eckit-sign`: DER <-> fixed-width signature conversion

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use eckit_algorithms as algorithms;
pub use eckit_api as api;
pub use eckit_internal as internal;
pub use eckit_params as params;

// Feature-gated re-exports
#[cfg(feature = "ecdh")]
pub use eckit_ecdh as ecdh;

#[cfg(feature = "sign")]
pub use eckit_sign as sign;

/// Common imports for eckit users
pub mod prelude {
    pub use crate::api::{Error, KeyFormat, KeyType, ParamEncoding, PointForm, Result};

    pub use zeroize::Zeroizing;

    #[cfg(feature = "std")]
    pub use rand::rngs::OsRng;

    #[cfg(feature = "ecdh")]
    pub use crate::ecdh::{
        compute_secret, convert_key, derive_bits, export_key, import_key, is_key_pair_valid,
        list_curves, resolve, run_job_blocking, Ecdh, EncodedKey, Jwk, JobMode, KeyData,
        KeyMaterial,
    };

    #[cfg(feature = "async-jobs")]
    pub use crate::ecdh::run_job;

    #[cfg(feature = "sign")]
    pub use crate::sign::{to_der, to_fixed_width};
}
