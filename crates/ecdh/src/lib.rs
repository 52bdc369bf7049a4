//! ECDH key agreement and elliptic-curve key management
//!
//! The crate is organised leaves first:
//!
//! - [`curves`]: resolves curve names and enumerates the built-in curves
//! - [`key`]: [`KeyMaterial`], a curve plus an optional public point and
//!   an optional private scalar
//! - [`point`]: SEC1 compressed, uncompressed and hybrid point encodings
//! - [`validate`]: private-key range and full key-pair checks
//! - [`agreement`]: shared-secret derivation and the stateful [`Ecdh`]
//! - [`keygen`]: fresh key pairs
//! - [`format`]: raw, PKCS#8, SPKI and JWK import and export
//! - [`job`]: running generation, derivation and export inline or on a
//!   worker thread
//!
//! # Example
//!
//! ```
//! use eckit_ecdh::{compute_secret, curves, keygen, ParamEncoding};
//!
//! let curve = curves::resolve("P-256").unwrap();
//! let alice = keygen::generate(curve, ParamEncoding::Named).unwrap();
//! let bob = keygen::generate(curve, ParamEncoding::Named).unwrap();
//!
//! let a = compute_secret(&alice, bob.public_point().unwrap()).unwrap();
//! let b = compute_secret(&bob, alice.public_point().unwrap()).unwrap();
//! assert_eq!(*a, *b);
//! ```

#![forbid(unsafe_code)]

pub mod agreement;
pub mod curves;
pub mod format;
pub mod job;
pub mod key;
pub mod keygen;
pub mod point;
pub mod validate;

pub use agreement::{compute_secret, derive_bits, Ecdh};
pub use curves::{list_curves, resolve, resolve_short_name, CurveParams};
pub use format::{export_key, import_key, EncodedKey, Jwk, KeyData};
pub use job::{run_job_blocking, CryptoJob, DeriveBitsJob, JobMode, KeyExportJob, KeyGenJob};
pub use key::KeyMaterial;
pub use point::{convert_key, decode_point, encode_point};
pub use validate::{is_key_pair_valid, is_private_key_valid};

#[cfg(feature = "async-jobs")]
pub use job::run_job;

pub use eckit_api::{Error, KeyFormat, KeyType, ParamEncoding, PointForm, Result};
