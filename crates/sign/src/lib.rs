//! ECDSA signature format conversion
//!
//! eckit does not sign or verify. This crate only moves ECDSA signatures
//! between the ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }` form used by
//! X.509 and TLS stacks and the fixed-width `r || s` form required by
//! Web Crypto style APIs.

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ecdsa::{to_der, to_fixed_width, SignatureComponents};
