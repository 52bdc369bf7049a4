//! Byte-level encodings used by key and signature formats
//!
//! - [`der`]: a minimal, strict DER reader and writer covering the handful of
//!   ASN.1 types that appear in SEC1, PKCS#8, SPKI and ECDSA structures
//! - [`base64url`]: the unpadded URL-safe alphabet used by JSON Web Keys

pub mod base64url;
pub mod der;
