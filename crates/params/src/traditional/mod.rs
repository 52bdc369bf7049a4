//! Constants for traditional elliptic-curve cryptography

pub mod domain;
pub mod ec;
pub mod ecdh;
