//! Traditional signature schemes

pub mod ecdsa;
