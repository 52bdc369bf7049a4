//! Conversion between DER and fixed-width ECDSA signatures
//!
//! Both directions are total: malformed input yields `None`, never a panic
//! and never a truncated value. `order_size` is the byte length of the
//! curve order (32 for P-256, 66 for P-521).

mod common;

pub use common::SignatureComponents;

use tracing::debug;

/// Convert a DER signature to `r || s`, each padded to `order_size` bytes
///
/// Returns `None` if the DER does not parse or either component is wider
/// than `order_size`.
pub fn to_fixed_width(order_size: usize, der_signature: &[u8]) -> Option<Vec<u8>> {
    let converted = SignatureComponents::from_der(der_signature)
        .and_then(|sig| sig.to_fixed(order_size));
    match converted {
        Ok(fixed) => Some(fixed),
        Err(e) => {
            debug!(order_size, error = %e, "rejecting DER signature");
            None
        }
    }
}

/// Convert an `r || s` signature of exactly `2 * order_size` bytes to DER
pub fn to_der(order_size: usize, fixed_signature: &[u8]) -> Option<Vec<u8>> {
    match SignatureComponents::from_fixed(fixed_signature, order_size) {
        Ok(sig) => Some(sig.to_der()),
        Err(e) => {
            debug!(order_size, error = %e, "rejecting fixed-width signature");
            None
        }
    }
}
