//! Key validity checks
//!
//! Every built-in curve has cofactor 1, so a point that passes the
//! backend's on-curve check is also in the prime-order subgroup.

use crate::curves::CurveParams;
use crate::key::KeyMaterial;
use eckit_internal::bigendian::left_pad;
use eckit_internal::{ct_eq, ct_is_zero, ct_lt_be};

/// True iff `1 <= scalar < order`, both big-endian
///
/// Leading zero bytes in either argument are ignored.
pub fn is_private_key_valid(order: &[u8], scalar: &[u8]) -> bool {
    let width = order.len().max(scalar.len());
    let (Some(order), Some(scalar)) = (left_pad(order, width), left_pad(scalar, width)) else {
        return false;
    };
    !ct_is_zero(&scalar) && ct_lt_be(&scalar, &order)
}

/// [`is_private_key_valid`] against the order of `curve`
pub fn is_private_key_valid_for(curve: &CurveParams, scalar: &[u8]) -> bool {
    is_private_key_valid(curve.info().n, scalar)
}

/// Full key check
///
/// The public point must be present and valid. When a private scalar is
/// present it must be in range and `scalar * G` must equal the public
/// point.
pub fn is_key_pair_valid(key: &KeyMaterial) -> bool {
    let group = key.curve().group();
    let Some(public) = key.public_point() else {
        return false;
    };
    if public.curve() != key.curve().id() || !group.is_valid_point(public) {
        return false;
    }

    match key.private_scalar() {
        None => true,
        Some(scalar) => {
            if !is_private_key_valid_for(key.curve(), scalar.as_bytes()) {
                return false;
            }
            match group.public_from_scalar(scalar) {
                Ok(derived) => ct_eq(derived.as_uncompressed(), public.as_uncompressed()),
                Err(_) => false,
            }
        }
    }
}
