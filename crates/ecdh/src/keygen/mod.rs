//! Key pair generation

use crate::curves::CurveParams;
use crate::key::KeyMaterial;
use eckit_api::{ParamEncoding, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

/// Generate a fresh key pair on `curve` from the operating system RNG
///
/// `param_encoding` is recorded on the key and only changes how PKCS#8
/// and SPKI exports describe the curve.
///
/// # Errors
/// `OperationFailed` if the RNG fails.
pub fn generate(curve: CurveParams, param_encoding: ParamEncoding) -> Result<KeyMaterial> {
    generate_with_rng(curve, param_encoding, &mut OsRng)
}

/// Generate a fresh key pair using the supplied RNG
pub fn generate_with_rng<R: CryptoRng + RngCore>(
    curve: CurveParams,
    param_encoding: ParamEncoding,
    rng: &mut R,
) -> Result<KeyMaterial> {
    let curve = curve.with_encoding(param_encoding);
    let scalar = curve.group().random_scalar(rng)?;
    debug!(curve = curve.short_name(), ?param_encoding, "generated key pair");
    KeyMaterial::from_private(curve, scalar)
}
