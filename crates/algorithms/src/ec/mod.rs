//! Elliptic curve group capability
//!
//! Curve arithmetic is delegated to the RustCrypto curve crates. This module
//! wraps them behind the object-safe [`CurveGroup`] trait so that the rest
//! of eckit can pick a curve at runtime from its [`CurveId`] without being
//! generic over the curve type.
//!
//! Points and scalars cross this boundary as validated byte strings
//! ([`Point`], [`Scalar`]) and are re-parsed by the backend on every use,
//! so nothing outside this module ever holds a backend type.

mod backend;
mod point;
mod scalar;

pub use point::Point;
pub use scalar::Scalar;

use crate::error::{Error, Result};
use backend::Backend;
use eckit_params::{CurveId, CurveInfo};
use elliptic_curve::rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Operations a curve backend provides
///
/// Every method that takes a [`Point`] or [`Scalar`] fails with
/// `OperationFailed` when the value belongs to a different curve.
pub trait CurveGroup: Send + Sync {
    /// Identifier of the curve this group operates on
    fn id(&self) -> CurveId;

    /// Static curve description
    fn info(&self) -> &'static CurveInfo {
        self.id().info()
    }

    /// Decode a compressed (`0x02`/`0x03`) or uncompressed (`0x04`) SEC1
    /// point, rejecting wrong lengths, off-curve coordinates and the
    /// point at infinity
    fn decode_point(&self, bytes: &[u8]) -> Result<Point>;

    /// Build a point from big-endian affine coordinates of field width
    fn point_from_coordinates(&self, x: &[u8], y: &[u8]) -> Result<Point> {
        let size = self.info().field_size;
        if x.len() != size || y.len() != size {
            return Err(Error::invalid_point(
                "CurveGroup::point_from_coordinates",
                "coordinate has the wrong width",
            ));
        }
        let mut encoded = Vec::with_capacity(1 + 2 * size);
        encoded.push(0x04);
        encoded.extend_from_slice(x);
        encoded.extend_from_slice(y);
        self.decode_point(&encoded)
    }

    /// The base point `G`
    fn generator(&self) -> Result<Point> {
        let info = self.info();
        self.point_from_coordinates(info.gx, info.gy)
    }

    /// Re-run the backend's validity check on a point
    fn is_valid_point(&self, point: &Point) -> bool;

    /// Parse a private scalar of exactly `order_size` bytes, requiring
    /// `1 <= k < n`
    fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<Scalar>;

    /// Draw a scalar uniformly from `[1, n-1]`
    fn random_scalar(&self, rng: &mut dyn CryptoRngCore) -> Result<Scalar>;

    /// Compute `k * G`
    fn public_from_scalar(&self, scalar: &Scalar) -> Result<Point>;

    /// Compute the x-coordinate of `k * peer`, left-padded to field width
    fn diffie_hellman(&self, scalar: &Scalar, peer: &Point) -> Result<Zeroizing<Vec<u8>>>;
}

static P256: Backend<p256::NistP256> = Backend::new(CurveId::Prime256v1);
static P384: Backend<p384::NistP384> = Backend::new(CurveId::Secp384r1);
static P521: Backend<p521::NistP521> = Backend::new(CurveId::Secp521r1);
static K256: Backend<k256::Secp256k1> = Backend::new(CurveId::Secp256k1);

/// The group backing a built-in curve
pub fn group(id: CurveId) -> &'static dyn CurveGroup {
    match id {
        CurveId::Prime256v1 => &P256,
        CurveId::Secp384r1 => &P384,
        CurveId::Secp521r1 => &P521,
        CurveId::Secp256k1 => &K256,
    }
}

#[cfg(test)]
mod tests;
