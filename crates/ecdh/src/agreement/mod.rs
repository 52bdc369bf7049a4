//! ECDH key agreement
//!
//! [`compute_secret`] and [`derive_bits`] are the stateless entry points.
//! [`Ecdh`] is a stateful object holding one key pair that can be
//! generated, replaced piecewise and used against encoded peer points.
//!
//! Shared secrets are the big-endian x-coordinate of `k * Q`, always
//! field width; leading zero bytes are kept.

use crate::curves::{resolve_short_name, CurveParams};
use crate::key::KeyMaterial;
use crate::keygen::generate_with_rng;
use crate::point::{decode_point, encode_point};
use crate::validate::{is_key_pair_valid, is_private_key_valid_for};
use eckit_algorithms::Point;
use eckit_api::error::validate;
use eckit_api::{Error, KeyType, PointForm, Result};
use eckit_internal::bigendian::{left_pad, strip_leading_zeros};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

/// Shared secret between `key` and `peer`
///
/// `key` must hold a private scalar and pass [`is_key_pair_valid`]; this
/// is checked before `peer` is looked at.
///
/// # Errors
/// `InvalidKeyPair` for a bad local key, `InvalidPoint` when `peer` is
/// on another curve, `OperationFailed` if the multiplication fails.
pub fn compute_secret(key: &KeyMaterial, peer: &Point) -> Result<Zeroizing<Vec<u8>>> {
    let scalar = match key.private_scalar() {
        Some(scalar) if is_key_pair_valid(key) => scalar,
        _ => {
            debug!(curve = key.named_curve(), "refusing agreement with invalid key pair");
            return Err(Error::invalid_key_pair(
                "compute_secret",
                "Invalid key pair",
            ));
        }
    };

    let curve = key.curve();
    if peer.curve() != curve.id() {
        return Err(Error::invalid_point(
            "compute_secret",
            "Public key is not valid for specified curve",
        ));
    }

    let secret = curve
        .group()
        .diffie_hellman(scalar, peer)
        .map_err(|_| Error::operation_failed("compute_secret", "Failed to compute ECDH key"))?;
    left_pad(&secret, curve.field_size())
        .map(Zeroizing::new)
        .ok_or_else(|| Error::operation_failed("compute_secret", "Failed to compute ECDH key"))
}

/// Key-object agreement: `private` against a public-only `public`
///
/// # Errors
/// `InvalidKeyType` when the key types or curves do not line up and
/// `InvalidKeyPair` when either key fails the full check.
pub fn derive_bits(private: &KeyMaterial, public: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>> {
    if private.key_type() != KeyType::Private || public.key_type() != KeyType::Public {
        return Err(Error::invalid_key_type(
            "derive_bits",
            "expected one private and one public key",
        ));
    }
    if private.curve().id() != public.curve().id() {
        return Err(Error::invalid_key_type(
            "derive_bits",
            "keys are on different curves",
        ));
    }
    if !is_key_pair_valid(private) || !is_key_pair_valid(public) {
        return Err(Error::invalid_key_pair("derive_bits", "Invalid key pair"));
    }

    let peer = public
        .public_point()
        .ok_or_else(|| Error::invalid_key_pair("derive_bits", "Invalid key pair"))?;
    compute_secret(private, peer).map_err(|e| e.with_context("derive_bits"))
}

/// Stateful ECDH object bound to one curve
#[derive(Debug, Clone)]
pub struct Ecdh {
    key: KeyMaterial,
}

impl Ecdh {
    /// Create an object with no keys on the curve named by its short name
    ///
    /// # Errors
    /// `InvalidCurve` for unknown names, including NIST aliases.
    pub fn new(curve_short_name: &str) -> Result<Self> {
        let curve = resolve_short_name(curve_short_name)?;
        Ok(Self {
            key: KeyMaterial::empty(curve),
        })
    }

    pub fn curve(&self) -> &CurveParams {
        self.key.curve()
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// Replace both components with a fresh key pair
    pub fn generate_keys(&mut self) -> Result<()> {
        self.generate_keys_with_rng(&mut OsRng)
    }

    pub fn generate_keys_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()> {
        let curve = *self.key.curve();
        self.key = generate_with_rng(curve, curve.param_encoding(), rng)?;
        Ok(())
    }

    /// Shared secret with an encoded peer point
    ///
    /// # Errors
    /// `InvalidKeyPair` first, then `InvalidPoint` for an undecodable peer.
    pub fn compute_secret(&self, peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        validate::input_size("Ecdh::compute_secret", peer_public_key.len())?;
        if !self.key.has_private() || !is_key_pair_valid(&self.key) {
            return Err(Error::invalid_key_pair(
                "Ecdh::compute_secret",
                "Invalid key pair",
            ));
        }

        let peer = decode_point(self.key.curve(), peer_public_key).map_err(|e| {
            debug!(curve = self.key.named_curve(), error = %e, "rejected peer public key");
            Error::invalid_point(
                "Ecdh::compute_secret",
                "Public key is not valid for specified curve",
            )
        })?;
        compute_secret(&self.key, &peer)
    }

    /// The public point in the requested form
    pub fn public_key(&self, form: PointForm) -> Result<Vec<u8>> {
        let point = self.key.public_point().ok_or_else(|| {
            Error::operation_failed("Ecdh::public_key", "Failed to get ECDH public key")
        })?;
        Ok(encode_point(point, form))
    }

    /// The private scalar, big-endian with leading zeros stripped
    pub fn private_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        let scalar = self.key.private_scalar().ok_or_else(|| {
            Error::operation_failed("Ecdh::private_key", "Failed to get ECDH private key")
        })?;
        Ok(Zeroizing::new(strip_leading_zeros(scalar.as_bytes()).to_vec()))
    }

    /// Replace the private scalar and re-derive the public point
    ///
    /// Nothing is modified unless the whole update succeeds.
    ///
    /// # Errors
    /// `OutOfRange` for oversized input, `InvalidKeyType` when the scalar
    /// is not in `[1, n-1]`.
    pub fn set_private_key(&mut self, private_key: &[u8]) -> Result<()> {
        validate::input_size("Ecdh::set_private_key", private_key.len())?;
        let curve = *self.key.curve();
        let invalid = || {
            Error::invalid_key_type(
                "Ecdh::set_private_key",
                "Private key is not valid for specified curve.",
            )
        };

        if !is_private_key_valid_for(&curve, private_key) {
            return Err(invalid());
        }
        let padded = Zeroizing::new(left_pad(private_key, curve.order_size()).ok_or_else(invalid)?);
        let scalar = curve
            .group()
            .scalar_from_bytes(&padded)
            .map_err(|_| invalid())?;
        let key = KeyMaterial::from_private(curve, scalar).map_err(|_| {
            Error::operation_failed("Ecdh::set_private_key", "Failed to set generated public key")
        })?;

        self.key = key;
        Ok(())
    }

    /// Replace the public point, keeping any private scalar
    ///
    /// The pair is not re-checked here; a mismatch surfaces as
    /// `InvalidKeyPair` from [`Ecdh::compute_secret`].
    ///
    /// # Errors
    /// `OutOfRange` for oversized input, `OperationFailed` for bytes that
    /// do not decode to a point on the curve.
    pub fn set_public_key(&mut self, public_key: &[u8]) -> Result<()> {
        validate::input_size("Ecdh::set_public_key", public_key.len())?;
        let curve = *self.key.curve();
        let point = decode_point(&curve, public_key).map_err(|_| {
            Error::operation_failed(
                "Ecdh::set_public_key",
                "Failed to convert Buffer to EC_POINT",
            )
        })?;

        self.key = KeyMaterial::from_parts(curve, Some(point), self.key.private_scalar().cloned());
        Ok(())
    }
}
