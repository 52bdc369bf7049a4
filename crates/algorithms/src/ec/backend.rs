//! Generic backend over the RustCrypto curve crates

use super::{CurveGroup, Point, Scalar};
use crate::error::{Error, Result};
use core::marker::PhantomData;
use eckit_params::{CurveId, KEYGEN_MAX_ATTEMPTS};
use elliptic_curve::rand_core::CryptoRngCore;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey};
use zeroize::Zeroizing;

pub(crate) struct Backend<C> {
    id: CurveId,
    _curve: PhantomData<C>,
}

impl<C> Backend<C> {
    pub(crate) const fn new(id: CurveId) -> Self {
        Self {
            id,
            _curve: PhantomData,
        }
    }
}

impl<C> Backend<C>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    fn check_curve(&self, context: &'static str, curve: CurveId) -> Result<()> {
        if curve != self.id {
            return Err(Error::operation_failed(
                context,
                format!(
                    "value belongs to {} but the group is {}",
                    curve.short_name(),
                    self.id.short_name()
                ),
            ));
        }
        Ok(())
    }

    fn public_key(&self, context: &'static str, point: &Point) -> Result<PublicKey<C>> {
        self.check_curve(context, point.curve())?;
        PublicKey::<C>::from_sec1_bytes(point.as_uncompressed())
            .map_err(|_| Error::invalid_point(context, "point is not on the curve"))
    }

    fn secret_key(&self, context: &'static str, scalar: &Scalar) -> Result<SecretKey<C>> {
        self.check_curve(context, scalar.curve())?;
        SecretKey::<C>::from_slice(scalar.as_bytes())
            .map_err(|_| Error::invalid_private_key(context, "scalar is out of range"))
    }

    fn to_point(&self, public: &PublicKey<C>) -> Point {
        let encoded = public.as_affine().to_encoded_point(false);
        Point::from_validated(self.id, encoded.as_bytes().to_vec())
    }

    fn to_scalar(&self, secret: &SecretKey<C>) -> Scalar {
        Scalar::from_validated(self.id, secret.to_bytes().to_vec())
    }
}

impl<C> CurveGroup for Backend<C>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    fn id(&self) -> CurveId {
        self.id
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        let size = self.info().field_size;
        let expected = match bytes.first() {
            Some(0x02) | Some(0x03) => 1 + size,
            Some(0x04) => 1 + 2 * size,
            Some(0x00) => {
                return Err(Error::invalid_point(
                    "CurveGroup::decode_point",
                    "point at infinity",
                ))
            }
            Some(tag) => {
                return Err(Error::invalid_point(
                    "CurveGroup::decode_point",
                    format!("unsupported point tag 0x{:02x}", tag),
                ))
            }
            None => return Err(Error::invalid_point("CurveGroup::decode_point", "empty point")),
        };
        if bytes.len() != expected {
            return Err(Error::invalid_point(
                "CurveGroup::decode_point",
                format!("expected {} bytes, got {}", expected, bytes.len()),
            ));
        }

        let public = PublicKey::<C>::from_sec1_bytes(bytes).map_err(|_| {
            Error::invalid_point("CurveGroup::decode_point", "point is not on the curve")
        })?;
        Ok(self.to_point(&public))
    }

    fn is_valid_point(&self, point: &Point) -> bool {
        self.public_key("CurveGroup::is_valid_point", point).is_ok()
    }

    fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<Scalar> {
        let size = self.info().order_size;
        if bytes.len() != size {
            return Err(Error::InvalidLength {
                context: "CurveGroup::scalar_from_bytes",
                expected: size,
                actual: bytes.len(),
            });
        }
        let secret = SecretKey::<C>::from_slice(bytes).map_err(|_| {
            Error::invalid_private_key("CurveGroup::scalar_from_bytes", "scalar is out of range")
        })?;
        Ok(self.to_scalar(&secret))
    }

    fn random_scalar(&self, rng: &mut dyn CryptoRngCore) -> Result<Scalar> {
        let info = self.info();
        // Mask the top byte down to the order's bit length so that almost
        // every draw lands below n.
        let mask = 0xFFu8 >> info.n[0].leading_zeros();
        let mut candidate = Zeroizing::new(vec![0u8; info.order_size]);

        for _ in 0..KEYGEN_MAX_ATTEMPTS {
            rng.try_fill_bytes(&mut candidate).map_err(|e| {
                Error::operation_failed(
                    "CurveGroup::random_scalar",
                    format!("Failed to generate key: {}", e),
                )
            })?;
            candidate[0] &= mask;

            if let Ok(secret) = SecretKey::<C>::from_slice(&candidate) {
                return Ok(self.to_scalar(&secret));
            }
        }

        Err(Error::operation_failed(
            "CurveGroup::random_scalar",
            "Failed to generate key",
        ))
    }

    fn public_from_scalar(&self, scalar: &Scalar) -> Result<Point> {
        let secret = self.secret_key("CurveGroup::public_from_scalar", scalar)?;
        Ok(self.to_point(&secret.public_key()))
    }

    fn diffie_hellman(&self, scalar: &Scalar, peer: &Point) -> Result<Zeroizing<Vec<u8>>> {
        let secret = self.secret_key("CurveGroup::diffie_hellman", scalar)?;
        let public = self.public_key("CurveGroup::diffie_hellman", peer)?;

        let shared =
            elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), public.as_affine());
        Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
    }
}
