//! Key material shared by every ECDH operation
//!
//! A [`KeyMaterial`] is either empty (freshly constructed [`Ecdh`](crate::Ecdh)
//! object), public-only, or a full key pair. Constructors that take a
//! private scalar always derive the public point from it, so the
//! `public = private * G` invariant holds for every value built through
//! this module.

use crate::curves::CurveParams;
use eckit_algorithms::{Point, Scalar};
use eckit_api::{Error, KeyType, Result};

/// A curve reference plus optional public point and private scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    curve: CurveParams,
    public: Option<Point>,
    private: Option<Scalar>,
}

impl KeyMaterial {
    /// A key with neither component set
    pub fn empty(curve: CurveParams) -> Self {
        Self {
            curve,
            public: None,
            private: None,
        }
    }

    /// A public-only key
    pub fn from_public(curve: CurveParams, public: Point) -> Result<Self> {
        check_curve("KeyMaterial::from_public", &curve, public.curve())?;
        Ok(Self {
            curve,
            public: Some(public),
            private: None,
        })
    }

    /// A full key pair, deriving the public point from `private`
    pub fn from_private(curve: CurveParams, private: Scalar) -> Result<Self> {
        check_curve("KeyMaterial::from_private", &curve, private.curve())?;
        let public = curve.group().public_from_scalar(&private)?;
        Ok(Self {
            curve,
            public: Some(public),
            private: Some(private),
        })
    }

    /// Assemble a key without checking that the components agree
    ///
    /// Used when a caller replaces one half of an existing pair; run
    /// [`is_key_pair_valid`](crate::is_key_pair_valid) before trusting
    /// the result.
    pub fn from_parts(curve: CurveParams, public: Option<Point>, private: Option<Scalar>) -> Self {
        Self {
            curve,
            public,
            private,
        }
    }

    /// The public half of this key
    ///
    /// # Errors
    /// `InvalidKeyType` if no public point is set.
    pub fn to_public(&self) -> Result<Self> {
        match &self.public {
            Some(point) => Ok(Self {
                curve: self.curve,
                public: Some(point.clone()),
                private: None,
            }),
            None => Err(Error::invalid_key_type(
                "KeyMaterial::to_public",
                "key has no public component",
            )),
        }
    }

    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    pub fn public_point(&self) -> Option<&Point> {
        self.public.as_ref()
    }

    pub fn private_scalar(&self) -> Option<&Scalar> {
        self.private.as_ref()
    }

    pub fn has_private(&self) -> bool {
        self.private.is_some()
    }

    /// `Private` when a scalar is present, otherwise `Public`
    pub fn key_type(&self) -> KeyType {
        if self.private.is_some() {
            KeyType::Private
        } else {
            KeyType::Public
        }
    }

    /// Short name of the key's curve
    pub fn named_curve(&self) -> &'static str {
        self.curve.short_name()
    }
}

fn check_curve(
    context: &'static str,
    curve: &CurveParams,
    actual: eckit_params::CurveId,
) -> Result<()> {
    if curve.id() != actual {
        return Err(Error::invalid_curve(
            context,
            format!(
                "component belongs to {} but key is on {}",
                actual.short_name(),
                curve.short_name()
            ),
        ));
    }
    Ok(())
}
