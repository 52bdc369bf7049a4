//! Value types shared across the eckit crates
//!
//! The numeric codes accepted by the `TryFrom` conversions are the ones a
//! host binding passes across its boundary; they are defined in
//! `eckit-params`.

use crate::{Error, Result};
use eckit_params::{
    EC_EXPLICIT_CURVE, EC_NAMED_CURVE, POINT_CONVERSION_COMPRESSED, POINT_CONVERSION_HYBRID,
    POINT_CONVERSION_UNCOMPRESSED,
};

/// SEC1 octet-string form of an encoded curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointForm {
    /// `0x02 | 0x03 || X`
    Compressed,
    /// `0x04 || X || Y`
    #[default]
    Uncompressed,
    /// `0x06 | 0x07 || X || Y`
    Hybrid,
}

impl PointForm {
    /// Numeric conversion-form code
    pub fn code(self) -> u32 {
        match self {
            PointForm::Compressed => POINT_CONVERSION_COMPRESSED,
            PointForm::Uncompressed => POINT_CONVERSION_UNCOMPRESSED,
            PointForm::Hybrid => POINT_CONVERSION_HYBRID,
        }
    }
}

impl TryFrom<u32> for PointForm {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            POINT_CONVERSION_COMPRESSED => Ok(PointForm::Compressed),
            POINT_CONVERSION_UNCOMPRESSED => Ok(PointForm::Uncompressed),
            POINT_CONVERSION_HYBRID => Ok(PointForm::Hybrid),
            other => Err(Error::operation_failed(
                "PointForm::try_from",
                format!("unknown point conversion form {}", other),
            )),
        }
    }
}

/// How curve parameters are written into PKCS8 / SPKI structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamEncoding {
    /// The curve's OBJECT IDENTIFIER
    #[default]
    Named,
    /// Full `ECParameters`: field, coefficients, base point, order, cofactor
    Explicit,
}

impl ParamEncoding {
    /// Numeric parameter-encoding code
    pub fn code(self) -> i32 {
        match self {
            ParamEncoding::Named => EC_NAMED_CURVE,
            ParamEncoding::Explicit => EC_EXPLICIT_CURVE,
        }
    }
}

impl TryFrom<i32> for ParamEncoding {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            EC_NAMED_CURVE => Ok(ParamEncoding::Named),
            EC_EXPLICIT_CURVE => Ok(ParamEncoding::Explicit),
            _ => Err(Error::out_of_range(
                "ParamEncoding::try_from",
                "Invalid param_encoding specified",
            )),
        }
    }
}

/// Whether a key carries a private scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Public,
    Private,
}

/// Import / export container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// Bare SEC1 point (public keys only)
    Raw,
    /// DER `PrivateKeyInfo` (private keys only)
    Pkcs8,
    /// DER `SubjectPublicKeyInfo` (public keys only)
    Spki,
    /// JSON Web Key
    Jwk,
}
