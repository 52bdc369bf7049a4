//! Key import and export
//!
//! | format | key type     | layout                                      |
//! |--------|--------------|---------------------------------------------|
//! | Raw    | public       | uncompressed SEC1 point                     |
//! | Spki   | public       | `SubjectPublicKeyInfo`, `id-ecPublicKey`    |
//! | Pkcs8  | private      | `PrivateKeyInfo` around an `ECPrivateKey`   |
//! | Jwk    | either       | `{kty, crv, x, y, d?}`                      |
//!
//! Curve parameters in SPKI and PKCS#8 follow the key's
//! [`ParamEncoding`](eckit_api::ParamEncoding).

mod jwk;
mod params;
mod pkcs8;
mod raw;
mod spki;

pub use jwk::Jwk;

use crate::curves::resolve;
use crate::key::KeyMaterial;
use crate::point::encode_point;
use core::fmt;
use eckit_api::error::validate;
use eckit_api::{Error, KeyFormat, KeyType, PointForm, Result};
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

/// An exported key, tagged with its format
#[derive(Clone, PartialEq, Eq)]
pub enum EncodedKey {
    Raw(Vec<u8>),
    Pkcs8(Zeroizing<Vec<u8>>),
    Spki(Vec<u8>),
    Jwk(Jwk),
}

impl EncodedKey {
    pub fn format(&self) -> KeyFormat {
        match self {
            EncodedKey::Raw(_) => KeyFormat::Raw,
            EncodedKey::Pkcs8(_) => KeyFormat::Pkcs8,
            EncodedKey::Spki(_) => KeyFormat::Spki,
            EncodedKey::Jwk(_) => KeyFormat::Jwk,
        }
    }

    /// The DER or octet bytes, `None` for a JWK
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodedKey::Raw(bytes) | EncodedKey::Spki(bytes) => Some(bytes.as_slice()),
            EncodedKey::Pkcs8(bytes) => Some(bytes.as_slice()),
            EncodedKey::Jwk(_) => None,
        }
    }

    pub fn as_jwk(&self) -> Option<&Jwk> {
        match self {
            EncodedKey::Jwk(jwk) => Some(jwk),
            _ => None,
        }
    }
}

impl fmt::Debug for EncodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedKey::Raw(bytes) => write!(f, "Raw({} bytes)", bytes.len()),
            EncodedKey::Pkcs8(bytes) => write!(f, "Pkcs8({} bytes, [REDACTED])", bytes.len()),
            EncodedKey::Spki(bytes) => write!(f, "Spki({} bytes)", bytes.len()),
            EncodedKey::Jwk(jwk) => f.debug_tuple("Jwk").field(jwk).finish(),
        }
    }
}

/// Input to [`import_key`]
#[derive(Debug, Clone, Copy)]
pub enum KeyData<'a> {
    /// Raw point, DER SPKI or DER PKCS#8
    Bytes(&'a [u8]),
    /// A parsed JSON Web Key
    Jwk(&'a Value),
}

fn require(context: &'static str, key: &KeyMaterial, expected: KeyType) -> Result<()> {
    if key.key_type() != expected {
        return Err(Error::invalid_key_type(
            context,
            format!("expected a {:?} key, got {:?}", expected, key.key_type()),
        ));
    }
    Ok(())
}

/// Encode the public point of a public key
fn encode_public(context: &'static str, key: &KeyMaterial, form: PointForm) -> Result<Vec<u8>> {
    require(context, key, KeyType::Public)?;
    let point = key
        .public_point()
        .ok_or_else(|| Error::invalid_key_type(context, "key has no public component"))?;
    Ok(encode_point(point, form))
}

/// Export `key` in `format`
///
/// # Errors
/// `InvalidKeyType` when the key type does not suit the format: Raw and
/// SPKI need a public key, PKCS#8 a private key.
pub fn export_key(key: &KeyMaterial, format: KeyFormat) -> Result<EncodedKey> {
    debug!(curve = key.named_curve(), ?format, key_type = ?key.key_type(), "exporting key");
    match format {
        KeyFormat::Raw => raw::export(key).map(EncodedKey::Raw),
        KeyFormat::Spki => spki::export(key).map(EncodedKey::Spki),
        KeyFormat::Pkcs8 => {
            require("export_pkcs8", key, KeyType::Private)?;
            pkcs8::export(key).map(EncodedKey::Pkcs8)
        }
        KeyFormat::Jwk => jwk::export(key).map(EncodedKey::Jwk),
    }
}

/// Import a key in `format` on the curve named `curve_name`
///
/// `curve_name` may be a NIST alias or a short name. SPKI and PKCS#8 name
/// their own curve, which must be the requested one.
///
/// # Errors
/// `InvalidCurve` for an unknown or mismatched curve, `InvalidJwk` for
/// bad JWK members, `InvalidPoint` / `InvalidPrivateKey` for bad key
/// values and `SerializationError` for malformed DER.
pub fn import_key(format: KeyFormat, curve_name: &str, data: KeyData<'_>) -> Result<KeyMaterial> {
    let curve = resolve(curve_name)?;

    let key = match (format, data) {
        (KeyFormat::Jwk, KeyData::Jwk(value)) => jwk::import(curve, value)?,
        (KeyFormat::Jwk, KeyData::Bytes(_)) => {
            return Err(Error::invalid_jwk("import_key", "expected a JSON Web Key"));
        }
        (_, KeyData::Jwk(_)) => {
            return Err(Error::invalid_key_type(
                "import_key",
                format!("{:?} import expects bytes", format),
            ));
        }
        (KeyFormat::Raw, KeyData::Bytes(bytes)) => {
            validate::input_size("import_key", bytes.len())?;
            raw::import(curve, bytes)?
        }
        (KeyFormat::Spki, KeyData::Bytes(bytes)) => {
            validate::input_size("import_key", bytes.len())?;
            spki::import(bytes)?
        }
        (KeyFormat::Pkcs8, KeyData::Bytes(bytes)) => {
            validate::input_size("import_key", bytes.len())?;
            pkcs8::import(bytes)?
        }
    };

    if key.curve().id() != curve.id() {
        debug!(
            requested = curve.short_name(),
            found = key.named_curve(),
            "imported key is on another curve"
        );
        return Err(Error::invalid_curve(
            "import_key",
            "key is not on the requested curve",
        ));
    }
    debug!(curve = key.named_curve(), ?format, key_type = ?key.key_type(), "imported key");
    Ok(key)
}
