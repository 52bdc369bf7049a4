//! JSON Web Keys for EC (RFC 7518 §6.2)
//!
//! Coordinates and the private scalar are base64url, field width. On
//! import the members are checked one by one against a
//! `serde_json::Value` so that a wrong JSON type is reported as
//! `InvalidJwk` rather than a generic deserialization error.

use crate::curves::CurveParams;
use crate::key::KeyMaterial;
use crate::validate::is_private_key_valid_for;
use core::fmt;
use eckit_algorithms::encoding::base64url;
use eckit_api::{Error, Result};
use eckit_internal::bigendian::left_pad;
use eckit_internal::ct_eq;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// An EC JSON Web Key
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Jwk {
    pub kty: String,
    pub crv: String,
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl Jwk {
    /// True when the key carries a private scalar
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    /// The key as a JSON object
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| Error::serialization("Jwk::to_value", e.to_string()))
    }

    /// The key as compact JSON text
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization("Jwk::to_json", e.to_string()))
    }
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("d", &self.d.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

pub(super) fn export(key: &KeyMaterial) -> Result<Jwk> {
    let curve = key.curve();
    let point = key
        .public_point()
        .ok_or_else(|| Error::operation_failed("export_jwk", "Failed to get EC public key"))?;

    let d = match key.private_scalar() {
        Some(scalar) => {
            let padded = left_pad(scalar.as_bytes(), curve.field_size()).ok_or_else(|| {
                Error::operation_failed("export_jwk", "Failed to encode EC private key")
            })?;
            Some(base64url::encode(&Zeroizing::new(padded)))
        }
        None => None,
    };

    Ok(Jwk {
        kty: "EC".to_string(),
        crv: curve.jwk_name().to_string(),
        x: base64url::encode(point.x()),
        y: base64url::encode(point.y()),
        d,
    })
}

fn invalid(message: &str) -> Error {
    Error::invalid_jwk("import_jwk", message.to_string())
}

fn string_member<'a>(object: &'a Map<String, Value>, name: &str) -> Result<Option<&'a str>> {
    match object.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid("Invalid JWK EC key")),
    }
}

fn decode_member(value: &str, width: usize) -> Result<Zeroizing<Vec<u8>>> {
    let raw = Zeroizing::new(base64url::decode(value).map_err(|_| invalid("Invalid JWK EC key"))?);
    left_pad(&raw, width)
        .map(Zeroizing::new)
        .ok_or_else(|| invalid("Invalid JWK EC key"))
}

pub(super) fn import(curve: CurveParams, value: &Value) -> Result<KeyMaterial> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid("Invalid JWK EC key"))?;

    if let Some(kty) = string_member(object, "kty")? {
        if kty != "EC" {
            return Err(invalid("Invalid JWK EC key"));
        }
    }
    if let Some(crv) = string_member(object, "crv")? {
        let known = crv == curve.jwk_name()
            || crv == curve.short_name()
            || curve.nist_name() == Some(crv);
        if !known {
            debug!(crv, curve = curve.short_name(), "JWK curve mismatch");
            return Err(invalid("JWK \"crv\" does not match the requested curve"));
        }
    }

    let x = string_member(object, "x")?.ok_or_else(|| invalid("Invalid JWK EC key"))?;
    let y = string_member(object, "y")?.ok_or_else(|| invalid("Invalid JWK EC key"))?;
    let d = string_member(object, "d")?;

    let group = curve.group();
    let x = decode_member(x, curve.field_size())?;
    let y = decode_member(y, curve.field_size())?;
    let point = group
        .point_from_coordinates(&x, &y)
        .map_err(|_| invalid("Invalid JWK EC key"))?;

    let Some(d) = d else {
        return KeyMaterial::from_public(curve, point);
    };

    let d = decode_member(d, curve.order_size())?;
    if !is_private_key_valid_for(&curve, &d) {
        return Err(invalid("Invalid JWK EC key"));
    }
    let scalar = group
        .scalar_from_bytes(&d)
        .map_err(|_| invalid("Invalid JWK EC key"))?;
    let key = KeyMaterial::from_private(curve, scalar)?;

    let consistent = key
        .public_point()
        .map_or(false, |derived| ct_eq(derived.as_uncompressed(), point.as_uncompressed()));
    if !consistent {
        return Err(invalid("JWK public key does not match the private key"));
    }
    Ok(key)
}
