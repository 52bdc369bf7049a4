//! Curve name resolution
//!
//! Names are matched exactly and case-sensitively against the built-in
//! table in `eckit-params`. Two lookups exist because the callers differ:
//! Web Crypto style entry points accept a NIST alias (`P-256`) or an
//! object-identifier short name (`prime256v1`), while the stateful
//! [`Ecdh`](crate::Ecdh) object and [`convert_key`](crate::convert_key)
//! only accept short names.

use eckit_algorithms::ec::{group, CurveGroup};
use eckit_api::{Error, ParamEncoding, Result};
use eckit_params::traditional::ec::{by_nist_name, by_short_name};
use eckit_params::{CurveId, CurveInfo, CURVES};
use tracing::debug;

/// A resolved curve together with how its parameters will be serialized
///
/// `param_encoding` only affects PKCS#8 / SPKI output; it never changes
/// key values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    id: CurveId,
    order_size: usize,
    param_encoding: ParamEncoding,
}

impl CurveParams {
    /// Parameters for `id` with named-curve encoding
    pub fn new(id: CurveId) -> Self {
        Self {
            id,
            order_size: id.info().order_size,
            param_encoding: ParamEncoding::Named,
        }
    }

    /// Same curve, different parameter encoding
    pub fn with_encoding(self, param_encoding: ParamEncoding) -> Self {
        Self {
            param_encoding,
            ..self
        }
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Byte length of the group order
    pub fn order_size(&self) -> usize {
        self.order_size
    }

    /// Byte length of a field element, `ceil(degree / 8)`
    pub fn field_size(&self) -> usize {
        self.info().field_size
    }

    pub fn degree_bits(&self) -> usize {
        self.info().degree_bits
    }

    pub fn param_encoding(&self) -> ParamEncoding {
        self.param_encoding
    }

    pub fn short_name(&self) -> &'static str {
        self.info().short_name
    }

    pub fn nist_name(&self) -> Option<&'static str> {
        self.info().nist_name
    }

    /// `crv` member used in JSON Web Keys
    pub fn jwk_name(&self) -> &'static str {
        self.info().jwk_name
    }

    /// Content octets of the curve's OBJECT IDENTIFIER
    pub fn oid(&self) -> &'static [u8] {
        self.info().oid
    }

    pub fn info(&self) -> &'static CurveInfo {
        self.id.info()
    }

    /// Curve-group backend for this curve
    pub fn group(&self) -> &'static dyn CurveGroup {
        group(self.id)
    }
}

/// Resolve a NIST alias or an object-identifier short name
///
/// # Errors
/// `InvalidCurve` when neither lookup matches.
pub fn resolve(name: &str) -> Result<CurveParams> {
    let info = by_nist_name(name).or_else(|| by_short_name(name));
    match info {
        Some(info) => {
            debug!(requested = name, curve = info.short_name, "resolved curve");
            Ok(CurveParams::new(info.id))
        }
        None => {
            debug!(requested = name, "unknown curve");
            Err(Error::invalid_curve("resolve", format!("unknown curve {:?}", name)))
        }
    }
}

/// Resolve an object-identifier short name only
///
/// # Errors
/// `InvalidCurve` for NIST aliases and unknown names alike.
pub fn resolve_short_name(name: &str) -> Result<CurveParams> {
    match by_short_name(name) {
        Some(info) => Ok(CurveParams::new(info.id)),
        None => {
            debug!(requested = name, "unknown curve short name");
            Err(Error::invalid_curve(
                "resolve_short_name",
                format!("unknown curve {:?}", name),
            ))
        }
    }
}

/// Short names of all built-in curves, in table order
pub fn list_curves() -> Vec<&'static str> {
    CURVES.iter().map(|c| c.short_name).collect()
}
