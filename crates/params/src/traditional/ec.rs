//! The built-in curve table
//!
//! The table is a plain `static` slice: it is fully initialised at compile
//! time and never mutated, so it can be shared across threads freely.

use super::domain::*;

/// Identifier of a built-in curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    /// NIST P-256, also known as prime256v1 / secp256r1
    Prime256v1,
    /// NIST P-384
    Secp384r1,
    /// NIST P-521
    Secp521r1,
    /// The SEC 2 Koblitz curve used by Bitcoin
    Secp256k1,
}

impl CurveId {
    /// Table entry for this curve
    pub fn info(self) -> &'static CurveInfo {
        match self {
            CurveId::Prime256v1 => &CURVES[3],
            CurveId::Secp384r1 => &CURVES[1],
            CurveId::Secp521r1 => &CURVES[2],
            CurveId::Secp256k1 => &CURVES[0],
        }
    }

    /// Object-identifier short name, e.g. `prime256v1`
    pub fn short_name(self) -> &'static str {
        self.info().short_name
    }
}

/// Static description of a named curve
///
/// Byte-string fields are big-endian and left-padded to `field_size`
/// (`n` to `order_size`). `oid` holds the content octets of the curve's
/// OBJECT IDENTIFIER, without tag and length.
#[derive(Debug, PartialEq, Eq)]
pub struct CurveInfo {
    pub id: CurveId,
    pub short_name: &'static str,
    pub nist_name: Option<&'static str>,
    /// `crv` value used in JSON Web Keys
    pub jwk_name: &'static str,
    pub oid: &'static [u8],
    pub oid_str: &'static str,
    pub degree_bits: usize,
    pub field_size: usize,
    pub order_size: usize,
    pub p: &'static [u8],
    pub a: &'static [u8],
    pub b: &'static [u8],
    pub gx: &'static [u8],
    pub gy: &'static [u8],
    pub n: &'static [u8],
    pub cofactor: u8,
}

/// All built-in curves, in enumeration order
pub static CURVES: [CurveInfo; 4] = [
    CurveInfo {
        id: CurveId::Secp256k1,
        short_name: "secp256k1",
        nist_name: None,
        jwk_name: "secp256k1",
        oid: &[0x2B, 0x81, 0x04, 0x00, 0x0A],
        oid_str: "1.3.132.0.10",
        degree_bits: 256,
        field_size: 32,
        order_size: 32,
        p: &SECP256K1_P,
        a: &SECP256K1_A,
        b: &SECP256K1_B,
        gx: &SECP256K1_GX,
        gy: &SECP256K1_GY,
        n: &SECP256K1_N,
        cofactor: 1,
    },
    CurveInfo {
        id: CurveId::Secp384r1,
        short_name: "secp384r1",
        nist_name: Some("P-384"),
        jwk_name: "P-384",
        oid: &[0x2B, 0x81, 0x04, 0x00, 0x22],
        oid_str: "1.3.132.0.34",
        degree_bits: 384,
        field_size: 48,
        order_size: 48,
        p: &P384_P,
        a: &P384_A,
        b: &P384_B,
        gx: &P384_GX,
        gy: &P384_GY,
        n: &P384_N,
        cofactor: 1,
    },
    CurveInfo {
        id: CurveId::Secp521r1,
        short_name: "secp521r1",
        nist_name: Some("P-521"),
        jwk_name: "P-521",
        oid: &[0x2B, 0x81, 0x04, 0x00, 0x23],
        oid_str: "1.3.132.0.35",
        degree_bits: 521,
        field_size: 66,
        order_size: 66,
        p: &P521_P,
        a: &P521_A,
        b: &P521_B,
        gx: &P521_GX,
        gy: &P521_GY,
        n: &P521_N,
        cofactor: 1,
    },
    CurveInfo {
        id: CurveId::Prime256v1,
        short_name: "prime256v1",
        nist_name: Some("P-256"),
        jwk_name: "P-256",
        oid: &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07],
        oid_str: "1.2.840.10045.3.1.7",
        degree_bits: 256,
        field_size: 32,
        order_size: 32,
        p: &P256_P,
        a: &P256_A,
        b: &P256_B,
        gx: &P256_GX,
        gy: &P256_GY,
        n: &P256_N,
        cofactor: 1,
    },
];

/// Look up a curve by its object-identifier short name (case-sensitive)
pub fn by_short_name(name: &str) -> Option<&'static CurveInfo> {
    CURVES.iter().find(|c| c.short_name == name)
}

/// Look up a curve by its NIST alias, e.g. `P-256` (case-sensitive)
pub fn by_nist_name(name: &str) -> Option<&'static CurveInfo> {
    CURVES.iter().find(|c| c.nist_name == Some(name))
}

/// Look up a curve by the content octets of its OBJECT IDENTIFIER
pub fn by_oid(oid: &[u8]) -> Option<&'static CurveInfo> {
    CURVES.iter().find(|c| c.oid == oid)
}
