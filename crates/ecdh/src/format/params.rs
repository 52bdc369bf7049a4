//! `AlgorithmIdentifier` and `ECParameters` for `id-ecPublicKey`
//!
//! Named curves are written as the curve OID. Explicit curves follow
//! RFC 3279: prime field, coefficients, uncompressed base point, order
//! and cofactor. Explicit parameters read back are matched against the
//! built-in table; an unknown curve cannot be imported.

use crate::curves::CurveParams;
use crate::point::decode_point;
use eckit_algorithms::encoding::der::{self, tag, DerReader};
use eckit_api::{Error, ParamEncoding, Result};
use eckit_internal::bigendian::strip_leading_zeros;
use eckit_params::traditional::ec::by_oid;
use eckit_params::{CurveInfo, CURVES, EC_PARAMETERS_VERSION, ID_EC_PUBLIC_KEY, ID_PRIME_FIELD};

/// DER `AlgorithmIdentifier` for an EC key on `curve`
pub(super) fn algorithm_identifier(curve: &CurveParams) -> Vec<u8> {
    let algorithm = der::oid(ID_EC_PUBLIC_KEY);
    let parameters = ec_parameters(curve);
    der::sequence(&[&algorithm, &parameters])
}

/// The `parameters` field alone, as found in `ECPrivateKey [0]`
pub(super) fn ec_parameters(curve: &CurveParams) -> Vec<u8> {
    match curve.param_encoding() {
        ParamEncoding::Named => der::oid(curve.oid()),
        ParamEncoding::Explicit => explicit_parameters(curve.info()),
    }
}

fn explicit_parameters(info: &CurveInfo) -> Vec<u8> {
    let version = der::unsigned_integer(&[EC_PARAMETERS_VERSION as u8]);
    let field_id = der::sequence(&[&der::oid(ID_PRIME_FIELD), &der::unsigned_integer(info.p)]);
    let coefficients = der::sequence(&[&der::octet_string(info.a), &der::octet_string(info.b)]);

    let mut base = Vec::with_capacity(1 + 2 * info.field_size);
    base.push(0x04);
    base.extend_from_slice(info.gx);
    base.extend_from_slice(info.gy);

    der::sequence(&[
        &version,
        &field_id,
        &coefficients,
        &der::octet_string(&base),
        &der::unsigned_integer(info.n),
        &der::unsigned_integer(&[info.cofactor]),
    ])
}

/// Read an `AlgorithmIdentifier`, returning the curve it names
///
/// # Errors
/// `InvalidKeyType` for a non-EC algorithm, `InvalidCurve` for unknown
/// parameters, `SerializationError` for malformed DER.
pub(super) fn read_algorithm_identifier(reader: &mut DerReader<'_>) -> Result<CurveParams> {
    let mut alg = reader.read_sequence()?;
    let algorithm = alg.read(tag::OID)?;
    if algorithm != ID_EC_PUBLIC_KEY {
        return Err(Error::invalid_key_type(
            "read_algorithm_identifier",
            "key is not an EC key",
        ));
    }
    let curve = read_ec_parameters(&mut alg)?;
    alg.finish()?;
    Ok(curve)
}

/// Read a named-curve OID or explicit `ECParameters`
pub(super) fn read_ec_parameters(reader: &mut DerReader<'_>) -> Result<CurveParams> {
    match reader.peek_tag() {
        Some(tag::OID) => {
            let oid = reader.read(tag::OID)?;
            let info = by_oid(oid).ok_or_else(|| {
                Error::invalid_curve("read_ec_parameters", "unsupported named curve")
            })?;
            Ok(CurveParams::new(info.id))
        }
        Some(tag::SEQUENCE) => {
            let info = read_explicit(reader.read_sequence()?)?;
            Ok(CurveParams::new(info.id).with_encoding(ParamEncoding::Explicit))
        }
        _ => Err(Error::invalid_curve(
            "read_ec_parameters",
            "missing or implicit curve parameters",
        )),
    }
}

fn read_explicit(mut params: DerReader<'_>) -> Result<&'static CurveInfo> {
    let version = params.read_small_integer()?;
    if !(1..=3).contains(&version) {
        return Err(Error::serialization(
            "read_ec_parameters",
            format!("unsupported ECParameters version {}", version),
        ));
    }

    let mut field_id = params.read_sequence()?;
    if field_id.read(tag::OID)? != ID_PRIME_FIELD {
        return Err(Error::invalid_curve(
            "read_ec_parameters",
            "only prime-field curves are supported",
        ));
    }
    let p = field_id.read_unsigned_integer()?;
    field_id.finish()?;

    let mut coefficients = params.read_sequence()?;
    let a = coefficients.read(tag::OCTET_STRING)?;
    let b = coefficients.read(tag::OCTET_STRING)?;
    coefficients.read_optional(tag::BIT_STRING)?;
    coefficients.finish()?;

    let base = params.read(tag::OCTET_STRING)?;
    let n = params.read_unsigned_integer()?;
    let cofactor = match params.read_optional(tag::INTEGER)? {
        Some(h) => strip_leading_zeros(h).to_vec(),
        None => vec![1],
    };
    params.finish()?;

    let info = CURVES
        .iter()
        .find(|info| {
            same_integer(info.p, p)
                && same_integer(info.a, a)
                && same_integer(info.b, b)
                && same_integer(info.n, n)
                && cofactor == [info.cofactor]
        })
        .ok_or_else(|| Error::invalid_curve("read_ec_parameters", "unknown explicit curve"))?;

    // SEC1 allows the base point in any form, hybrid included
    let curve = CurveParams::new(info.id);
    let generator = curve.group().generator()?;
    let decoded = decode_point(&curve, base)
        .map_err(|_| Error::invalid_curve("read_ec_parameters", "invalid base point"))?;
    if decoded != generator {
        return Err(Error::invalid_curve(
            "read_ec_parameters",
            "base point does not match the curve generator",
        ));
    }
    Ok(info)
}

// Variable time; only public domain parameters reach this.
fn same_integer(a: &[u8], b: &[u8]) -> bool {
    strip_leading_zeros(a) == strip_leading_zeros(b)
}
