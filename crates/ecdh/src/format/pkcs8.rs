//! `PrivateKeyInfo` (RFC 5208) wrapping an `ECPrivateKey` (RFC 5915)

use super::params;
use crate::curves::CurveParams;
use crate::key::KeyMaterial;
use crate::point::decode_point;
use crate::validate::is_private_key_valid_for;
use eckit_algorithms::encoding::der::{self, tag, DerReader};
use eckit_api::{Error, Result};
use eckit_internal::bigendian::left_pad;
use eckit_internal::ct_eq;
use eckit_params::EC_PRIVATE_KEY_VERSION;
use zeroize::Zeroizing;

const ONE_ASYMMETRIC_KEY_PUBLIC: u8 = 0x81;

pub(super) fn export(key: &KeyMaterial) -> Result<Zeroizing<Vec<u8>>> {
    let scalar = key.private_scalar().ok_or_else(|| {
        Error::invalid_key_type("export_pkcs8", "PKCS#8 export requires a private key")
    })?;
    let point = key.public_point().ok_or_else(|| {
        Error::operation_failed("export_pkcs8", "Failed to get EC public key")
    })?;

    let version = der::unsigned_integer(&[EC_PRIVATE_KEY_VERSION as u8]);
    let private = Zeroizing::new(der::octet_string(scalar.as_bytes()));
    let public = der::tlv(tag::CONTEXT_1, &der::bit_string(point.as_uncompressed()));
    let ec_private_key = Zeroizing::new(der::sequence(&[&version, private.as_slice(), &public]));

    let algorithm = params::algorithm_identifier(key.curve());
    let wrapped = Zeroizing::new(der::octet_string(&ec_private_key));
    Ok(Zeroizing::new(der::sequence(&[
        &der::unsigned_integer(&[0]),
        &algorithm,
        wrapped.as_slice(),
    ])))
}

pub(super) fn import(bytes: &[u8]) -> Result<KeyMaterial> {
    let mut outer = DerReader::new(bytes, "import_pkcs8");
    let mut info = outer.read_sequence()?;
    outer.finish()?;

    let version = info.read_small_integer()?;
    if version > 1 {
        return Err(Error::serialization(
            "import_pkcs8",
            format!("unsupported PrivateKeyInfo version {}", version),
        ));
    }
    let curve = params::read_algorithm_identifier(&mut info)?;
    let private_key = info.read(tag::OCTET_STRING)?;
    // attributes [0] and the v2 publicKey [1] IMPLICIT BIT STRING are ignored
    info.read_optional(tag::CONTEXT_0)?;
    info.read_optional(ONE_ASYMMETRIC_KEY_PUBLIC)?;
    info.finish()?;

    read_ec_private_key(curve, private_key)
}

fn read_ec_private_key(curve: CurveParams, bytes: &[u8]) -> Result<KeyMaterial> {
    let mut outer = DerReader::new(bytes, "import_pkcs8");
    let mut ec = outer.read_sequence()?;
    outer.finish()?;

    if ec.read_small_integer()? != EC_PRIVATE_KEY_VERSION {
        return Err(Error::serialization(
            "import_pkcs8",
            "unsupported ECPrivateKey version",
        ));
    }
    let raw = ec.read(tag::OCTET_STRING)?;
    let embedded_params = ec.read_optional(tag::CONTEXT_0)?;
    let embedded_public = ec.read_optional(tag::CONTEXT_1)?;
    ec.finish()?;

    if let Some(content) = embedded_params {
        let mut reader = DerReader::new(content, "import_pkcs8");
        let named = params::read_ec_parameters(&mut reader)?;
        reader.finish()?;
        if named.id() != curve.id() {
            return Err(Error::invalid_curve(
                "import_pkcs8",
                "ECPrivateKey parameters disagree with the algorithm identifier",
            ));
        }
    }

    let invalid = || Error::invalid_private_key("import_pkcs8", "Invalid EC private key");
    if !is_private_key_valid_for(&curve, raw) {
        return Err(invalid());
    }
    let padded = Zeroizing::new(left_pad(raw, curve.order_size()).ok_or_else(invalid)?);
    let scalar = curve.group().scalar_from_bytes(&padded).map_err(|_| invalid())?;
    let key = KeyMaterial::from_private(curve, scalar)?;

    if let Some(content) = embedded_public {
        let mut reader = DerReader::new(content, "import_pkcs8");
        let encoded = reader.read_bit_string()?;
        reader.finish()?;
        let point = decode_point(&curve, encoded)?;
        let matches = key
            .public_point()
            .map_or(false, |derived| ct_eq(derived.as_uncompressed(), point.as_uncompressed()));
        if !matches {
            return Err(Error::invalid_key_pair(
                "import_pkcs8",
                "embedded public key does not match the private key",
            ));
        }
    }
    Ok(key)
}
