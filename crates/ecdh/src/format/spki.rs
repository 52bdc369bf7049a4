//! `SubjectPublicKeyInfo` (RFC 5480)

use super::{encode_public, params};
use crate::key::KeyMaterial;
use crate::point::decode_point;
use eckit_algorithms::encoding::der::{self, DerReader};
use eckit_api::{PointForm, Result};

pub(super) fn export(key: &KeyMaterial) -> Result<Vec<u8>> {
    let point = encode_public("export_spki", key, PointForm::Uncompressed)?;
    let algorithm = params::algorithm_identifier(key.curve());
    Ok(der::sequence(&[&algorithm, &der::bit_string(&point)]))
}

pub(super) fn import(bytes: &[u8]) -> Result<KeyMaterial> {
    let mut outer = DerReader::new(bytes, "import_spki");
    let mut spki = outer.read_sequence()?;
    outer.finish()?;

    let curve = params::read_algorithm_identifier(&mut spki)?;
    let public = spki.read_bit_string()?;
    spki.finish()?;

    let point = decode_point(&curve, public)?;
    KeyMaterial::from_public(curve, point)
}
