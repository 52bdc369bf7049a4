//! Raw keys: the bare SEC1 public point

use super::encode_public;
use crate::curves::CurveParams;
use crate::key::KeyMaterial;
use crate::point::decode_point;
use eckit_api::{PointForm, Result};

pub(super) fn export(key: &KeyMaterial) -> Result<Vec<u8>> {
    encode_public("export_raw", key, PointForm::Uncompressed)
}

pub(super) fn import(curve: CurveParams, bytes: &[u8]) -> Result<KeyMaterial> {
    let point = decode_point(&curve, bytes)?;
    KeyMaterial::from_public(curve, point)
}
