//! SEC1 point octet strings
//!
//! | form         | layout              |
//! |--------------|---------------------|
//! | compressed   | `02/03 ‖ X`         |
//! | uncompressed | `04 ‖ X ‖ Y`        |
//! | hybrid       | `06/07 ‖ X ‖ Y`     |
//!
//! `X` and `Y` are always field width. Decoding goes through the curve
//! backend so the on-curve check is the library's own.

use crate::curves::{resolve_short_name, CurveParams};
use eckit_algorithms::Point;
use eckit_api::error::validate;
use eckit_api::{Error, PointForm, Result};
use tracing::debug;

/// Serialize `point` in the requested form
pub fn encode_point(point: &Point, form: PointForm) -> Vec<u8> {
    let parity = u8::from(point.y_is_odd());
    match form {
        PointForm::Uncompressed => point.as_uncompressed().to_vec(),
        PointForm::Compressed => {
            let mut out = Vec::with_capacity(1 + point.x().len());
            out.push(0x02 | parity);
            out.extend_from_slice(point.x());
            out
        }
        PointForm::Hybrid => {
            let mut out = point.as_uncompressed().to_vec();
            out[0] = 0x06 | parity;
            out
        }
    }
}

/// Parse a point in any of the three forms
///
/// # Errors
/// `InvalidPoint` for a bad tag or length, an off-curve point, the
/// encoding of infinity, or a hybrid tag whose parity disagrees with `Y`.
pub fn decode_point(curve: &CurveParams, bytes: &[u8]) -> Result<Point> {
    let group = curve.group();
    match bytes.first() {
        Some(tag @ (0x06 | 0x07)) => {
            let expected = 1 + 2 * curve.field_size();
            if bytes.len() != expected {
                return Err(Error::invalid_point(
                    "decode_point",
                    format!("expected {} bytes, got {}", expected, bytes.len()),
                ));
            }
            let mut uncompressed = bytes.to_vec();
            uncompressed[0] = 0x04;
            let point = group.decode_point(&uncompressed)?;
            if point.y_is_odd() != (tag & 1 == 1) {
                return Err(Error::invalid_point(
                    "decode_point",
                    "hybrid tag does not match y parity",
                ));
            }
            Ok(point)
        }
        _ => group.decode_point(bytes),
    }
}

/// Re-encode a point given on the named curve
///
/// An empty input yields an empty output without looking the curve up.
///
/// # Errors
/// `OutOfRange` for oversized input, `InvalidCurve` for an unknown short
/// name, and `OperationFailed` when the bytes are not a point.
pub fn convert_key(key: &[u8], curve_short_name: &str, form: PointForm) -> Result<Vec<u8>> {
    validate::input_size("convert_key", key.len())?;
    if key.is_empty() {
        return Ok(Vec::new());
    }

    let curve = resolve_short_name(curve_short_name)?;
    let point = decode_point(&curve, key).map_err(|e| {
        debug!(curve = curve_short_name, error = %e, "convert_key rejected input");
        Error::operation_failed("convert_key", "Failed to convert Buffer to EC_POINT")
    })?;
    Ok(encode_point(&point, form))
}
