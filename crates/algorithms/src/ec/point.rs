use core::fmt;
use eckit_params::CurveId;

/// A validated curve point, never the point at infinity
///
/// Stored as its uncompressed SEC1 encoding `0x04 || X || Y`. Values of
/// this type are only produced by a [`CurveGroup`](super::CurveGroup), so
/// holding one implies the coordinates satisfied the curve equation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Point {
    curve: CurveId,
    encoded: Vec<u8>,
}

impl Point {
    pub(crate) fn from_validated(curve: CurveId, encoded: Vec<u8>) -> Self {
        Self { curve, encoded }
    }

    /// Curve the point lives on
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Uncompressed SEC1 encoding
    pub fn as_uncompressed(&self) -> &[u8] {
        &self.encoded
    }

    /// Big-endian affine x-coordinate, field width
    pub fn x(&self) -> &[u8] {
        let size = self.curve.info().field_size;
        &self.encoded[1..1 + size]
    }

    /// Big-endian affine y-coordinate, field width
    pub fn y(&self) -> &[u8] {
        let size = self.curve.info().field_size;
        &self.encoded[1 + size..]
    }

    /// True when the y-coordinate is odd
    pub fn y_is_odd(&self) -> bool {
        self.encoded.last().map_or(false, |b| b & 1 == 1)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("curve", &self.curve.short_name())
            .field("x", &hex::encode(self.x()))
            .field("y", &hex::encode(self.y()))
            .finish()
    }
}
