use core::fmt;
use eckit_params::CurveId;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A private scalar in `[1, n-1]`
///
/// Held as `order_size` big-endian bytes and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    #[zeroize(skip)]
    curve: CurveId,
    bytes: Vec<u8>,
}

impl Scalar {
    pub(crate) fn from_validated(curve: CurveId, bytes: Vec<u8>) -> Self {
        Self { curve, bytes }
    }

    /// Curve the scalar belongs to
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Borrow the fixed-width big-endian bytes
    ///
    /// # Security Note
    /// This is key material. Prefer [`Scalar::to_bytes`] when the bytes
    /// need to outlive the borrow.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy out the fixed-width big-endian bytes
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && eckit_internal::ct_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({}, [REDACTED])", self.curve.short_name())
    }
}
