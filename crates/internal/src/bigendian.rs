//! Helpers for fixed-width big-endian unsigned integers

/// Strip leading zero bytes, keeping an empty slice for zero
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Left-pad `bytes` with zeros to exactly `width` bytes
///
/// Leading zeros in the input are ignored. Returns `None` when the
/// value does not fit in `width` bytes.
pub fn left_pad(bytes: &[u8], width: usize) -> Option<Vec<u8>> {
    let value = strip_leading_zeros(bytes);
    if value.len() > width {
        return None;
    }
    let mut out = vec![0u8; width];
    out[width - value.len()..].copy_from_slice(value);
    Some(out)
}
