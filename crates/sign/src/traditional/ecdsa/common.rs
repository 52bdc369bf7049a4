//! Common utilities for ECDSA signatures

use eckit_algorithms::encoding::der::{self, DerReader};
use eckit_api::{Error, Result};
use eckit_internal::bigendian::{left_pad, strip_leading_zeros};

/// ECDSA signature components (r, s)
///
/// Both values are unsigned big-endian magnitudes without leading zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Build from big-endian magnitudes, dropping any leading zeros
    pub fn new(r: &[u8], s: &[u8]) -> Self {
        Self {
            r: strip_leading_zeros(r).to_vec(),
            s: strip_leading_zeros(s).to_vec(),
        }
    }

    /// Serialize signature to DER format
    pub fn to_der(&self) -> Vec<u8> {
        // DER encoding: SEQUENCE { INTEGER r, INTEGER s }
        der::sequence(&[&der::unsigned_integer(&self.r), &der::unsigned_integer(&self.s)])
    }

    /// Parse signature from DER format
    ///
    /// Rejects negative or non-minimal integers, non-minimal lengths and
    /// trailing bytes after the SEQUENCE.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let mut outer = DerReader::new(bytes, "ECDSA DER parsing");
        let mut seq = outer.read_sequence()?;
        let r = seq.read_unsigned_integer()?;
        let s = seq.read_unsigned_integer()?;
        seq.finish()?;
        outer.finish()?;
        Ok(Self::new(r, s))
    }

    /// Concatenate `r || s`, each left-padded to `width` bytes
    pub fn to_fixed(&self, width: usize) -> Result<Vec<u8>> {
        let too_big = || {
            Error::serialization(
                "SignatureComponents::to_fixed",
                format!("component does not fit in {} bytes", width),
            )
        };
        let mut out = left_pad(&self.r, width).ok_or_else(too_big)?;
        out.extend(left_pad(&self.s, width).ok_or_else(too_big)?);
        Ok(out)
    }

    /// Split a fixed-width `r || s` string into its two halves
    pub fn from_fixed(bytes: &[u8], width: usize) -> Result<Self> {
        eckit_api::error::validate::length("SignatureComponents::from_fixed", bytes.len(), 2 * width)?;
        let (r, s) = bytes.split_at(width);
        Ok(Self::new(r, s))
    }
}
