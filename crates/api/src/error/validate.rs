//! Validation utilities shared by the eckit crates

use super::{Error, Result};
use eckit_params::MAX_INPUT_LEN;

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject externally supplied buffers above the hard size limit
#[inline(always)]
pub fn input_size(context: &'static str, actual: usize) -> Result<()> {
    if actual > MAX_INPUT_LEN {
        return Err(Error::out_of_range(context, "input buffer is too big"));
    }
    Ok(())
}
