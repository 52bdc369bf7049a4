//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time test for an all-zero byte string
pub fn ct_is_zero(bytes: &[u8]) -> bool {
    let acc = bytes.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0u8).into()
}

/// Constant-time `a < b` for two equal-length big-endian unsigned integers
///
/// Slices of different lengths compare as "not less".
pub fn ct_lt_be(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut lt = Choice::from(0);
    let mut gt = Choice::from(0);
    for (x, y) in a.iter().zip(b.iter()) {
        let undecided = !(lt | gt);
        lt |= undecided & x.ct_lt(y);
        gt |= undecided & x.ct_gt(y);
    }
    lt.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore};

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
    }

    #[test]
    fn test_ct_is_zero() {
        assert!(ct_is_zero(&[0u8; 66]));
        assert!(ct_is_zero(&[]));
        assert!(!ct_is_zero(&[0, 0, 1]));
    }

    #[test]
    fn test_ct_lt_be_matches_integer_order() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: u32 = rng.gen();
            let b: u32 = if rng.gen_bool(0.1) { a } else { rng.gen() };
            assert_eq!(ct_lt_be(&a.to_be_bytes(), &b.to_be_bytes()), a < b, "{} < {}", a, b);
        }
    }

    #[test]
    fn test_ct_lt_be_long_operands() {
        let mut a = [0u8; 66];
        rand::thread_rng().fill_bytes(&mut a);
        a[0] = 0x00;
        let mut b = a;
        b[0] = 0x01;
        assert!(ct_lt_be(&a, &b));
        assert!(!ct_lt_be(&b, &a));
        assert!(!ct_lt_be(&a, &a));
    }
}
