//! Key validity across curves

use eckit_api::Result as ApiResult;
use eckit_ecdh::validate::is_private_key_valid_for;
use eckit_ecdh::{is_key_pair_valid, is_private_key_valid, list_curves, resolve, Ecdh, Error};
use eckit_tests::keypair;
use proptest::prelude::*;

#[test]
fn test_generated_keys_pass_every_check() -> ApiResult<()> {
    for name in list_curves() {
        let curve = resolve(name)?;
        for seed in 0..8u64 {
            let key = keypair(name, seed);
            assert!(is_key_pair_valid(&key), "{}", name);
            let scalar = key.private_scalar().expect("private scalar");
            assert!(is_private_key_valid_for(&curve, scalar.as_bytes()));
        }
    }
    Ok(())
}

#[test]
fn test_order_boundaries() -> ApiResult<()> {
    for name in list_curves() {
        let mut ecdh = Ecdh::new(name)?;
        let n = ecdh.curve().info().n.to_vec();

        let mut below = n.clone();
        *below.last_mut().expect("non-empty order") -= 1;
        ecdh.set_private_key(&below)?;
        assert_eq!(ecdh.private_key()?.as_slice(), below.as_slice());

        let mut above = n.clone();
        *above.last_mut().expect("non-empty order") += 1;
        for bad in [n.clone(), above, vec![0]] {
            let err = ecdh.set_private_key(&bad).unwrap_err();
            assert!(matches!(err, Error::InvalidKeyType { .. }), "{}", name);
        }
        // failed updates leave the earlier key in place
        assert_eq!(ecdh.private_key()?.as_slice(), below.as_slice());
    }
    Ok(())
}

proptest! {
    #[test]
    fn private_key_range_matches_integer_order(order in 2u64.., scalar in any::<u64>()) {
        let expected = scalar >= 1 && scalar < order;
        prop_assert_eq!(
            is_private_key_valid(&order.to_be_bytes(), &scalar.to_be_bytes()),
            expected
        );
        // leading zeros on either side do not change the answer
        let mut padded = vec![0u8; 5];
        padded.extend_from_slice(&scalar.to_be_bytes());
        prop_assert_eq!(is_private_key_valid(&order.to_be_bytes(), &padded), expected);
    }
}
