//! Property-based tests for ECDSA signature format conversion

use eckit_params::CURVES;
use eckit_sign::{to_der, to_fixed_width};
use proptest::prelude::*;

/// A component `0 < v < n`, big-endian and `order_size` bytes wide
fn component(n: &'static [u8]) -> impl Strategy<Value = Vec<u8>> {
    let top = n[0];
    (0..top, prop::collection::vec(any::<u8>(), n.len() - 1))
        .prop_map(|(first, rest)| {
            let mut v = Vec::with_capacity(rest.len() + 1);
            v.push(first);
            v.extend(rest);
            v
        })
        .prop_filter("component must be non-zero", |v| v.iter().any(|&b| b != 0))
}

fn fixed_signature(curve: usize) -> impl Strategy<Value = (usize, Vec<u8>)> {
    let info = &CURVES[curve];
    (component(info.n), component(info.n)).prop_map(move |(r, s)| {
        let mut fixed = r;
        fixed.extend(s);
        (info.order_size, fixed)
    })
}

fn any_curve_signature() -> impl Strategy<Value = (usize, Vec<u8>)> {
    prop_oneof![
        fixed_signature(0),
        fixed_signature(1),
        fixed_signature(2),
        fixed_signature(3),
    ]
}

proptest! {
    #[test]
    fn fixed_der_fixed_round_trip((order_size, fixed) in any_curve_signature()) {
        let der = to_der(order_size, &fixed).unwrap();
        prop_assert_eq!(der[0], 0x30);

        let back = to_fixed_width(order_size, &der).unwrap();
        prop_assert_eq!(&back, &fixed);

        // and DER survives the trip through the fixed form byte for byte
        let again = to_der(order_size, &back).unwrap();
        prop_assert_eq!(again, der);
    }

    #[test]
    fn wrong_fixed_length_is_rejected((order_size, fixed) in any_curve_signature()) {
        prop_assert!(to_der(order_size, &fixed[1..]).is_none());

        let mut longer = fixed.clone();
        longer.push(0);
        prop_assert!(to_der(order_size, &longer).is_none());
    }

    #[test]
    fn garbage_der_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        for info in CURVES.iter() {
            if let Some(fixed) = to_fixed_width(info.order_size, &bytes) {
                prop_assert_eq!(fixed.len(), 2 * info.order_size);
            }
        }
    }
}

#[test]
fn test_fixed_width_input_is_not_der() {
    // A raw r || s buffer one byte short must not be accepted as DER either.
    for info in CURVES.iter() {
        let fixed = vec![0x11u8; 2 * info.order_size - 1];
        assert!(to_fixed_width(info.order_size, &fixed).is_none());
        assert!(to_der(info.order_size, &fixed).is_none());
    }
}
