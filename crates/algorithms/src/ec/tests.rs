use super::*;
use eckit_params::CURVES;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn one(size: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; size];
    bytes[size - 1] = 1;
    bytes
}

fn compress(point: &Point) -> Vec<u8> {
    let mut out = vec![if point.y_is_odd() { 0x03 } else { 0x02 }];
    out.extend_from_slice(point.x());
    out
}

/// RNG that always reports an entropy failure
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        let code = core::num::NonZeroU32::new(rand::Error::CUSTOM_START).unwrap();
        Err(rand::Error::from(code))
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn test_generator_matches_curve_table() {
    for info in CURVES.iter() {
        let g = group(info.id);
        let scalar = g.scalar_from_bytes(&one(info.order_size)).unwrap();
        let base = g.public_from_scalar(&scalar).unwrap();
        assert_eq!(base, g.generator().unwrap(), "{}", info.short_name);
        assert_eq!(base.x(), info.gx);
        assert_eq!(base.y(), info.gy);
    }
}

#[test]
fn test_decode_compressed_matches_uncompressed() {
    let mut rng = OsRng;
    for info in CURVES.iter() {
        let g = group(info.id);
        for _ in 0..4 {
            let scalar = g.random_scalar(&mut rng).unwrap();
            let point = g.public_from_scalar(&scalar).unwrap();
            let decoded = g.decode_point(&compress(&point)).unwrap();
            assert_eq!(decoded, point, "{}", info.short_name);
            assert_eq!(g.decode_point(point.as_uncompressed()).unwrap(), point);
        }
    }
}

#[test]
fn test_decode_rejects_malformed_points() {
    let g = group(CurveId::Prime256v1);
    let point = g.generator().unwrap();

    // Point at infinity, in both the one-byte and the zero-filled spelling
    assert!(matches!(g.decode_point(&[0x00]), Err(Error::InvalidPoint { .. })));
    assert!(matches!(g.decode_point(&[0u8; 65]), Err(Error::InvalidPoint { .. })));

    // Empty input
    assert!(matches!(g.decode_point(&[]), Err(Error::InvalidPoint { .. })));

    // Truncated
    let encoded = point.as_uncompressed();
    assert!(g.decode_point(&encoded[..64]).is_err());

    // Compact form is not a SEC1 encoding
    let mut compact = vec![0x05];
    compact.extend_from_slice(point.x());
    assert!(g.decode_point(&compact).is_err());

    // Off the curve
    let mut off_curve = encoded.to_vec();
    off_curve[64] ^= 0x01;
    assert!(matches!(g.decode_point(&off_curve), Err(Error::InvalidPoint { .. })));

    // A P-384 point is the wrong length for P-256
    let p384 = group(CurveId::Secp384r1).generator().unwrap();
    assert!(g.decode_point(p384.as_uncompressed()).is_err());
}

#[test]
fn test_scalar_range() {
    for info in CURVES.iter() {
        let g = group(info.id);
        let zero = vec![0u8; info.order_size];
        assert!(g.scalar_from_bytes(&zero).is_err());
        assert!(g.scalar_from_bytes(info.n).is_err());

        let mut n_minus_one = info.n.to_vec();
        *n_minus_one.last_mut().unwrap() -= 1;
        assert!(g.scalar_from_bytes(&n_minus_one).is_ok(), "{}", info.short_name);

        assert!(matches!(
            g.scalar_from_bytes(&one(info.order_size - 1)),
            Err(Error::InvalidLength { .. })
        ));
    }
}

#[test]
fn test_random_scalar_is_deterministic_for_seeded_rng() {
    let g = group(CurveId::Secp521r1);
    let a = g.random_scalar(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    let b = g.random_scalar(&mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(a.as_bytes()[0] <= 0x01);
}

#[test]
fn test_random_scalar_reports_rng_failure() {
    let g = group(CurveId::Secp256k1);
    let err = g.random_scalar(&mut FailingRng).unwrap_err();
    assert!(matches!(err, Error::OperationFailed { .. }));
}

#[test]
fn test_diffie_hellman_symmetry() {
    let mut rng = OsRng;
    for info in CURVES.iter() {
        let g = group(info.id);
        let a = g.random_scalar(&mut rng).unwrap();
        let b = g.random_scalar(&mut rng).unwrap();
        let pa = g.public_from_scalar(&a).unwrap();
        let pb = g.public_from_scalar(&b).unwrap();

        let z1 = g.diffie_hellman(&a, &pb).unwrap();
        let z2 = g.diffie_hellman(&b, &pa).unwrap();
        assert_eq!(*z1, *z2);
        assert_eq!(z1.len(), info.field_size);
    }
}

#[test]
fn test_values_from_another_curve_are_rejected() {
    let p256 = group(CurveId::Prime256v1);
    let k256 = group(CurveId::Secp256k1);
    let scalar = k256.random_scalar(&mut OsRng).unwrap();
    let point = p256.generator().unwrap();

    assert!(matches!(
        p256.public_from_scalar(&scalar),
        Err(Error::OperationFailed { .. })
    ));
    assert!(k256.diffie_hellman(&scalar, &point).is_err());
    assert!(!k256.is_valid_point(&point));
    assert!(p256.is_valid_point(&point));
}

mod test_vectors {
    use super::*;

    #[test]
    fn test_p256_shared_secret() {
        let g = group(CurveId::Prime256v1);
        let da = hex::decode("c88f01f510d9ac3f70a292daa2316de544e9aab8afe84049c62a9c57862d1433").unwrap();
        let db = hex::decode("c6ef9c5d78ae012a011164acb397ce2088685d8f06bf9be0b283ab46476bee53").unwrap();
        let bx = hex::decode("d12dfb5289c8d4f81208b70270398c342296970a0bccb74c736fc7554494bf63").unwrap();
        let by = hex::decode("56fbf3ca366cc23e8157854c13c58d6aac23f046ada30f8353e74f33039872ab").unwrap();
        let ax = hex::decode("dad0b65394221cf9b051e1feca5787d098dfe637fc90b9ef945d0c3772581180").unwrap();
        let z = hex::decode("d6840f6b42f6edafd13116e0e12565202fef8e9ece7dce03812464d04b9442de").unwrap();

        let a = g.scalar_from_bytes(&da).unwrap();
        let b = g.scalar_from_bytes(&db).unwrap();
        assert_eq!(g.public_from_scalar(&a).unwrap().x(), &ax[..]);

        let peer = g.point_from_coordinates(&bx, &by).unwrap();
        assert_eq!(g.public_from_scalar(&b).unwrap(), peer);
        assert_eq!(&g.diffie_hellman(&a, &peer).unwrap()[..], &z[..]);
    }
}
