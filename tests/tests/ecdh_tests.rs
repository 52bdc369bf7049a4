//! Key agreement and point encoding across crates

use eckit_api::Result as ApiResult;
use eckit_ecdh::{
    compute_secret, decode_point, derive_bits, encode_point, export_key, import_key,
    is_key_pair_valid, list_curves, resolve, Ecdh, Error, KeyData, KeyFormat, PointForm,
};
use eckit_tests::vectors::{p256, uncompressed};
use eckit_tests::{keypair, seeded_rng};
use std::collections::HashSet;

#[test]
fn test_builtin_curve_set() {
    let listed: HashSet<&str> = list_curves().into_iter().collect();
    let expected: HashSet<&str> = ["secp256k1", "secp384r1", "secp521r1", "prime256v1"]
        .into_iter()
        .collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_point_round_trip_every_curve_and_form() -> ApiResult<()> {
    for (i, name) in list_curves().into_iter().enumerate() {
        let curve = resolve(name)?;
        let key = keypair(name, 100 + i as u64);
        let point = key.public_point().expect("generated keys have a public point");

        for form in [PointForm::Compressed, PointForm::Uncompressed, PointForm::Hybrid] {
            let encoded = encode_point(point, form);
            assert_eq!(&decode_point(&curve, &encoded)?, point, "{} {:?}", name, form);
        }
    }
    Ok(())
}

#[test]
fn test_agreement_is_symmetric() -> ApiResult<()> {
    for name in list_curves() {
        for round in 0..5u64 {
            let a = keypair(name, 2 * round);
            let b = keypair(name, 2 * round + 1);

            let ab = compute_secret(&a, b.public_point().expect("public point"))?;
            let ba = compute_secret(&b, a.public_point().expect("public point"))?;
            assert_eq!(ab, ba, "{}", name);
            assert_eq!(ab.len(), resolve(name)?.field_size());
        }
    }
    Ok(())
}

#[test]
fn test_secret_width_is_fixed() -> ApiResult<()> {
    // Over many pairs some secrets start with a zero byte; none may be shortened.
    let name = "prime256v1";
    let a = keypair(name, 7);
    for seed in 1000..1300u64 {
        let b = keypair(name, seed);
        let secret = compute_secret(&a, b.public_point().expect("public point"))?;
        assert_eq!(secret.len(), 32);
    }
    Ok(())
}

#[test]
fn test_p256_known_answer() -> ApiResult<()> {
    let mut alice = Ecdh::new("prime256v1")?;
    alice.set_private_key(&hex::decode(p256::ALICE_PRIVATE).expect("hex"))?;
    assert_eq!(
        alice.public_key(PointForm::Uncompressed)?,
        uncompressed(p256::ALICE_PUBLIC_X, p256::ALICE_PUBLIC_Y)
    );

    let bob_public = uncompressed(p256::BOB_PUBLIC_X, p256::BOB_PUBLIC_Y);
    let secret = alice.compute_secret(&bob_public)?;
    assert_eq!(hex::encode(&*secret), p256::SHARED_SECRET);

    // Same result through the key-object path
    let mut bob = Ecdh::new("prime256v1")?;
    bob.set_private_key(&hex::decode(p256::BOB_PRIVATE).expect("hex"))?;
    let bob_public_key = bob.key().to_public()?;
    assert_eq!(derive_bits(alice.key(), &bob_public_key)?, secret);
    Ok(())
}

#[test]
fn test_raw_export_import_scenario() -> ApiResult<()> {
    let a = keypair("prime256v1", 42);
    let public = a.to_public()?;

    let raw = export_key(&public, KeyFormat::Raw)?;
    let raw = raw.as_bytes().expect("raw export is bytes");
    assert_eq!(raw.len(), 65);
    assert_eq!(raw[0], 0x04);

    let curve = resolve("prime256v1")?;
    assert_eq!(Some(&decode_point(&curve, raw)?), a.public_point());

    let imported = import_key(KeyFormat::Raw, "prime256v1", KeyData::Bytes(raw))?;
    assert_eq!(imported.public_point(), a.public_point());
    Ok(())
}

#[test]
fn test_invalid_key_pair_blocks_agreement() -> ApiResult<()> {
    let mut ecdh = Ecdh::new("secp521r1")?;
    ecdh.generate_keys_with_rng(&mut seeded_rng(9))?;

    // A bad encoding is refused outright and leaves the pair intact.
    assert!(matches!(
        ecdh.set_public_key(&[0x04, 0xde, 0xad]),
        Err(Error::OperationFailed { .. })
    ));
    assert!(is_key_pair_valid(ecdh.key()));

    // A well-formed but unrelated point breaks the pair.
    let stranger = keypair("secp521r1", 10);
    let stranger_public = encode_point(stranger.public_point().expect("public point"), PointForm::Compressed);
    ecdh.set_public_key(&stranger_public)?;
    assert!(!is_key_pair_valid(ecdh.key()));

    let err = ecdh.compute_secret(&stranger_public).unwrap_err();
    assert!(matches!(err, Error::InvalidKeyPair { .. }));
    let err = compute_secret(ecdh.key(), stranger.public_point().expect("public point")).unwrap_err();
    assert!(matches!(err, Error::InvalidKeyPair { .. }));
    Ok(())
}

#[test]
fn test_cross_curve_agreement_rejected() -> ApiResult<()> {
    let p384 = keypair("secp384r1", 1);
    let mut ecdh = Ecdh::new("prime256v1")?;
    ecdh.generate_keys_with_rng(&mut seeded_rng(2))?;

    let foreign = encode_point(p384.public_point().expect("public point"), PointForm::Uncompressed);
    let err = ecdh.compute_secret(&foreign).unwrap_err();
    assert_eq!(err.code(), "ERR_CRYPTO_ECDH_INVALID_PUBLIC_KEY");
    Ok(())
}
