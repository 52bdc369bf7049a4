//! Key import and export across every format

use eckit_api::Result as ApiResult;
use eckit_algorithms::encoding::base64url;
use eckit_ecdh::{
    export_key, import_key, list_curves, Error, KeyData, KeyFormat, KeyMaterial, KeyType,
    ParamEncoding,
};
use eckit_ecdh::keygen::generate_with_rng;
use eckit_tests::{keypair, seeded_rng};
use serde_json::json;

fn jwk_value(key: &KeyMaterial) -> ApiResult<serde_json::Value> {
    let exported = export_key(key, KeyFormat::Jwk)?;
    exported.as_jwk().expect("JWK export").to_value()
}

#[test]
fn test_jwk_round_trip_reproduces_key() -> ApiResult<()> {
    for (i, name) in list_curves().into_iter().enumerate() {
        let key = keypair(name, 300 + i as u64);

        let private = jwk_value(&key)?;
        let imported = import_key(KeyFormat::Jwk, name, KeyData::Jwk(&private))?;
        assert_eq!(imported.key_type(), KeyType::Private);
        assert_eq!(imported.private_scalar(), key.private_scalar());
        assert_eq!(imported.public_point(), key.public_point());

        let public = jwk_value(&key.to_public()?)?;
        let imported = import_key(KeyFormat::Jwk, name, KeyData::Jwk(&public))?;
        assert_eq!(imported.key_type(), KeyType::Public);
        assert_eq!(imported.public_point(), key.public_point());
    }
    Ok(())
}

#[test]
fn test_jwk_survives_json_text() -> ApiResult<()> {
    let key = keypair("secp384r1", 5);
    let exported = export_key(&key, KeyFormat::Jwk)?;
    let text = exported.as_jwk().expect("JWK export").to_json()?;

    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(parsed["kty"], "EC");
    assert_eq!(parsed["crv"], "P-384");

    let imported = import_key(KeyFormat::Jwk, "P-384", KeyData::Jwk(&parsed))?;
    assert_eq!(imported, key);
    Ok(())
}

#[test]
fn test_jwk_point_not_on_curve() {
    let key = keypair("prime256v1", 6);
    let point = key.public_point().expect("public point");
    let mut x = point.x().to_vec();
    x[0] ^= 0x80;

    let value = json!({
        "kty": "EC",
        "crv": "P-256",
        "x": base64url::encode(&x),
        "y": base64url::encode(point.y()),
    });
    let err = import_key(KeyFormat::Jwk, "prime256v1", KeyData::Jwk(&value)).unwrap_err();
    assert!(matches!(err, Error::InvalidJwk { .. }));
    assert_eq!(err.code(), "ERR_CRYPTO_INVALID_JWK");
}

#[test]
fn test_jwk_inconsistent_private_key_rejected() -> ApiResult<()> {
    let a = keypair("secp256k1", 7);
    let b = keypair("secp256k1", 8);

    let mut value = jwk_value(&a)?;
    value["d"] = jwk_value(&b)?["d"].clone();
    let err = import_key(KeyFormat::Jwk, "secp256k1", KeyData::Jwk(&value)).unwrap_err();
    assert!(matches!(err, Error::InvalidJwk { .. }));
    Ok(())
}

#[test]
fn test_der_formats_chain() -> ApiResult<()> {
    for (i, name) in list_curves().into_iter().enumerate() {
        for encoding in [ParamEncoding::Named, ParamEncoding::Explicit] {
            let curve = eckit_ecdh::resolve(name)?;
            let key = generate_with_rng(curve, encoding, &mut seeded_rng(400 + i as u64))?;

            let pkcs8 = export_key(&key, KeyFormat::Pkcs8)?;
            let from_pkcs8 = import_key(
                KeyFormat::Pkcs8,
                name,
                KeyData::Bytes(pkcs8.as_bytes().expect("DER")),
            )?;
            assert_eq!(from_pkcs8, key);

            let spki = export_key(&from_pkcs8.to_public()?, KeyFormat::Spki)?;
            let from_spki =
                import_key(KeyFormat::Spki, name, KeyData::Bytes(spki.as_bytes().expect("DER")))?;

            let raw = export_key(&from_spki, KeyFormat::Raw)?;
            let from_raw =
                import_key(KeyFormat::Raw, name, KeyData::Bytes(raw.as_bytes().expect("bytes")))?;
            assert_eq!(from_raw.public_point(), key.public_point());
        }
    }
    Ok(())
}

#[test]
fn test_explicit_parameters_are_larger() -> ApiResult<()> {
    let curve = eckit_ecdh::resolve("P-256")?;
    let named = generate_with_rng(curve, ParamEncoding::Named, &mut seeded_rng(1))?;
    let explicit = generate_with_rng(curve, ParamEncoding::Explicit, &mut seeded_rng(1))?;
    assert_eq!(named.private_scalar(), explicit.private_scalar());

    let named_spki = export_key(&named.to_public()?, KeyFormat::Spki)?;
    let explicit_spki = export_key(&explicit.to_public()?, KeyFormat::Spki)?;
    assert!(
        explicit_spki.as_bytes().expect("DER").len() > named_spki.as_bytes().expect("DER").len()
    );
    Ok(())
}
