//! Shared fixtures for the eckit integration tests
pub mod vectors;

use eckit_ecdh::keygen::generate_with_rng;
use eckit_ecdh::{resolve, KeyMaterial, ParamEncoding};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG so failures reproduce
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A named-curve key pair derived from `seed`
pub fn keypair(curve_name: &str, seed: u64) -> KeyMaterial {
    let curve = resolve(curve_name).expect("built-in curve");
    generate_with_rng(curve, ParamEncoding::Named, &mut seeded_rng(seed)).expect("key generation")
}
