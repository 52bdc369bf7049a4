//! Wire codes and limits for ECDH and EC key handling

/// SEC1 point conversion form: `0x02 | 0x03 || X`
pub const POINT_CONVERSION_COMPRESSED: u32 = 2;

/// SEC1 point conversion form: `0x04 || X || Y`
pub const POINT_CONVERSION_UNCOMPRESSED: u32 = 4;

/// SEC1 point conversion form: `0x06 | 0x07 || X || Y`
pub const POINT_CONVERSION_HYBRID: u32 = 6;

/// Curve parameters are written as a named-curve OID
pub const EC_NAMED_CURVE: i32 = 1;

/// Curve parameters are written as explicit `ECParameters`
pub const EC_EXPLICIT_CURVE: i32 = 0;

/// Largest externally supplied buffer accepted by any operation
pub const MAX_INPUT_LEN: usize = i32::MAX as usize;

/// Upper bound on rejection-sampling rounds during key generation
pub const KEYGEN_MAX_ATTEMPTS: usize = 128;

/// Size of the shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of the shared secret for ECDH using P-384 in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = 48;

/// Size of the shared secret for ECDH using P-521 in bytes
pub const ECDH_P521_SHARED_SECRET_SIZE: usize = 66;

/// Size of the shared secret for ECDH using secp256k1 in bytes
pub const ECDH_K256_SHARED_SECRET_SIZE: usize = 32;

/// Size of an uncompressed P-256 public key in bytes
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Content octets of `id-ecPublicKey` (1.2.840.10045.2.1)
pub const ID_EC_PUBLIC_KEY: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];

/// Content octets of `prime-field` (1.2.840.10045.1.1)
pub const ID_PRIME_FIELD: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x01, 0x01];

/// `ECParameters` version written for explicit curves
pub const EC_PARAMETERS_VERSION: u64 = 1;

/// `ECPrivateKey` version (RFC 5915)
pub const EC_PRIVATE_KEY_VERSION: u64 = 1;
