//! Error type definitions for key management and agreement

use thiserror::Error as ThisError;

/// Primary error type for eckit operations
///
/// Every variant names the operation that failed in `context` so that a
/// host binding can surface a useful message without inspecting input
/// bytes. Messages never contain key material.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Unknown or unsupported curve name
    #[error("Invalid curve: {context}: {message}")]
    InvalidCurve { context: &'static str, message: String },

    /// Malformed or off-curve point bytes
    #[error("Invalid public key: {context}: {message}")]
    InvalidPoint { context: &'static str, message: String },

    /// Private scalar bytes that cannot be a key at all
    #[error("Invalid private key: {context}: {message}")]
    InvalidPrivateKey { context: &'static str, message: String },

    /// Key of the wrong type, or a scalar outside `[1, n-1]`
    #[error("Invalid key type: {context}: {message}")]
    InvalidKeyType { context: &'static str, message: String },

    /// Key pair failed the full validity check
    #[error("Invalid key pair: {context}: {message}")]
    InvalidKeyPair { context: &'static str, message: String },

    /// Missing or malformed JSON Web Key members
    #[error("Invalid JWK: {context}: {message}")]
    InvalidJwk { context: &'static str, message: String },

    /// Underlying primitive failed for an otherwise unclassified reason
    #[error("Operation failed: {context}: {message}")]
    OperationFailed { context: &'static str, message: String },

    /// Input exceeds a hard size limit, or a numeric code is out of range
    #[error("Out of range: {context}: {message}")]
    OutOfRange { context: &'static str, message: String },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed DER container
    #[error("Serialization error: {context}: {message}")]
    SerializationError { context: &'static str, message: String },
}

/// Result type for eckit operations
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! constructor {
    ($(#[$doc:meta])* $name:ident => $variant:ident) => {
        $(#[$doc])*
        pub fn $name(context: &'static str, message: impl Into<String>) -> Self {
            Self::$variant {
                context,
                message: message.into(),
            }
        }
    };
}

impl Error {
    constructor!(
        /// Shorthand for [`Error::InvalidCurve`]
        invalid_curve => InvalidCurve
    );
    constructor!(
        /// Shorthand for [`Error::InvalidPoint`]
        invalid_point => InvalidPoint
    );
    constructor!(
        /// Shorthand for [`Error::InvalidPrivateKey`]
        invalid_private_key => InvalidPrivateKey
    );
    constructor!(
        /// Shorthand for [`Error::InvalidKeyType`]
        invalid_key_type => InvalidKeyType
    );
    constructor!(
        /// Shorthand for [`Error::InvalidKeyPair`]
        invalid_key_pair => InvalidKeyPair
    );
    constructor!(
        /// Shorthand for [`Error::InvalidJwk`]
        invalid_jwk => InvalidJwk
    );
    constructor!(
        /// Shorthand for [`Error::OperationFailed`]
        operation_failed => OperationFailed
    );
    constructor!(
        /// Shorthand for [`Error::OutOfRange`]
        out_of_range => OutOfRange
    );
    constructor!(
        /// Shorthand for [`Error::SerializationError`]
        serialization => SerializationError
    );

    /// Stable error code, as surfaced by host bindings
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCurve { .. } => "ERR_CRYPTO_INVALID_CURVE",
            Self::InvalidPoint { .. } => "ERR_CRYPTO_ECDH_INVALID_PUBLIC_KEY",
            Self::InvalidPrivateKey { .. } => "ERR_CRYPTO_INVALID_PRIVATE_KEY",
            Self::InvalidKeyType { .. } => "ERR_CRYPTO_INVALID_KEYTYPE",
            Self::InvalidKeyPair { .. } => "ERR_CRYPTO_INVALID_KEYPAIR",
            Self::InvalidJwk { .. } => "ERR_CRYPTO_INVALID_JWK",
            Self::OperationFailed { .. } => "ERR_CRYPTO_OPERATION_FAILED",
            Self::OutOfRange { .. } => "ERR_OUT_OF_RANGE",
            Self::InvalidLength { .. } => "ERR_CRYPTO_INVALID_LENGTH",
            Self::SerializationError { .. } => "ERR_CRYPTO_INVALID_DER",
        }
    }

    /// Replace the context of an existing error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidCurve { message, .. } => Self::InvalidCurve { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::InvalidPrivateKey { message, .. } => Self::InvalidPrivateKey { context, message },
            Self::InvalidKeyType { message, .. } => Self::InvalidKeyType { context, message },
            Self::InvalidKeyPair { message, .. } => Self::InvalidKeyPair { context, message },
            Self::InvalidJwk { message, .. } => Self::InvalidJwk { context, message },
            Self::OperationFailed { message, .. } => Self::OperationFailed { context, message },
            Self::OutOfRange { message, .. } => Self::OutOfRange { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { message, .. } => Self::SerializationError { context, message },
        }
    }
}
