//! # Verification Errors
//!
//! Error types for message decoding and quorum verification. Every
//! variant is fatal to the operation that raised it; nothing here is
//! recoverable in place.

use sb_01_wire_codec::CodecError;
use sb_02_guardian_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while decoding or verifying a signed message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The message's version byte is not the supported protocol version.
    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    /// The message references a different guardian set than the caller
    /// supplied.
    #[error("Wrong guardian set: expected index {expected}, got {got}")]
    WrongGuardianSet {
        /// Index of the set the caller verified against
        expected: u32,
        /// Index the message references
        got: u32,
    },

    /// The referenced guardian set's grace period has elapsed.
    #[error("Expired guardian set: {0}")]
    ExpiredGuardianSet(u32),

    /// Fewer signatures than the guardian set's quorum threshold.
    #[error("Insufficient signatures: {got} of {quorum} required")]
    InsufficientSignatures {
        /// Signatures carried by the message
        got: usize,
        /// Threshold for the guardian set
        quorum: usize,
    },

    /// A signature names a guardian index outside the roster.
    #[error("Guardian index out of range: {index} (roster size {roster})")]
    GuardianIndexOutOfRange {
        /// Claimed guardian index
        index: usize,
        /// Guardian count in the set
        roster: usize,
    },

    /// The recovered signer is not the guardian at the claimed index.
    #[error("Guardian mismatch at index {index}")]
    GuardianMismatch {
        /// Claimed guardian index
        index: usize,
    },

    /// Signature guardian indices are not strictly increasing.
    #[error("Signatures not sorted by guardian index")]
    SignaturesNotSorted,

    /// The r‖s bytes do not form a valid secp256k1 signature.
    #[error("Invalid signature encoding")]
    InvalidSignature,

    /// Invalid recovery id (must be 0, 1, 27, or 28).
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for a structurally valid signature.
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The wire buffer was malformed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Guardian set lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
