//! # Signer Recovery (secp256k1)
//!
//! Public key recovery from recoverable signatures and guardian id
//! derivation.
//!
//! ## Security Notes
//!
//! - Recovery runs over the message's cached double-Keccak digest, never
//!   over caller-supplied hashes.
//! - Guardian ids are the last 20 bytes of `keccak256(pubkey)` over the
//!   uncompressed point without its 0x04 prefix.
//! - Uses the `k256` crate for all curve operations.

use crate::domain::entities::RecoverableSignature;
use crate::domain::errors::VerificationError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use shared_types::{GuardianId, Hash};
use zeroize::Zeroize;

/// Keccak-256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// `keccak256(keccak256(data))`, the signing digest convention.
pub fn double_keccak256(data: &[u8]) -> Hash {
    keccak256(&keccak256(data))
}

/// Derive a guardian id from a public key.
///
/// Last 20 bytes of the Keccak-256 hash of the uncompressed point,
/// skipping the 0x04 prefix.
pub fn guardian_id_from_pubkey(public_key: &VerifyingKey) -> GuardianId {
    let point = public_key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    let mut id = [0u8; 20];
    id.copy_from_slice(&hash[12..]);
    id
}

/// Recover the guardian id that produced a signature over `digest`.
pub fn recover_guardian_id(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<GuardianId, VerificationError> {
    let recovery_id = parse_recovery_id(signature.recovery_id)?;

    // Note: sig_bytes is zeroized after parsing into the k256 type.
    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = match Signature::from_slice(&sig_bytes) {
        Ok(sig) => {
            sig_bytes.zeroize();
            sig
        }
        Err(_) => {
            sig_bytes.zeroize();
            return Err(VerificationError::InvalidSignature);
        }
    };

    let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| VerificationError::RecoveryFailed)?;

    Ok(guardian_id_from_pubkey(&recovered))
}

/// Parse a recovery id byte.
///
/// Valid values: 0, 1, 27, 28 (the latter two are the Ethereum-legacy
/// offset form).
fn parse_recovery_id(v: u8) -> Result<RecoveryId, VerificationError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(VerificationError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| VerificationError::InvalidRecoveryId(v))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
