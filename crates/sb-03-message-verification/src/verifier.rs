//! # Quorum Verifier
//!
//! Checks that a signed message carries a 2/3+1 quorum of valid guardian
//! signatures, in canonical order, each recovering to the guardian at
//! its claimed roster position.

use crate::domain::entities::{SignedMessage, VerifiedMessage};
use crate::domain::errors::VerificationError;
use crate::recovery::recover_guardian_id;
use sb_02_guardian_registry::{GuardianSet, GuardianSetRegistry};
use subtle::ConstantTimeEq;

/// Verify a message against one specific guardian set.
///
/// Fails with [`VerificationError::WrongGuardianSet`] unless the message
/// references exactly this set. Callers that accept a still-active prior
/// set resolve it through [`verify_against_registry`] instead.
pub fn verify_with_set(
    message: SignedMessage,
    guardian_set: &GuardianSet,
) -> Result<VerifiedMessage, VerificationError> {
    if message.guardian_set_index != guardian_set.index() {
        return Err(VerificationError::WrongGuardianSet {
            expected: guardian_set.index(),
            got: message.guardian_set_index,
        });
    }
    check_signatures(&message, guardian_set)?;

    Ok(VerifiedMessage {
        digest: message.digest,
        body: message.body,
    })
}

/// Verify a message against the registry set it references.
///
/// The referenced set must exist and still be active at `now`: the
/// current set always is; a superseded set only within its grace period.
pub fn verify_against_registry(
    message: SignedMessage,
    registry: &GuardianSetRegistry,
    now: u64,
) -> Result<VerifiedMessage, VerificationError> {
    let guardian_set = registry.get(message.guardian_set_index)?;
    if !guardian_set.is_active(now) {
        return Err(VerificationError::ExpiredGuardianSet(
            message.guardian_set_index,
        ));
    }
    check_signatures(&message, guardian_set)?;

    Ok(VerifiedMessage {
        digest: message.digest,
        body: message.body,
    })
}

/// The quorum check proper. Any single failing signature aborts the
/// whole verification.
fn check_signatures(
    message: &SignedMessage,
    guardian_set: &GuardianSet,
) -> Result<(), VerificationError> {
    let quorum = guardian_set.quorum();
    if message.signatures.len() < quorum {
        return Err(VerificationError::InsufficientSignatures {
            got: message.signatures.len(),
            quorum,
        });
    }

    let mut last_index: i32 = -1;
    for signature in &message.signatures {
        let index = i32::from(signature.guardian_index);
        // Strictly increasing indices enforce canonical order and rule
        // out duplicate signers in one comparison.
        if index <= last_index {
            return Err(VerificationError::SignaturesNotSorted);
        }
        last_index = index;

        let index = usize::from(signature.guardian_index);
        let expected = guardian_set.guardian(index).ok_or(
            VerificationError::GuardianIndexOutOfRange {
                index,
                roster: guardian_set.len(),
            },
        )?;

        let recovered = recover_guardian_id(&message.digest, signature)?;
        if !bool::from(recovered.as_slice().ct_eq(expected.as_slice())) {
            return Err(VerificationError::GuardianMismatch { index });
        }
    }

    Ok(())
}
