//! # Governance Gate
//!
//! The single path from raw bytes to a decoded governance message. The
//! gate is deliberately stricter than generic verification: only the
//! registry's *current* guardian set may authorize governance, the
//! emitter must match the deployment's configured governance contract,
//! and the message digest is consumed before the action payload is
//! interpreted.

use crate::domain::entities::{CoreConfig, GovernanceMessage};
use crate::domain::errors::GovernanceError;
use sb_01_wire_codec::ByteCursor;
use sb_02_guardian_registry::{GuardianSetRegistry, ReplayStore};
use sb_03_message_verification::{parser, verifier};

/// Parse, verify, consume, and unwrap a governance message.
///
/// Steps, in order:
/// 1. decode the wire frame;
/// 2. require the current guardian set (no grace-period leeway) and a
///    signature quorum;
/// 3. require the configured governance emitter;
/// 4. consume the digest (governance is one-shot);
/// 5. decode the `module | action | target_chain` packet prefix.
///
/// Module/action/target expectations are the caller's to assert via
/// [`GovernanceMessage::expect`].
pub fn parse_and_verify(
    registry: &GuardianSetRegistry,
    replay: &mut ReplayStore,
    config: &CoreConfig,
    data: &[u8],
) -> Result<GovernanceMessage, GovernanceError> {
    let message = parser::parse(data)?;

    if message.guardian_set_index != registry.current_index() {
        return Err(GovernanceError::StaleGuardianSet {
            current: registry.current_index(),
            got: message.guardian_set_index,
        });
    }
    let verified = verifier::verify_with_set(message, registry.current())?;

    let emitter = &config.governance;
    if verified.body.emitter_chain != emitter.chain
        || verified.body.emitter_address != emitter.address
    {
        return Err(GovernanceError::NotGovernanceEmitter);
    }

    replay.consume(verified.digest)?;

    let mut cursor = ByteCursor::new(&verified.body.payload);
    let module = cursor.take_array::<32>()?;
    let action = cursor.take_u8()?;
    let target_chain = cursor.take_u16()?;
    let payload = cursor.rest().to_vec();

    Ok(GovernanceMessage {
        module,
        action,
        target_chain,
        payload,
        digest: verified.digest,
    })
}
