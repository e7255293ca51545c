//! # Governance Actions
//!
//! Decoders for the action-specific payloads that follow the governance
//! packet prefix. Each decoder consumes its payload exactly; trailing
//! bytes are rejected.

use crate::domain::errors::GovernanceError;
use sb_01_wire_codec::ByteCursor;
use shared_types::{GuardianId, Hash};

/// Action code: upgrade the core contract deployment.
pub const ACTION_CONTRACT_UPGRADE: u8 = 1;

/// Action code: rotate to a new guardian set.
pub const ACTION_GUARDIAN_SET_ROTATION: u8 = 2;

/// Guardian-set rotation instruction.
///
/// Wire form: `new_index (4) | guardian_count (1) | guardian_id (20) * count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardianSetRotation {
    /// Index of the new set; must be the current index plus one.
    pub new_index: u32,
    /// The new guardian roster, in signing order.
    pub guardians: Vec<GuardianId>,
}

impl GuardianSetRotation {
    /// Decode a rotation payload.
    pub fn decode(payload: &[u8]) -> Result<Self, GovernanceError> {
        let mut cursor = ByteCursor::new(payload);
        let new_index = cursor.take_u32()?;
        let count = cursor.take_u8()?;
        let mut guardians = Vec::with_capacity(count as usize);
        for _ in 0..count {
            guardians.push(cursor.take_array::<20>()?);
        }
        cursor.finish()?;
        Ok(Self {
            new_index,
            guardians,
        })
    }
}

/// Contract-upgrade directive.
///
/// Wire form: a 32-byte right-aligned code identifier. The core only
/// surfaces it; executing the upgrade is the host ledger's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractUpgrade {
    /// Identifier of the code object to migrate to.
    pub new_contract: Hash,
}

impl ContractUpgrade {
    /// Decode an upgrade payload.
    pub fn decode(payload: &[u8]) -> Result<Self, GovernanceError> {
        let mut cursor = ByteCursor::new(payload);
        let new_contract = cursor.take_array::<32>()?;
        cursor.finish()?;
        Ok(Self { new_contract })
    }
}
