//! # Domain Entities
//!
//! Deployment configuration and the decoded governance message view.

use super::errors::GovernanceError;
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, Hash, UniversalAddress};

/// Module identifier for core-protocol governance: ASCII "Core",
/// right-aligned in 32 bytes.
pub const CORE_MODULE: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x43, 0x6f,
    0x72, 0x65,
];

/// The single (chain, address) pair allowed to emit governance messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceEmitter {
    /// Chain the governance contract lives on.
    pub chain: ChainId,
    /// Canonical address of the governance contract.
    pub address: UniversalAddress,
}

/// Deployment-time configuration of the verification core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// The governance emitter this deployment obeys.
    pub governance: GovernanceEmitter,
    /// This ledger's chain id.
    pub chain_id: ChainId,
    /// Seconds a superseded guardian set stays valid after rotation.
    pub grace_period_secs: u64,
    /// Configuration schema version, checked at sensitive entry points.
    pub schema_version: u32,
}

impl CoreConfig {
    /// Gate a sensitive entry point on the configuration schema version.
    pub fn require_schema(&self, expected: u32) -> Result<(), GovernanceError> {
        if self.schema_version != expected {
            return Err(GovernanceError::WrongSchemaVersion {
                expected,
                got: self.schema_version,
            });
        }
        Ok(())
    }
}

/// Which target-chain values an action admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetScope {
    /// Only target chain 0 (every ledger).
    GlobalOnly,
    /// Only this ledger's chain id.
    LocalOnly,
    /// Target chain 0 or this ledger's chain id.
    GlobalOrLocal,
}

/// A governance packet decoded from a verified message body.
///
/// Produced only by [`crate::gate::parse_and_verify`], after quorum,
/// emitter, and replay checks have all passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernanceMessage {
    /// Module the action belongs to.
    pub module: [u8; 32],
    /// Action code.
    pub action: u8,
    /// Chain the action targets; 0 means every ledger.
    pub target_chain: ChainId,
    /// Action-specific payload.
    pub payload: Vec<u8>,
    /// Digest of the carrying message, already consumed.
    pub digest: Hash,
}

impl GovernanceMessage {
    /// Require a specific module, action, and target applicability.
    pub fn expect(
        &self,
        module: &[u8; 32],
        action: u8,
        scope: TargetScope,
        chain_id: ChainId,
    ) -> Result<(), GovernanceError> {
        if &self.module != module {
            return Err(GovernanceError::WrongModule);
        }
        if self.action != action {
            return Err(GovernanceError::WrongAction {
                expected: action,
                got: self.action,
            });
        }
        let applicable = match scope {
            TargetScope::GlobalOnly => self.target_chain == 0,
            TargetScope::LocalOnly => self.target_chain == chain_id,
            TargetScope::GlobalOrLocal => {
                self.target_chain == 0 || self.target_chain == chain_id
            }
        };
        if !applicable {
            return Err(GovernanceError::TargetMismatch {
                target: self.target_chain,
                chain: chain_id,
            });
        }
        Ok(())
    }
}
