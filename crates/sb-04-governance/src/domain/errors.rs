//! # Governance Errors
//!
//! Error types for governance gating. All authorization failures here
//! are fatal; the caller's enclosing transaction must be rejected
//! entirely.

use sb_01_wire_codec::CodecError;
use sb_02_guardian_registry::RegistryError;
use sb_03_message_verification::VerificationError;
use thiserror::Error;

/// Errors from the governance gate and core service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GovernanceError {
    /// The message references a guardian set other than the current one.
    ///
    /// Governance deliberately ignores the grace period: a superseded
    /// set must not authorize further governance actions.
    #[error("Stale guardian set for governance: current {current}, got {got}")]
    StaleGuardianSet {
        /// The registry's current index
        current: u32,
        /// Index the message references
        got: u32,
    },

    /// The message does not originate from the governance emitter.
    #[error("Not the governance emitter")]
    NotGovernanceEmitter,

    /// The packet names a module this gate does not serve.
    #[error("Wrong governance module")]
    WrongModule,

    /// The packet carries a different action than the caller expected.
    #[error("Wrong governance action: expected {expected}, got {got}")]
    WrongAction {
        /// Action code the caller required
        expected: u8,
        /// Action code in the packet
        got: u8,
    },

    /// The packet's target chain does not apply to this ledger.
    #[error("Governance target mismatch: target chain {target}, this chain {chain}")]
    TargetMismatch {
        /// Target chain in the packet
        target: u16,
        /// This deployment's chain id
        chain: u16,
    },

    /// The packet carries an action code this build does not implement.
    #[error("Unknown governance action: {0}")]
    UnknownAction(u8),

    /// The deployment configuration is from a different schema version.
    #[error("Wrong schema version: expected {expected}, got {got}")]
    WrongSchemaVersion {
        /// Version this build expects
        expected: u32,
        /// Version in the configuration
        got: u32,
    },

    /// Message decoding or quorum verification failed.
    #[error(transparent)]
    Verification(#[from] VerificationError),

    /// Registry or replay state rejected the transition.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An action payload was malformed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
