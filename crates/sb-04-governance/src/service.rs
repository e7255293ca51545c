//! # Core Service
//!
//! The contract-deployment view of the verification core. Owns the
//! guardian set registry, the replay store, and the outbound sequence
//! tracker; every mutation of that state goes through one of the entry
//! points here, each of which is a single atomic transition.

use crate::actions::{
    ContractUpgrade, GuardianSetRotation, ACTION_CONTRACT_UPGRADE, ACTION_GUARDIAN_SET_ROTATION,
};
use crate::domain::entities::{CoreConfig, GovernanceMessage, TargetScope, CORE_MODULE};
use crate::domain::errors::GovernanceError;
use crate::gate;
use crate::CORE_SCHEMA_VERSION;
use sb_02_guardian_registry::{
    GuardianSet, GuardianSetRegistry, ReplayStore, SequenceTracker,
};
use sb_03_message_verification::{parser, verifier, VerificationError, VerifiedMessage};
use shared_types::{ChainId, Hash, UniversalAddress};

/// Instruction produced by an accepted governance message.
///
/// Rotation is applied internally; everything else is surfaced for the
/// host ledger to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// The registry advanced to a new guardian set.
    GuardianSetRotated {
        /// Index of the now-current set.
        new_index: u32,
    },
    /// The host should migrate this deployment to new code.
    ContractUpgrade {
        /// Identifier of the code object to migrate to.
        new_contract: Hash,
    },
}

/// An outbound message with its allocated sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedMessage {
    /// This deployment's chain id.
    pub emitter_chain: ChainId,
    /// Canonical address of the emitter.
    pub emitter_address: UniversalAddress,
    /// Sequence allocated to this message.
    pub sequence: u64,
    /// Emitter-chosen nonce.
    pub nonce: u32,
    /// Finality level requested by the emitter.
    pub consistency_level: u8,
    /// Application payload for the guardians to attest.
    pub payload: Vec<u8>,
    /// Host-ledger timestamp of the post.
    pub timestamp: u32,
}

/// The verification core as embedded in one contract deployment.
#[derive(Clone, Debug)]
pub struct CoreService {
    config: CoreConfig,
    registry: GuardianSetRegistry,
    replay: ReplayStore,
    sequences: SequenceTracker,
}

impl CoreService {
    /// Deploy the core with its configuration and genesis guardian set.
    pub fn new(config: CoreConfig, genesis: GuardianSet) -> Self {
        let registry = GuardianSetRegistry::genesis(genesis, config.grace_period_secs);
        tracing::info!(
            "[sb-04] core deployed: chain {}, guardian set {}",
            config.chain_id,
            registry.current_index()
        );
        Self {
            config,
            registry,
            replay: ReplayStore::new(),
            sequences: SequenceTracker::new(),
        }
    }

    /// The deployment configuration.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Read-only view of the guardian set registry.
    pub fn registry(&self) -> &GuardianSetRegistry {
        &self.registry
    }

    /// Whether a message digest has already been consumed.
    pub fn is_consumed(&self, digest: &Hash) -> bool {
        self.replay.contains(digest)
    }

    /// Verify a raw message without consuming it.
    ///
    /// Accepts the guardian set the message references, current or
    /// still-active prior. Read-only: safe for queries and inspection.
    pub fn verify_message(
        &self,
        data: &[u8],
        now: u64,
    ) -> Result<VerifiedMessage, VerificationError> {
        let message = parser::parse(data)?;
        verifier::verify_against_registry(message, &self.registry, now)
    }

    /// Verify a raw message and consume its digest.
    ///
    /// For replay-sensitive business flows that must observe a message
    /// at most once.
    pub fn consume_message(
        &mut self,
        data: &[u8],
        now: u64,
    ) -> Result<VerifiedMessage, GovernanceError> {
        self.config.require_schema(CORE_SCHEMA_VERSION)?;
        let message = parser::parse(data)?;
        let verified = verifier::verify_against_registry(message, &self.registry, now)?;
        self.replay.consume(verified.digest)?;
        Ok(verified)
    }

    /// Submit a governance message and apply or surface its action.
    pub fn submit_governance(
        &mut self,
        data: &[u8],
        now: u64,
    ) -> Result<Directive, GovernanceError> {
        self.config.require_schema(CORE_SCHEMA_VERSION)?;
        let message = gate::parse_and_verify(&self.registry, &mut self.replay, &self.config, data)?;

        match message.action {
            ACTION_GUARDIAN_SET_ROTATION => self.apply_rotation(&message, now),
            ACTION_CONTRACT_UPGRADE => self.apply_upgrade(&message),
            other => Err(GovernanceError::UnknownAction(other)),
        }
    }

    /// Allocate a sequence and hand the message to the host for
    /// publication. Guardians observe the host's event, not this value.
    pub fn post_message(
        &mut self,
        emitter_address: UniversalAddress,
        timestamp: u32,
        nonce: u32,
        consistency_level: u8,
        payload: Vec<u8>,
    ) -> Result<PostedMessage, GovernanceError> {
        self.config.require_schema(CORE_SCHEMA_VERSION)?;
        let sequence = self.sequences.next(emitter_address);
        tracing::debug!(
            "[sb-04] message posted: emitter {:?}, sequence {}",
            emitter_address,
            sequence
        );
        Ok(PostedMessage {
            emitter_chain: self.config.chain_id,
            emitter_address,
            sequence,
            nonce,
            consistency_level,
            payload,
            timestamp,
        })
    }

    fn apply_rotation(
        &mut self,
        message: &GovernanceMessage,
        now: u64,
    ) -> Result<Directive, GovernanceError> {
        message.expect(
            &CORE_MODULE,
            ACTION_GUARDIAN_SET_ROTATION,
            TargetScope::GlobalOrLocal,
            self.config.chain_id,
        )?;
        let rotation = GuardianSetRotation::decode(&message.payload)?;
        self.registry
            .rotate(rotation.new_index, rotation.guardians, now)?;
        Ok(Directive::GuardianSetRotated {
            new_index: rotation.new_index,
        })
    }

    fn apply_upgrade(&self, message: &GovernanceMessage) -> Result<Directive, GovernanceError> {
        message.expect(
            &CORE_MODULE,
            ACTION_CONTRACT_UPGRADE,
            TargetScope::LocalOnly,
            self.config.chain_id,
        )?;
        let upgrade = ContractUpgrade::decode(&message.payload)?;
        tracing::info!("[sb-04] contract upgrade authorized");
        Ok(Directive::ContractUpgrade {
            new_contract: upgrade.new_contract,
        })
    }
}
