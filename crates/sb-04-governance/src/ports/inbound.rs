//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the verification core, as seen by the host
//! ledger's transaction handlers.

use crate::domain::errors::GovernanceError;
use crate::service::{CoreService, Directive, PostedMessage};
use sb_03_message_verification::{VerificationError, VerifiedMessage};
use shared_types::UniversalAddress;

/// Primary verification-core API.
///
/// Each method is one atomic transition; on any error the caller must
/// discard its enclosing transaction wholesale. `now` is the host
/// ledger's current unix time in seconds.
pub trait CoreBridgeApi {
    /// Verify a raw signed message without consuming it.
    fn verify_message(&self, data: &[u8], now: u64)
        -> Result<VerifiedMessage, VerificationError>;

    /// Verify a raw signed message and consume its digest (at-most-once).
    fn consume_message(
        &mut self,
        data: &[u8],
        now: u64,
    ) -> Result<VerifiedMessage, GovernanceError>;

    /// Submit a governance message; applies or surfaces its action.
    fn submit_governance(&mut self, data: &[u8], now: u64) -> Result<Directive, GovernanceError>;

    /// Allocate an outbound sequence and return the message to publish.
    fn post_message(
        &mut self,
        emitter_address: UniversalAddress,
        timestamp: u32,
        nonce: u32,
        consistency_level: u8,
        payload: Vec<u8>,
    ) -> Result<PostedMessage, GovernanceError>;
}

impl CoreBridgeApi for CoreService {
    fn verify_message(
        &self,
        data: &[u8],
        now: u64,
    ) -> Result<VerifiedMessage, VerificationError> {
        CoreService::verify_message(self, data, now)
    }

    fn consume_message(
        &mut self,
        data: &[u8],
        now: u64,
    ) -> Result<VerifiedMessage, GovernanceError> {
        CoreService::consume_message(self, data, now)
    }

    fn submit_governance(&mut self, data: &[u8], now: u64) -> Result<Directive, GovernanceError> {
        CoreService::submit_governance(self, data, now)
    }

    fn post_message(
        &mut self,
        emitter_address: UniversalAddress,
        timestamp: u32,
        nonce: u32,
        consistency_level: u8,
        payload: Vec<u8>,
    ) -> Result<PostedMessage, GovernanceError> {
        CoreService::post_message(
            self,
            emitter_address,
            timestamp,
            nonce,
            consistency_level,
            payload,
        )
    }
}
