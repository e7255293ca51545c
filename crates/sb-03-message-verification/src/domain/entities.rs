//! # Domain Entities
//!
//! Data structures for guardian-signed messages.

use crate::recovery::double_keccak256;
use sb_01_wire_codec::ByteWriter;
use serde::{Deserialize, Serialize};
use shared_types::{ChainId, Hash, UniversalAddress};

/// Wire length of one recoverable signature entry.
pub const SIGNATURE_LEN: usize = 66;

/// A guardian's recoverable secp256k1 signature over the message digest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// Position of the signing guardian in the guardian set.
    pub guardian_index: u8,
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes).
    pub s: [u8; 32],
    /// Recovery id (0, 1, 27, or 28).
    pub recovery_id: u8,
}

impl RecoverableSignature {
    /// Append the 66-byte wire form.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.push_u8(self.guardian_index);
        writer.push_bytes(&self.r);
        writer.push_bytes(&self.s);
        writer.push_u8(self.recovery_id);
    }
}

/// The observed-event record guardians sign over.
///
/// Immutable once parsed; its canonical byte encoding is the signing
/// preimage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Unix timestamp of the observed event.
    pub timestamp: u32,
    /// Emitter-chosen nonce.
    pub nonce: u32,
    /// Chain the event was observed on.
    pub emitter_chain: ChainId,
    /// Canonical address of the emitting contract.
    pub emitter_address: UniversalAddress,
    /// Emitter's sequence number for this message.
    pub sequence: u64,
    /// Finality the emitter chain reached before attestation.
    pub consistency_level: u8,
    /// Application payload; opaque to the verification core.
    pub payload: Vec<u8>,
}

impl MessageBody {
    /// Append the canonical big-endian encoding.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.push_u32(self.timestamp);
        writer.push_u32(self.nonce);
        writer.push_u16(self.emitter_chain);
        writer.push_bytes(self.emitter_address.as_bytes());
        writer.push_u64(self.sequence);
        writer.push_u8(self.consistency_level);
        writer.push_bytes(&self.payload);
    }

    /// The canonical byte encoding guardians sign over.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(51 + self.payload.len());
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// The signing digest: `keccak256(keccak256(body))`.
    pub fn digest(&self) -> Hash {
        double_keccak256(&self.to_bytes())
    }
}

/// A decoded guardian-signed message.
///
/// Produced only by [`crate::parser`]; the digest is computed once at
/// parse time and reused for signature recovery and replay tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Wire protocol version.
    pub version: u8,
    /// Guardian set the signatures refer to.
    pub guardian_set_index: u32,
    /// Signatures, required strictly ascending by guardian index.
    pub signatures: Vec<RecoverableSignature>,
    /// The signed body.
    pub body: MessageBody,
    /// Cached double-Keccak digest of the body encoding.
    pub digest: Hash,
}

impl SignedMessage {
    /// Re-encode to the wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer =
            ByteWriter::with_capacity(6 + self.signatures.len() * SIGNATURE_LEN + 51);
        writer.push_u8(self.version);
        writer.push_u32(self.guardian_set_index);
        writer.push_u8(self.signatures.len() as u8);
        for signature in &self.signatures {
            signature.write_to(&mut writer);
        }
        self.body.write_to(&mut writer);
        writer.into_bytes()
    }
}

/// A message whose signatures met quorum.
///
/// The body is moved out of the [`SignedMessage`]; the verification core
/// retains nothing once this is handed to the consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedMessage {
    /// The verified body.
    pub body: MessageBody,
    /// Digest identifying the message for replay tracking.
    pub digest: Hash,
}
