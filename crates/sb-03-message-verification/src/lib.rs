//! # Message Verification Subsystem (SB-03)
//!
//! Decodes guardian-signed wire messages and verifies them against a
//! guardian set: quorum threshold, per-signature public key recovery,
//! and canonical signature ordering. This is the security boundary of
//! the bridge; everything downstream trusts its output.
//!
//! ## Module Structure
//!
//! ```text
//! sb-03-message-verification/
//! ├── domain/          # SignedMessage, MessageBody, errors
//! ├── parser.rs        # Wire-format decoding
//! ├── recovery.rs      # secp256k1 recovery, guardian id derivation
//! └── verifier.rs      # Quorum verification
//! ```
//!
//! ## Security Notes
//!
//! - The signed digest is `keccak256(keccak256(body))`; double hashing
//!   matches the guardians' off-chain signing convention and blocks
//!   length-extension tricks on the inner hash.
//! - Signature indices must be strictly increasing: one check enforces
//!   both canonical ordering and absence of duplicates.
//! - Any single failing signature aborts the whole verification; there
//!   is no partial acceptance.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod parser;
pub mod recovery;
pub mod verifier;

// Re-export public API
pub use domain::entities::{MessageBody, RecoverableSignature, SignedMessage, VerifiedMessage};
pub use domain::errors::VerificationError;
pub use recovery::{guardian_id_from_pubkey, keccak256, recover_guardian_id};
pub use verifier::{verify_against_registry, verify_with_set};

/// The wire protocol version this engine accepts.
pub const PROTOCOL_VERSION: u8 = 1;
