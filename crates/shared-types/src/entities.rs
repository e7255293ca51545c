//! # Core Domain Entities
//!
//! Primitive aliases used across the verification engine.

/// A 32-byte hash (Keccak-256 output).
pub type Hash = [u8; 32];

/// A 20-byte guardian identifier.
///
/// Derived from a guardian's secp256k1 public key: the last 20 bytes of
/// `keccak256(uncompressed_pubkey[1..])`, the same derivation Ethereum
/// uses for account addresses.
pub type GuardianId = [u8; 20];

/// A ledger (chain) identifier as carried on the wire.
///
/// Chain id `0` is reserved: in governance payloads it means "every
/// destination ledger" and it never identifies a real chain.
pub type ChainId = u16;
