//! # Registry Errors
//!
//! Error types for guardian set lifecycle and replay protection.

use thiserror::Error;

/// Errors protecting the registry's state invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A guardian set must contain at least one guardian.
    #[error("Empty guardian set")]
    EmptyGuardianSet,

    /// Rotation must advance the set index by exactly one.
    #[error("Non-incremental guardian set: expected index {expected}, got {got}")]
    NonIncrementalGuardianSet {
        /// The only admissible successor index
        expected: u32,
        /// Index carried by the rotation payload
        got: u32,
    },

    /// No guardian set is stored under the requested index.
    #[error("Unknown guardian set: {0}")]
    UnknownGuardianSet(u32),

    /// The message digest was already consumed.
    #[error("Message already consumed")]
    AlreadyConsumed,
}
