//! # Replay Protection Store
//!
//! Append-only set of consumed message digests, scoped to the contract
//! deployment that owns it. A digest present once can never be consumed
//! again, giving every replay-sensitive flow at-most-once semantics.

use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::Hash;
use std::collections::HashSet;

/// Set of message digests already acted upon.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayStore {
    consumed: HashSet<Hash>,
}

impl ReplayStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a digest as consumed.
    ///
    /// Fails with [`RegistryError::AlreadyConsumed`] if the digest is
    /// already a member. Call at most once per externally observable
    /// verification; read-only inspection must use [`Self::contains`].
    pub fn consume(&mut self, digest: Hash) -> Result<(), RegistryError> {
        if !self.consumed.insert(digest) {
            return Err(RegistryError::AlreadyConsumed);
        }
        Ok(())
    }

    /// Whether a digest has been consumed.
    pub fn contains(&self, digest: &Hash) -> bool {
        self.consumed.contains(digest)
    }

    /// Number of consumed digests.
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    /// Whether nothing has been consumed yet.
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
