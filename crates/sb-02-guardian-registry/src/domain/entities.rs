//! # Domain Entities
//!
//! The guardian set: an ordered roster of guardian identifiers tagged
//! with a monotonic index and an expiry condition.

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::GuardianId;

/// A versioned roster of guardian keys.
///
/// Created by governance rotation or initial deployment and immutable
/// afterwards, except for the expiration stamp the registry applies when
/// the set is superseded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianSet {
    index: u32,
    guardians: Vec<GuardianId>,
    expiration_time: Option<u64>,
}

impl GuardianSet {
    /// Create a guardian set with no expiry.
    ///
    /// Fails with [`RegistryError::EmptyGuardianSet`] if the roster is
    /// empty: an empty set would make every quorum threshold trivially
    /// satisfiable.
    pub fn new(index: u32, guardians: Vec<GuardianId>) -> Result<Self, RegistryError> {
        if guardians.is_empty() {
            return Err(RegistryError::EmptyGuardianSet);
        }
        Ok(Self {
            index,
            guardians,
            expiration_time: None,
        })
    }

    /// The set's monotonic index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The ordered guardian roster.
    pub fn guardians(&self) -> &[GuardianId] {
        &self.guardians
    }

    /// Number of guardians in the roster.
    pub fn len(&self) -> usize {
        self.guardians.len()
    }

    /// Whether the roster is empty. Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }

    /// Minimum signer count to accept a message: `floor(2N / 3) + 1`.
    pub fn quorum(&self) -> usize {
        self.guardians.len() * 2 / 3 + 1
    }

    /// The guardian at a signature's claimed index, if in range.
    pub fn guardian(&self, index: usize) -> Option<&GuardianId> {
        self.guardians.get(index)
    }

    /// Whether the set may still authorize messages at `now`.
    ///
    /// True while no expiry is set, or until the expiry passes.
    pub fn is_active(&self, now: u64) -> bool {
        match self.expiration_time {
            None => true,
            Some(expiration) => now <= expiration,
        }
    }

    /// The expiry stamp, if the set has been superseded.
    pub fn expiration_time(&self) -> Option<u64> {
        self.expiration_time
    }

    /// Stamp the expiry when this set is superseded by a rotation.
    pub(crate) fn expire_at(&mut self, expiration: u64) {
        self.expiration_time = Some(expiration);
    }
}
