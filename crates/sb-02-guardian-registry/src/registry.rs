//! # Guardian Set Registry
//!
//! Owns every historical guardian set, keyed by index, and advances the
//! active index through the rotation state machine.
//!
//! Mutation happens only through [`GuardianSetRegistry::genesis`] and
//! [`GuardianSetRegistry::rotate`]; there is no other way to touch the
//! stored sets.

use crate::domain::entities::GuardianSet;
use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::GuardianId;
use std::collections::BTreeMap;

/// Registry of all guardian sets ever installed on this deployment.
///
/// Invariant: exactly one set (the one at `current_index`) has no
/// successor and no expiry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuardianSetRegistry {
    sets: BTreeMap<u32, GuardianSet>,
    current_index: u32,
    grace_period_secs: u64,
}

impl GuardianSetRegistry {
    /// Install the initial guardian set at deployment.
    ///
    /// The genesis set starts active with no expiry. `grace_period_secs`
    /// is how long a superseded set remains valid after rotation.
    pub fn genesis(initial: GuardianSet, grace_period_secs: u64) -> Self {
        let current_index = initial.index();
        let mut sets = BTreeMap::new();
        sets.insert(current_index, initial);
        Self {
            sets,
            current_index,
            grace_period_secs,
        }
    }

    /// Index of the active guardian set.
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// The active guardian set.
    pub fn current(&self) -> &GuardianSet {
        // The genesis constructor guarantees the entry exists.
        &self.sets[&self.current_index]
    }

    /// Look up a historical set by index.
    pub fn get(&self, index: u32) -> Result<&GuardianSet, RegistryError> {
        self.sets
            .get(&index)
            .ok_or(RegistryError::UnknownGuardianSet(index))
    }

    /// Grace period applied to superseded sets, in seconds.
    pub fn grace_period_secs(&self) -> u64 {
        self.grace_period_secs
    }

    /// Number of stored sets, historical and current.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Never true: genesis installs one set and rotation only adds.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Advance the registry to a new guardian set.
    ///
    /// `new_index` must be exactly `current_index + 1`; rotations cannot
    /// be skipped or reordered. On success the superseded set expires at
    /// `now + grace_period` and the new set becomes current.
    pub fn rotate(
        &mut self,
        new_index: u32,
        guardians: Vec<GuardianId>,
        now: u64,
    ) -> Result<(), RegistryError> {
        let expected = self.current_index + 1;
        if new_index != expected {
            return Err(RegistryError::NonIncrementalGuardianSet {
                expected,
                got: new_index,
            });
        }

        let new_set = GuardianSet::new(new_index, guardians)?;

        let expiration = now + self.grace_period_secs;
        if let Some(previous) = self.sets.get_mut(&self.current_index) {
            previous.expire_at(expiration);
        }
        self.sets.insert(new_index, new_set);
        self.current_index = new_index;

        tracing::info!(
            "[sb-02] guardian set rotated to index {}, previous set expires at {}",
            new_index,
            expiration
        );
        Ok(())
    }
}
