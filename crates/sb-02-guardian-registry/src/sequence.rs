//! # Sequence Tracker
//!
//! Per-emitter monotonically increasing sequence numbers for outbound
//! messages. The (chain, emitter, sequence) triple is what uniquely
//! identifies a posted message across the network.

use serde::{Deserialize, Serialize};
use shared_types::UniversalAddress;
use std::collections::HashMap;

/// Allocator of per-emitter sequence numbers, starting at zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SequenceTracker {
    sequences: HashMap<UniversalAddress, u64>,
}

impl SequenceTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next sequence for an emitter.
    ///
    /// Returns the allocated value; the emitter's next call returns one
    /// more.
    pub fn next(&mut self, emitter: UniversalAddress) -> u64 {
        let entry = self.sequences.entry(emitter).or_insert(0);
        let allocated = *entry;
        *entry += 1;
        allocated
    }

    /// The sequence the emitter would be allocated next, without
    /// allocating it.
    pub fn peek(&self, emitter: &UniversalAddress) -> u64 {
        self.sequences.get(emitter).copied().unwrap_or(0)
    }
}
