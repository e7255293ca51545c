//! # Codec Errors
//!
//! Error types for wire encoding and decoding.

use thiserror::Error;

/// Errors that can occur while reading a wire buffer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A read ran past the end of the buffer.
    #[error("Buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Bytes remained after the caller declared decoding complete.
    #[error("Trailing bytes: {remaining} bytes left after decoding")]
    TrailingBytes {
        /// Unconsumed byte count
        remaining: usize,
    },
}
