//! # Universal Address
//!
//! The 32-byte canonical address form used to identify emitters and
//! contracts across ledgers with differing native address widths.
//!
//! Shorter native addresses are zero-left-padded into the canonical form.
//! Narrowing back to a native width requires the dropped leading bytes to
//! be zero, so a genuinely foreign 32-byte address can never alias a
//! shorter native one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the canonical address form in bytes.
pub const UNIVERSAL_ADDRESS_LEN: usize = 32;

/// Errors from address construction and width conversion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Input length does not fit the requested address form.
    #[error("Invalid address length: expected {expected}, got {got}")]
    InvalidLength {
        /// Required byte length
        expected: usize,
        /// Supplied byte length
        got: usize,
    },

    /// Narrowing would drop non-zero leading bytes.
    #[error("Non-zero padding: address does not fit in {width} bytes")]
    NonZeroPadding {
        /// Requested native width
        width: usize,
    },
}

/// A 32-byte canonical cross-ledger address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct UniversalAddress([u8; UNIVERSAL_ADDRESS_LEN]);

impl UniversalAddress {
    /// Wrap an exact 32-byte array.
    pub const fn new(bytes: [u8; UNIVERSAL_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice that must be exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; UNIVERSAL_ADDRESS_LEN] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: UNIVERSAL_ADDRESS_LEN,
                got: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Construct from a native address by zero-left-padding.
    ///
    /// Fails with [`AddressError::InvalidLength`] if the native address is
    /// wider than the canonical form.
    pub fn from_native(native: &[u8]) -> Result<Self, AddressError> {
        if native.len() > UNIVERSAL_ADDRESS_LEN {
            return Err(AddressError::InvalidLength {
                expected: UNIVERSAL_ADDRESS_LEN,
                got: native.len(),
            });
        }
        let mut bytes = [0u8; UNIVERSAL_ADDRESS_LEN];
        bytes[UNIVERSAL_ADDRESS_LEN - native.len()..].copy_from_slice(native);
        Ok(Self(bytes))
    }

    /// Narrow to an `N`-byte native address.
    ///
    /// Fails with [`AddressError::NonZeroPadding`] if any of the
    /// `32 - N` leading bytes is non-zero. This guards against truncation
    /// attacks where a foreign address collides with a shorter native one.
    pub fn to_native<const N: usize>(&self) -> Result<[u8; N], AddressError> {
        if N > UNIVERSAL_ADDRESS_LEN {
            return Err(AddressError::InvalidLength {
                expected: UNIVERSAL_ADDRESS_LEN,
                got: N,
            });
        }
        if self.0[..UNIVERSAL_ADDRESS_LEN - N].iter().any(|&b| b != 0) {
            return Err(AddressError::NonZeroPadding { width: N });
        }
        let mut native = [0u8; N];
        native.copy_from_slice(&self.0[UNIVERSAL_ADDRESS_LEN - N..]);
        Ok(native)
    }

    /// The canonical 32-byte form.
    pub const fn as_bytes(&self) -> &[u8; UNIVERSAL_ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; UNIVERSAL_ADDRESS_LEN]> for UniversalAddress {
    fn from(bytes: [u8; UNIVERSAL_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for UniversalAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for UniversalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UniversalAddress(0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
