//! # Shared Types Crate
//!
//! Domain types shared by every Sentinel-Bridge subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem primitives (hashes,
//!   guardian identifiers, chain identifiers, canonical addresses) are
//!   defined here and nowhere else.
//! - **Checked Conversions**: address-width conversions never truncate
//!   silently; narrowing requires the dropped bytes to be zero.

pub mod address;
pub mod entities;

pub use address::{AddressError, UniversalAddress, UNIVERSAL_ADDRESS_LEN};
pub use entities::*;
