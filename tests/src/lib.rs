//! # Sentinel-Bridge Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── helpers/          # Guardian keyrings, frame builders
//! │
//! ├── exploits/         # Attack simulations
//! │   ├── replay_attack.rs
//! │   ├── signature_forgery.rs
//! │   └── governance_spoofing.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── flows.rs
//!     └── rotation_e2e.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sb-tests
//!
//! # By category
//! cargo test -p sb-tests integration::
//! cargo test -p sb-tests exploits::
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod helpers;
