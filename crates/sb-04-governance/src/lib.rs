//! # Governance Subsystem (SB-04)
//!
//! Restricts verified messages to protocol governance and applies the
//! actions they authorize. A governance message must be signed by the
//! *current* guardian set, originate from the configured governance
//! emitter, and survive replay protection before its action is even
//! decoded.
//!
//! ## Module Structure
//!
//! ```text
//! sb-04-governance/
//! ├── domain/          # CoreConfig, GovernanceMessage, errors
//! ├── actions.rs       # Action payload decoders
//! ├── gate.rs          # The governance gate
//! ├── ports/           # Inbound API trait
//! └── service.rs       # CoreService: the deployment's entry points
//! ```
//!
//! ## Security Notes
//!
//! - Governance never accepts a superseded guardian set, even inside its
//!   grace period; a rotated-out set cannot authorize further rotations.
//! - Governance messages are one-shot: the digest is consumed before the
//!   action payload is interpreted.
//! - The registry and replay store are private to [`CoreService`];
//!   nothing else can mutate them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod domain;
pub mod gate;
pub mod ports;
pub mod service;


// Re-export public API
pub use actions::{ContractUpgrade, GuardianSetRotation, ACTION_CONTRACT_UPGRADE, ACTION_GUARDIAN_SET_ROTATION};
pub use domain::entities::{CoreConfig, GovernanceEmitter, GovernanceMessage, TargetScope, CORE_MODULE};
pub use domain::errors::GovernanceError;
pub use gate::parse_and_verify;
pub use ports::inbound::CoreBridgeApi;
pub use service::{CoreService, Directive, PostedMessage};

/// Schema version of the deployment configuration this build expects.
pub const CORE_SCHEMA_VERSION: u32 = 1;
