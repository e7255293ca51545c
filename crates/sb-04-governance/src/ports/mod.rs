//! # Ports Module
//!
//! Trait seams exposed by this subsystem.

pub mod inbound;

pub use inbound::CoreBridgeApi;
