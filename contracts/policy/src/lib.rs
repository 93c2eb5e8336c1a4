#![no_std]

//! Shared authorization and compliance layer for the token suite.
//!
//! Every contract in the workspace composes this crate by delegation: the
//! role registry gates administration, the compliance gate carries the
//! frozen-account set and the global mint/soulbound flags. Each deployed
//! contract instance owns its own copy of this state.

pub mod compliance;
pub mod events;
pub mod roles;

pub use roles::Role;
