//! Event task workflow.
//!
//! Tasks move through a small status machine (pending, in progress,
//! delayed, blocked, pending approval, rejected, completed) driven by
//! actions whose availability depends on whether the viewer assigned the
//! task or executes it. The module follows hexagonal architecture:
//!
//! - Domain types, the action policy and transitions in [`domain`]
//! - Board, filter and copy derivations in [`workflow`]
//! - Transport envelopes in [`payload`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod payload;
pub mod ports;
pub mod services;
pub mod workflow;

#[cfg(test)]
mod tests;
