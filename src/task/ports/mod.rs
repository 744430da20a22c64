//! Port contracts for event task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod gateway;

pub use gateway::{EventTaskGateway, EventTaskGatewayError, EventTaskGatewayResult};
