//! In-memory adapters for tests and local tooling.

mod gateway;

pub use gateway::InMemoryEventTaskGateway;
