//! Step definitions for event task workflow scenarios.

mod then;
mod when;
pub mod world;
