//! Corvee: workflow core for an event administration console.
//!
//! Organizers assign tasks to event members and follow them through an
//! assign, accept or reject, work, submit, approve or reject cycle. This
//! crate holds the logic behind that console: the task status machine,
//! the role-conditioned action menus, the derived board and filter views,
//! and the form payloads submitted to the remote API.
//!
//! # Architecture
//!
//! Corvee follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task workflow, board views and submission payloads
//! - [`member`]: Member roles and assignee options
//! - [`config`]: Console settings

pub mod config;
pub mod member;
pub mod task;
