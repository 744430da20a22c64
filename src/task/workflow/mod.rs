//! Pure views derived from a task snapshot: board buckets, per-user
//! filters, status copy and display formatting.

pub mod board;
mod copy;
pub mod display;
mod filters;

pub use board::{BoardBuckets, BoardLane, categorize};
pub use copy::status_message;
pub use filters::{my_assigned_tasks, my_tasks};
