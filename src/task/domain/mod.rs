//! Domain model for event task workflow.
//!
//! Statuses, actions, the role-conditioned action policy and the task
//! aggregate live here, free of any transport or storage concern.

mod action;
mod error;
mod ids;
pub mod policy;
mod status;
mod task;
mod user;

pub use action::{ActionMeta, TaskAction, action_meta};
pub use error::{ParseTaskActionError, ParseTaskStatusError, TaskDomainError};
pub use ids::{EventId, TaskId, UserId};
pub use policy::{ActionOption, actions_for};
pub use status::{
    StatusCode, StatusStyle, TaskStatus, UNKNOWN_STATUS_TEXT, status_style, status_text,
};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskEdit, ViewerRole};
pub use user::{GroupRef, UserRef};
