//! Error types for task domain validation and parsing.

use super::{StatusCode, TaskAction, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by task workflow operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The viewer's menu for the task's current status does not offer the
    /// action.
    #[error("action {action} is not permitted on task {task_id} in status {status}")]
    ActionNotPermitted {
        /// Task the action targeted.
        task_id: TaskId,
        /// Status the task was in.
        status: TaskStatus,
        /// Requested action.
        action: TaskAction,
    },

    /// The action is not an outbound transition of the current status.
    #[error("invalid transition for task {task_id}: {action} from {from}")]
    InvalidStateTransition {
        /// Task the action targeted.
        task_id: TaskId,
        /// Status the task was in.
        from: TaskStatus,
        /// Requested action.
        action: TaskAction,
    },

    /// The task carries a status code outside the known set.
    #[error("task {task_id} has unknown status code {code}")]
    UnknownStatus {
        /// Task the action targeted.
        task_id: TaskId,
        /// Raw status code.
        code: StatusCode,
    },
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task actions from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task action: {0}")]
pub struct ParseTaskActionError(pub String);
