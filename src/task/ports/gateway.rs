//! Gateway port to the remote task API.

use crate::task::{
    domain::{EventId, Task, TaskDomainError, TaskId, UserId},
    payload::FormPayload,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type EventTaskGatewayResult<T> = Result<T, EventTaskGatewayError>;

/// Remote task API contract for one console session.
///
/// Implementations authenticate the acting user out of band; every call is
/// made on that user's behalf.
#[async_trait]
pub trait EventTaskGateway: Send + Sync {
    /// Fetches every task of an event in server order.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError`] when the request fails.
    async fn list_tasks(&self, event_id: &EventId) -> EventTaskGatewayResult<Vec<Task>>;

    /// Creates a task from a create payload.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::Rejected`] when the payload is
    /// incomplete and [`EventTaskGatewayError::UnknownUser`] when the
    /// target user does not exist.
    async fn create_task(
        &self,
        event_id: &EventId,
        payload: FormPayload,
    ) -> EventTaskGatewayResult<Task>;

    /// Submits an update-style action.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::TaskNotFound`] for unknown tasks and
    /// [`EventTaskGatewayError::Domain`] when the workflow refuses the
    /// action.
    async fn update_task(
        &self,
        event_id: &EventId,
        task_id: &TaskId,
        payload: FormPayload,
    ) -> EventTaskGatewayResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::TaskNotFound`] for unknown tasks.
    async fn delete_task(&self, event_id: &EventId, task_id: &TaskId)
    -> EventTaskGatewayResult<()>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum EventTaskGatewayError {
    /// No task with this identifier exists in the event.
    #[error("task {task_id} not found in event {event_id}")]
    TaskNotFound {
        /// Event searched.
        event_id: EventId,
        /// Missing task.
        task_id: TaskId,
    },

    /// The referenced user is not a member.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// No user is signed in.
    #[error("no authenticated user")]
    Unauthenticated,

    /// The API rejected the request, typically a non-zero envelope code.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The workflow refused the action.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Transport or storage failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl EventTaskGatewayError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
