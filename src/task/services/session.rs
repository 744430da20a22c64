//! Per-event session owning the task snapshot for one viewer.

use crate::config::ConsoleConfig;
use crate::task::{
    domain::{ActionOption, EventId, Task, TaskAction, TaskDomainError, TaskId, UserId},
    payload::{CreateTaskInput, UpdateTaskInput, build_create_payload, build_update_payload},
    ports::{EventTaskGateway, EventTaskGatewayError},
    workflow::{self, BoardBuckets, BoardLane},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for event task operations.
#[derive(Debug, Error)]
pub enum EventTaskServiceError {
    /// The workflow refused the request.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] EventTaskGatewayError),
    /// The task is not part of the current snapshot.
    #[error("task not found in session: {0}")]
    TaskNotFound(TaskId),
    /// A reassignment was submitted without a target user.
    #[error("reassigning task {0} requires a target user")]
    MissingTargetUser(TaskId),
}

/// Result type for event task session operations.
pub type EventTaskServiceResult<T> = Result<T, EventTaskServiceError>;

/// Result of a performed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The task was changed; carries the server's copy.
    Updated(Task),
    /// The task was removed from the event.
    Deleted(TaskId),
}

/// Task snapshot of one event as seen by one viewer.
///
/// Derived views (filters, board, menus) are computed from the snapshot
/// on every call, so they always agree with the last refresh or action.
/// Board lanes and timestamps follow the session's [`ConsoleConfig`].
pub struct EventTaskSession<G>
where
    G: EventTaskGateway,
{
    gateway: Arc<G>,
    event_id: EventId,
    viewer: UserId,
    config: ConsoleConfig,
    tasks: Vec<Task>,
}

impl<G> EventTaskSession<G>
where
    G: EventTaskGateway,
{
    /// Creates a session with an empty snapshot and default settings.
    #[must_use]
    pub fn new(gateway: Arc<G>, event_id: EventId, viewer: UserId) -> Self {
        Self {
            gateway,
            event_id,
            viewer,
            config: ConsoleConfig::default(),
            tasks: Vec::new(),
        }
    }

    /// Replaces the console settings.
    #[must_use]
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the console settings.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Returns the event this session belongs to.
    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Returns the viewing user.
    #[must_use]
    pub const fn viewer(&self) -> &UserId {
        &self.viewer
    }

    /// Replaces the snapshot with the gateway's current task list.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::Gateway`] when the fetch fails; the
    /// previous snapshot is kept.
    pub async fn refresh(&mut self) -> EventTaskServiceResult<&[Task]> {
        let tasks = self.gateway.list_tasks(&self.event_id).await?;
        debug!(event_id = %self.event_id, count = tasks.len(), "refreshed task snapshot");
        self.tasks = tasks;
        Ok(&self.tasks)
    }

    /// Returns every task in the snapshot.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task in the snapshot.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Tasks assigned to the viewer.
    #[must_use]
    pub fn my_tasks(&self) -> Vec<&Task> {
        workflow::my_tasks(&self.tasks, &self.viewer)
    }

    /// Tasks the viewer assigned.
    #[must_use]
    pub fn my_assigned_tasks(&self) -> Vec<&Task> {
        workflow::my_assigned_tasks(&self.tasks, &self.viewer)
    }

    /// Board over every task of the event.
    #[must_use]
    pub fn board(&self) -> BoardBuckets<'_> {
        workflow::categorize(&self.tasks)
    }

    /// Board over the viewer's own tasks.
    #[must_use]
    pub fn my_board(&self) -> BoardBuckets<'_> {
        workflow::categorize(self.my_tasks())
    }

    /// Event-wide board laid out with the configured board settings.
    #[must_use]
    pub fn lanes(&self) -> Vec<BoardLane<'_>> {
        self.board().lanes(&self.config.board)
    }

    /// Board of the tasks the viewer assigned, laid out like the event board.
    #[must_use]
    pub fn assigned_lanes(&self) -> Vec<BoardLane<'_>> {
        workflow::categorize(self.my_assigned_tasks()).lanes(&self.config.board)
    }

    /// Viewer's own board laid out with the "my tasks" settings.
    #[must_use]
    pub fn my_lanes(&self) -> Vec<BoardLane<'_>> {
        self.my_board().lanes(&self.config.my_tasks_board)
    }

    /// Returns a task's last update time in the configured format.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::TaskNotFound`] when the task is not
    /// in the snapshot.
    pub fn updated_at_label(&self, task_id: &TaskId) -> EventTaskServiceResult<Option<String>> {
        Ok(self
            .find(task_id)?
            .update_time()
            .map(|stamp| self.config.format_timestamp(&stamp.to_rfc3339())))
    }

    /// Returns the viewer's action menu for a task.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::TaskNotFound`] when the task is not
    /// in the snapshot.
    pub fn actions_for_task(&self, task_id: &TaskId) -> EventTaskServiceResult<Vec<ActionOption>> {
        Ok(self.find(task_id)?.available_actions(&self.viewer))
    }

    /// Returns the status sentence the viewer sees on a task card.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::TaskNotFound`] when the task is not
    /// in the snapshot.
    pub fn status_message_for_task(
        &self,
        task_id: &TaskId,
    ) -> EventTaskServiceResult<Option<&'static str>> {
        let task = self.find(task_id)?;
        Ok(workflow::status_message(
            Some(task.status_code()),
            task.is_assigned_by(&self.viewer),
        ))
    }

    /// Creates a task and appends it to the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::Gateway`] when the gateway rejects
    /// the submission.
    pub async fn create_task(&mut self, input: CreateTaskInput) -> EventTaskServiceResult<Task> {
        let payload = build_create_payload(input);
        let task = self.gateway.create_task(&self.event_id, payload).await?;
        info!(event_id = %self.event_id, task_id = %task.id(), "created task");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Performs a workflow action on a task.
    ///
    /// The action must appear in the viewer's menu. Update-style actions
    /// carry the task's current name unless the input supplies one.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskServiceError::TaskNotFound`] for tasks outside
    /// the snapshot, [`EventTaskServiceError::Domain`] when the action is
    /// not permitted, [`EventTaskServiceError::MissingTargetUser`] for a
    /// reassignment without a target and [`EventTaskServiceError::Gateway`]
    /// when the submission fails.
    pub async fn perform(
        &mut self,
        task_id: &TaskId,
        input: UpdateTaskInput,
    ) -> EventTaskServiceResult<ActionOutcome> {
        let action = input.action();
        let current_name = {
            let task = self.find(task_id)?;
            if let Err(err) = task.ensure_permitted(&self.viewer, action) {
                warn!(
                    event_id = %self.event_id,
                    task_id = %task_id,
                    viewer = %self.viewer,
                    action = %action,
                    "refused task action"
                );
                return Err(err.into());
            }
            task.name().to_owned()
        };

        if action == TaskAction::Delete {
            self.gateway.delete_task(&self.event_id, task_id).await?;
            self.tasks.retain(|task| task.id() != task_id);
            info!(event_id = %self.event_id, task_id = %task_id, "deleted task");
            return Ok(ActionOutcome::Deleted(task_id.clone()));
        }

        if action == TaskAction::Assign && input.target_user_id().is_none() {
            return Err(EventTaskServiceError::MissingTargetUser(task_id.clone()));
        }

        let payload = build_update_payload(input.or_name(current_name));
        let updated = self
            .gateway
            .update_task(&self.event_id, task_id, payload)
            .await?;
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id() == task_id) {
            *slot = updated.clone();
        }
        info!(
            event_id = %self.event_id,
            task_id = %task_id,
            action = %action,
            status = %updated.status_code(),
            "updated task"
        );
        Ok(ActionOutcome::Updated(updated))
    }

    fn find(&self, task_id: &TaskId) -> EventTaskServiceResult<&Task> {
        self.task(task_id)
            .ok_or_else(|| EventTaskServiceError::TaskNotFound(task_id.clone()))
    }
}
