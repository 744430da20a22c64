//! Task aggregate root and viewer-role derivation.

use super::{
    ActionOption, StatusCode, TaskAction, TaskDomainError, TaskId, TaskStatus, UserId, UserRef,
    policy,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// How the current viewer relates to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerRole {
    /// The viewer created the task and directs its lifecycle.
    Assigner,
    /// The viewer is responsible for executing the task.
    Assignee,
    /// The viewer is neither party.
    Observer,
}

impl ViewerRole {
    /// Returns `true` for [`ViewerRole::Assigner`].
    #[must_use]
    pub const fn is_assigner(self) -> bool {
        matches!(self, Self::Assigner)
    }
}

/// Task record for one event.
///
/// Serialized in the API's camelCase shape. Schedule times are local
/// wall-clock values exactly as submitted; create and update stamps are
/// UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default = "missing_status", deserialize_with = "status_or_missing")]
    status: StatusCode,
    #[serde(default)]
    start_time: Option<NaiveDateTime>,
    #[serde(default)]
    end_time: Option<NaiveDateTime>,
    #[serde(default)]
    create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    remark: Option<String>,
    #[serde(default, rename = "assignerUser")]
    assigner: Option<UserRef>,
    #[serde(default, rename = "assignedUser")]
    assignee: Option<UserRef>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task name; must not be blank.
    pub name: String,
    /// User creating the task.
    pub assigner: UserRef,
    /// User the task is assigned to.
    pub assignee: UserRef,
    /// Optional description.
    pub description: Option<String>,
    /// Optional remark.
    pub remark: Option<String>,
    /// Optional scheduled start.
    pub start_time: Option<NaiveDateTime>,
    /// Optional scheduled end.
    pub end_time: Option<NaiveDateTime>,
}

/// Parameter object for reconstructing a task from stored or fetched data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Raw status code, possibly unknown.
    pub status: StatusCode,
    /// Scheduled start, if any.
    pub start_time: Option<NaiveDateTime>,
    /// Scheduled end, if any.
    pub end_time: Option<NaiveDateTime>,
    /// Creation timestamp, if known.
    pub create_time: Option<DateTime<Utc>>,
    /// Latest update timestamp, if known.
    pub update_time: Option<DateTime<Utc>>,
    /// Remark, if any.
    pub remark: Option<String>,
    /// Assigner, if known.
    pub assigner: Option<UserRef>,
    /// Assignee, if known.
    pub assignee: Option<UserRef>,
}

/// Detail edits carried by an update-style action. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New remark.
    pub remark: Option<String>,
    /// New scheduled start.
    pub start_time: Option<NaiveDateTime>,
    /// New scheduled end.
    pub end_time: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is blank.
    pub fn create(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let name = validate_name(draft.name)?;
        let timestamp = clock.utc();
        Ok(Self {
            id,
            name,
            description: draft.description,
            status: TaskStatus::Pending.code(),
            start_time: draft.start_time,
            end_time: draft.end_time,
            create_time: Some(timestamp),
            update_time: Some(timestamp),
            remark: draft.remark,
            assigner: Some(draft.assigner),
            assignee: Some(draft.assignee),
        })
    }

    /// Reconstructs a task from stored or fetched data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            start_time: data.start_time,
            end_time: data.end_time,
            create_time: data.create_time,
            update_time: data.update_time,
            remark: data.remark,
            assigner: data.assigner,
            assignee: data.assignee,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the raw status code.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns the status, or `None` when the code is unknown.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status.status()
    }

    /// Returns the scheduled start, if any.
    #[must_use]
    pub const fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time
    }

    /// Returns the scheduled end, if any.
    #[must_use]
    pub const fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_time
    }

    /// Returns the creation timestamp, if known.
    #[must_use]
    pub const fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    /// Returns the latest update timestamp, if known.
    #[must_use]
    pub const fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time
    }

    /// Returns the remark, if any.
    #[must_use]
    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }

    /// Returns the assigner, if known.
    #[must_use]
    pub const fn assigner(&self) -> Option<&UserRef> {
        self.assigner.as_ref()
    }

    /// Returns the assignee, if known.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserRef> {
        self.assignee.as_ref()
    }

    /// Returns `true` when `user` is the task's assigner.
    #[must_use]
    pub fn is_assigned_by(&self, user: &UserId) -> bool {
        self.assigner.as_ref().is_some_and(|assigner| assigner.id == *user)
    }

    /// Returns `true` when `user` is the task's assignee.
    #[must_use]
    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assignee.as_ref().is_some_and(|assignee| assignee.id == *user)
    }

    /// Derives how `viewer` relates to this task. Assigner wins when the
    /// viewer is both parties.
    #[must_use]
    pub fn viewer_role(&self, viewer: &UserId) -> ViewerRole {
        if self.is_assigned_by(viewer) {
            ViewerRole::Assigner
        } else if self.is_assigned_to(viewer) {
            ViewerRole::Assignee
        } else {
            ViewerRole::Observer
        }
    }

    /// Returns the ordered action menu for `viewer`. Observers and tasks
    /// with unknown status get an empty menu.
    #[must_use]
    pub fn available_actions(&self, viewer: &UserId) -> Vec<ActionOption> {
        match self.viewer_role(viewer) {
            ViewerRole::Observer => Vec::new(),
            role => policy::actions_for(self.status, role.is_assigner()),
        }
    }

    /// Checks that `viewer` may perform `action` in the current status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] when the status code is
    /// not recognized and [`TaskDomainError::ActionNotPermitted`] when the
    /// viewer's menu does not offer the action.
    pub fn ensure_permitted(
        &self,
        viewer: &UserId,
        action: TaskAction,
    ) -> Result<TaskStatus, TaskDomainError> {
        let status = self.known_status()?;
        let role = self.viewer_role(viewer);
        let allowed = role != ViewerRole::Observer
            && policy::permits(status, role.is_assigner(), action);
        if !allowed {
            return Err(TaskDomainError::ActionNotPermitted {
                task_id: self.id.clone(),
                status,
                action,
            });
        }
        Ok(status)
    }

    /// Applies the status transition for `action`.
    ///
    /// The task is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] for unknown status codes
    /// and [`TaskDomainError::InvalidStateTransition`] when the action is
    /// not an outbound transition of the current status.
    pub fn apply_action(
        &mut self,
        action: TaskAction,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let from = self.known_status()?;
        let to = from
            .after(action)
            .ok_or_else(|| TaskDomainError::InvalidStateTransition {
                task_id: self.id.clone(),
                from,
                action,
            })?;
        self.status = to.code();
        self.touch(clock);
        Ok(to)
    }

    /// Reassigns the task, moving it back to pending.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Task::apply_action`] for
    /// [`TaskAction::Assign`].
    pub fn assign_to(
        &mut self,
        assignee: UserRef,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let status = self.apply_action(TaskAction::Assign, clock)?;
        self.assignee = Some(assignee);
        Ok(status)
    }

    /// Applies detail edits.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when a blank name is
    /// supplied; no field is changed in that case.
    pub fn edit(&mut self, edit: TaskEdit, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let name = edit.name.map(validate_name).transpose()?;
        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(description) = edit.description {
            self.description = Some(description);
        }
        if let Some(remark) = edit.remark {
            self.remark = Some(remark);
        }
        if let Some(start_time) = edit.start_time {
            self.start_time = Some(start_time);
        }
        if let Some(end_time) = edit.end_time {
            self.end_time = Some(end_time);
        }
        self.touch(clock);
        Ok(())
    }

    fn known_status(&self) -> Result<TaskStatus, TaskDomainError> {
        self.status().ok_or_else(|| TaskDomainError::UnknownStatus {
            task_id: self.id.clone(),
            code: self.status,
        })
    }

    /// Updates the `update_time` stamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.update_time = Some(clock.utc());
    }
}

fn validate_name(name: String) -> Result<String, TaskDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTaskName);
    }
    Ok(trimmed.to_owned())
}

const fn missing_status() -> StatusCode {
    StatusCode::MISSING
}

fn status_or_missing<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.map_or(StatusCode::MISSING, StatusCode::new))
}
