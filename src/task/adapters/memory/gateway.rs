//! In-memory task gateway behaving like the console backend.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::task::{
    domain::{EventId, Task, TaskAction, TaskDraft, TaskEdit, TaskId, UserId, UserRef},
    payload::{FormPayload, LOCAL_DATETIME_FORMAT, fields},
    ports::{EventTaskGateway, EventTaskGatewayError, EventTaskGatewayResult},
};

/// Thread-safe in-memory gateway.
///
/// Keeps each event's tasks in creation order, a member directory and the
/// signed-in user. Submissions are checked against the action policy and
/// the transition engine exactly as the backend would.
pub struct InMemoryEventTaskGateway<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<GatewayState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct GatewayState {
    events: HashMap<EventId, Vec<Task>>,
    members: HashMap<UserId, UserRef>,
    acting_user: Option<UserId>,
}

impl<C> Clone for InMemoryEventTaskGateway<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryEventTaskGateway<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty gateway with no members and nobody signed in.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState::default())),
            clock,
        }
    }

    /// Adds or replaces a member in the directory.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn register_member(&self, user: UserRef) -> EventTaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.members.insert(user.id.clone(), user);
        Ok(())
    }

    /// Signs `user` in; later calls act on their behalf.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::UnknownUser`] when the user is not
    /// a registered member.
    pub fn sign_in(&self, user: &UserId) -> EventTaskGatewayResult<()> {
        let mut state = self.write_state()?;
        if !state.members.contains_key(user) {
            return Err(EventTaskGatewayError::UnknownUser(user.clone()));
        }
        state.acting_user = Some(user.clone());
        Ok(())
    }

    /// Stores an existing task as-is, bypassing workflow checks.
    ///
    /// # Errors
    ///
    /// Returns [`EventTaskGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn seed_task(&self, event_id: &EventId, task: Task) -> EventTaskGatewayResult<()> {
        let mut state = self.write_state()?;
        state.events.entry(event_id.clone()).or_default().push(task);
        Ok(())
    }

    fn read_state(&self) -> EventTaskGatewayResult<RwLockReadGuard<'_, GatewayState>> {
        self.state.read().map_err(|err| {
            EventTaskGatewayError::transport(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> EventTaskGatewayResult<RwLockWriteGuard<'_, GatewayState>> {
        self.state.write().map_err(|err| {
            EventTaskGatewayError::transport(std::io::Error::other(err.to_string()))
        })
    }
}

fn acting_user(acting_user: Option<&UserId>) -> EventTaskGatewayResult<&UserId> {
    acting_user.ok_or(EventTaskGatewayError::Unauthenticated)
}

fn lookup_member(
    members: &HashMap<UserId, UserRef>,
    user: &UserId,
) -> EventTaskGatewayResult<UserRef> {
    members
        .get(user)
        .cloned()
        .ok_or_else(|| EventTaskGatewayError::UnknownUser(user.clone()))
}

fn required_text<'a>(payload: &'a FormPayload, name: &str) -> EventTaskGatewayResult<&'a str> {
    payload
        .text(name)
        .ok_or_else(|| EventTaskGatewayError::Rejected(format!("missing field: {name}")))
}

fn optional_owned(payload: &FormPayload, name: &str) -> Option<String> {
    payload.text(name).map(str::to_owned)
}

fn optional_time(payload: &FormPayload, name: &str) -> EventTaskGatewayResult<Option<NaiveDateTime>> {
    payload
        .text(name)
        .map(|raw| {
            NaiveDateTime::parse_from_str(raw, LOCAL_DATETIME_FORMAT).map_err(|_| {
                EventTaskGatewayError::Rejected(format!("invalid {name}: {raw}"))
            })
        })
        .transpose()
}

fn parse_action(payload: &FormPayload) -> EventTaskGatewayResult<TaskAction> {
    let raw = required_text(payload, fields::ACTION_TYPE)?;
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(TaskAction::from_code)
        .filter(|action| action.is_update_action())
        .ok_or_else(|| EventTaskGatewayError::Rejected(format!("unsupported action type: {raw}")))
}

fn not_found(event_id: &EventId, task_id: &TaskId) -> EventTaskGatewayError {
    EventTaskGatewayError::TaskNotFound {
        event_id: event_id.clone(),
        task_id: task_id.clone(),
    }
}

#[async_trait]
impl<C> EventTaskGateway for InMemoryEventTaskGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn list_tasks(&self, event_id: &EventId) -> EventTaskGatewayResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state.events.get(event_id).cloned().unwrap_or_default())
    }

    async fn create_task(
        &self,
        event_id: &EventId,
        payload: FormPayload,
    ) -> EventTaskGatewayResult<Task> {
        let mut guard = self.write_state()?;
        let GatewayState {
            events,
            members,
            acting_user: signed_in,
        } = &mut *guard;

        let assigner = lookup_member(members, acting_user(signed_in.as_ref())?)?;
        let target = UserId::new(required_text(&payload, fields::TARGET_USER_ID)?);
        let assignee = lookup_member(members, &target)?;
        let draft = TaskDraft {
            name: required_text(&payload, fields::NAME)?.to_owned(),
            assigner,
            assignee,
            description: optional_owned(&payload, fields::DESCRIPTION),
            remark: optional_owned(&payload, fields::REMARK),
            start_time: optional_time(&payload, fields::START_TIME)?,
            end_time: optional_time(&payload, fields::END_TIME)?,
        };

        let task = Task::create(TaskId::generate(), draft, &*self.clock)?;
        debug!(
            event_id = %event_id,
            task_id = %task.id(),
            attachments = payload.files(fields::FILES).count(),
            "stored new task"
        );
        events.entry(event_id.clone()).or_default().push(task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        event_id: &EventId,
        task_id: &TaskId,
        payload: FormPayload,
    ) -> EventTaskGatewayResult<Task> {
        let mut guard = self.write_state()?;
        let GatewayState {
            events,
            members,
            acting_user: signed_in,
        } = &mut *guard;

        let actor = acting_user(signed_in.as_ref())?;
        let action = parse_action(&payload)?;
        let slot = events
            .get_mut(event_id)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == task_id))
            .ok_or_else(|| not_found(event_id, task_id))?;

        let mut updated = slot.clone();
        let from = updated.ensure_permitted(actor, action)?;
        let to = if action == TaskAction::Assign {
            let target = UserId::new(required_text(&payload, fields::TARGET_USER_ID)?);
            updated.assign_to(lookup_member(members, &target)?, &*self.clock)?
        } else {
            updated.apply_action(action, &*self.clock)?
        };

        let mut edit = TaskEdit {
            remark: optional_owned(&payload, fields::REMARK),
            ..TaskEdit::default()
        };
        if action == TaskAction::Update {
            edit.name = optional_owned(&payload, fields::NAME);
            edit.description = optional_owned(&payload, fields::DESCRIPTION);
            edit.start_time = optional_time(&payload, fields::START_TIME)?;
            edit.end_time = optional_time(&payload, fields::END_TIME)?;
        }
        updated.edit(edit, &*self.clock)?;

        debug!(
            event_id = %event_id,
            task_id = %task_id,
            action = %action,
            from = %from,
            to = %to,
            "applied task action"
        );
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_task(
        &self,
        event_id: &EventId,
        task_id: &TaskId,
    ) -> EventTaskGatewayResult<()> {
        let mut guard = self.write_state()?;
        let GatewayState {
            events,
            acting_user: signed_in,
            ..
        } = &mut *guard;

        let actor = acting_user(signed_in.as_ref())?;
        let tasks = events
            .get_mut(event_id)
            .ok_or_else(|| not_found(event_id, task_id))?;
        let position = tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| not_found(event_id, task_id))?;
        if let Some(task) = tasks.get(position) {
            task.ensure_permitted(actor, TaskAction::Delete)?;
        }
        tasks.remove(position);
        debug!(event_id = %event_id, task_id = %task_id, "deleted task");
        Ok(())
    }
}
