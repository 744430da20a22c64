//! Workflow action codes and their catalogue entries.

use super::ParseTaskActionError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Workflow actions a user may submit against a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Create a new task.
    Create,
    /// Assign or reassign the task to a member.
    Assign,
    /// Remove the task from the event.
    Delete,
    /// Edit task details.
    Update,
    /// Submit finished work for approval.
    Submit,
    /// Report that progress is halted.
    Block,
    /// Take on an assigned task.
    Accept,
    /// Decline an assigned task.
    Reject,
    /// Confirm submitted work as complete.
    Approve,
}

impl TaskAction {
    /// Every action in code order.
    pub const ALL: [Self; 9] = [
        Self::Create,
        Self::Assign,
        Self::Delete,
        Self::Update,
        Self::Submit,
        Self::Block,
        Self::Accept,
        Self::Reject,
        Self::Approve,
    ];

    /// Returns the wire code sent in the `type` form field.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Create => 1,
            Self::Assign => 2,
            Self::Delete => 3,
            Self::Update => 4,
            Self::Submit => 5,
            Self::Block => 6,
            Self::Accept => 7,
            Self::Reject => 8,
            Self::Approve => 9,
        }
    }

    /// Resolves a wire code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Create),
            2 => Some(Self::Assign),
            3 => Some(Self::Delete),
            4 => Some(Self::Update),
            5 => Some(Self::Submit),
            6 => Some(Self::Block),
            7 => Some(Self::Accept),
            8 => Some(Self::Reject),
            9 => Some(Self::Approve),
            _ => None,
        }
    }

    /// Returns the canonical `snake_case` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Assign => "assign",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Submit => "submit",
            Self::Block => "block",
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Approve => "approve",
        }
    }

    /// Returns `true` when the action may carry file attachments.
    #[must_use]
    pub const fn allows_attachments(self) -> bool {
        matches!(self, Self::Submit | Self::Block)
    }

    /// Returns `true` for actions submitted through the task update
    /// endpoint (everything except creation and deletion).
    #[must_use]
    pub const fn is_update_action(self) -> bool {
        !matches!(self, Self::Create | Self::Delete)
    }

    /// Returns the activity-history entry for this action.
    #[must_use]
    pub const fn meta(self) -> ActionMeta {
        let (label, description) = match self {
            Self::Create => ("Created", "The task was created."),
            Self::Assign => ("Assigned", "The task was assigned to a member."),
            Self::Delete => ("Deleted", "The task was removed from the event."),
            Self::Update => ("Updated", "Task details were changed."),
            Self::Submit => ("Submitted", "The assignee submitted the task for approval."),
            Self::Block => ("Blocked", "Progress was halted by an issue or dependency."),
            Self::Accept => ("Accepted", "The assignee accepted the task."),
            Self::Reject => ("Rejected", "The assignee declined the task."),
            Self::Approve => ("Approved", "The assigner approved the submitted work."),
        };
        ActionMeta {
            label: Cow::Borrowed(label),
            description: Cow::Borrowed(description),
        }
    }
}

impl TryFrom<&str> for TaskAction {
    type Error = ParseTaskActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
            .ok_or_else(|| ParseTaskActionError(value.to_owned()))
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and description of an action as shown in a task's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionMeta {
    /// Past-tense label, e.g. `"Submitted"`.
    pub label: Cow<'static, str>,
    /// One-line explanation.
    pub description: Cow<'static, str>,
}

/// Looks up the history entry for a raw action code.
///
/// Unknown codes yield an `"Action <code>"` label so history rows stay
/// readable instead of failing.
#[must_use]
pub fn action_meta(code: i32) -> ActionMeta {
    TaskAction::from_code(code).map_or_else(
        || ActionMeta {
            label: Cow::Owned(format!("Action {code}")),
            description: Cow::Borrowed("Unrecognized action."),
        },
        TaskAction::meta,
    )
}
