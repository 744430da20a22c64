//! Role-conditioned action menus.
//!
//! Each status offers a fixed, ordered set of outbound actions. The
//! assigner holds the administrative actions (update, reassign, delete,
//! approve); the assignee holds the execution actions (accept, reject,
//! submit, block). Menu order is part of the contract.

use super::{StatusCode, TaskAction, TaskStatus};
use serde::Serialize;

/// One entry of an action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionOption {
    /// Button label.
    pub label: &'static str,
    /// Action submitted when the entry is chosen.
    pub action: TaskAction,
    /// Tooltip text.
    pub description: &'static str,
}

impl ActionOption {
    /// Returns the wire code of the underlying action.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.action.code()
    }
}

const UPDATE: ActionOption = ActionOption {
    label: "Update",
    action: TaskAction::Update,
    description: "Modify task details or adjust deadlines and descriptions.",
};

const DELETE: ActionOption = ActionOption {
    label: "Delete",
    action: TaskAction::Delete,
    description: "Remove the task from this event.",
};

const REASSIGN: ActionOption = ActionOption {
    label: "Reassign",
    action: TaskAction::Assign,
    description: "Reassign the task to another member or update the assignee.",
};

const ASSIGNER_BLOCK: ActionOption = ActionOption {
    label: "Block",
    action: TaskAction::Block,
    description: "Mark the task as blocked due to external dependencies or issues.",
};

const APPROVE: ActionOption = ActionOption {
    label: "Approve",
    action: TaskAction::Approve,
    description: "Confirm and approve the task completion after submission by the assignee.",
};

const ACCEPT: ActionOption = ActionOption {
    label: "Accept",
    action: TaskAction::Accept,
    description: "Take on the task and start working on it.",
};

const REJECT: ActionOption = ActionOption {
    label: "Reject",
    action: TaskAction::Reject,
    description: "Decline the task and send it back to the assigner.",
};

const SUBMIT: ActionOption = ActionOption {
    label: "Submit",
    action: TaskAction::Submit,
    description: "Mark the task as completed and submit it for approval.",
};

const ASSIGNEE_BLOCK: ActionOption = ActionOption {
    label: "Block",
    action: TaskAction::Block,
    description: "Indicate that progress is halted due to an issue or dependency.",
};

/// Returns the ordered menu a viewer sees for a known status.
#[must_use]
pub const fn menu_for(status: TaskStatus, is_assigner: bool) -> &'static [ActionOption] {
    if is_assigner {
        match status {
            TaskStatus::Pending | TaskStatus::Blocked => &[UPDATE, DELETE, REASSIGN],
            TaskStatus::InProgress | TaskStatus::Delayed => {
                &[UPDATE, ASSIGNER_BLOCK, DELETE, REASSIGN]
            }
            TaskStatus::PendingApproval => &[APPROVE],
            TaskStatus::Rejected => &[UPDATE, REASSIGN, DELETE],
            TaskStatus::Completed => &[DELETE],
        }
    } else {
        match status {
            TaskStatus::Pending => &[ACCEPT, REJECT],
            TaskStatus::InProgress | TaskStatus::Delayed => &[SUBMIT, ASSIGNEE_BLOCK],
            TaskStatus::Blocked
            | TaskStatus::PendingApproval
            | TaskStatus::Rejected
            | TaskStatus::Completed => &[],
        }
    }
}

/// Returns the ordered menu for a raw status code.
///
/// Unknown codes yield an empty menu for both roles.
#[must_use]
pub fn actions_for(code: StatusCode, is_assigner: bool) -> Vec<ActionOption> {
    code.status()
        .map(|status| menu_for(status, is_assigner).to_vec())
        .unwrap_or_default()
}

/// Returns `true` when `action` appears in the viewer's menu for `status`.
#[must_use]
pub fn permits(status: TaskStatus, is_assigner: bool, action: TaskAction) -> bool {
    menu_for(status, is_assigner)
        .iter()
        .any(|option| option.action == action)
}
