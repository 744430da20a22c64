//! Role-tailored status sentences shown on task cards.

use crate::task::domain::{StatusCode, TaskStatus};

/// Describes what is currently happening to a task from the viewer's side.
///
/// Every known status has copy for both roles. Missing or unknown codes
/// return `None`.
#[must_use]
pub fn status_message(code: Option<StatusCode>, is_assigner: bool) -> Option<&'static str> {
    let status = code?.status()?;
    Some(if is_assigner {
        assigner_message(status)
    } else {
        assignee_message(status)
    })
}

const fn assigner_message(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Waiting for assignee to accept.",
        TaskStatus::InProgress => "The assignee is working on this task.",
        TaskStatus::Completed => "Task approved and closed.",
        TaskStatus::Delayed => "Task is overdue. Follow up with the assignee.",
        TaskStatus::Blocked => "Task is blocked. Review the reported issue.",
        TaskStatus::PendingApproval => "Submitted by the assignee. Waiting for your review.",
        TaskStatus::Rejected => "The assignee rejected this task. Update or reassign it.",
    }
}

const fn assignee_message(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Waiting for your acceptance.",
        TaskStatus::InProgress => "You are working on this task.",
        TaskStatus::Completed => "Task completed and approved.",
        TaskStatus::Delayed => "Task is overdue. Submit it or report a blocker.",
        TaskStatus::Blocked => "Task is blocked. Waiting for the assigner to resolve it.",
        TaskStatus::PendingApproval => "You submitted the task. Waiting for approval.",
        TaskStatus::Rejected => "You rejected this task.",
    }
}
