//! Kanban board categorization.

use crate::config::BoardConfig;
use crate::task::domain::{StatusStyle, Task, TaskStatus};

/// Tasks grouped by status, each bucket in input order.
///
/// Tasks with an unrecognized status code are left out of every bucket;
/// the caller keeps the full collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardBuckets<'a> {
    /// Tasks awaiting acceptance.
    pub pending: Vec<&'a Task>,
    /// Tasks being worked on.
    pub progress: Vec<&'a Task>,
    /// Approved tasks.
    pub completed: Vec<&'a Task>,
    /// Overdue tasks.
    pub delayed: Vec<&'a Task>,
    /// Blocked tasks.
    pub blocked: Vec<&'a Task>,
    /// Submitted tasks awaiting review.
    pub pending_approval: Vec<&'a Task>,
    /// Declined tasks.
    pub rejected: Vec<&'a Task>,
}

impl<'a> BoardBuckets<'a> {
    /// Returns the bucket holding `status`.
    #[must_use]
    pub fn bucket(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.progress,
            TaskStatus::Completed => &self.completed,
            TaskStatus::Delayed => &self.delayed,
            TaskStatus::Blocked => &self.blocked,
            TaskStatus::PendingApproval => &self.pending_approval,
            TaskStatus::Rejected => &self.rejected,
        }
    }

    fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.progress,
            TaskStatus::Completed => &mut self.completed,
            TaskStatus::Delayed => &mut self.delayed,
            TaskStatus::Blocked => &mut self.blocked,
            TaskStatus::PendingApproval => &mut self.pending_approval,
            TaskStatus::Rejected => &mut self.rejected,
        }
    }

    /// Total number of categorized tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        TaskStatus::ALL
            .into_iter()
            .map(|status| self.bucket(status).len())
            .sum()
    }

    /// Returns `true` when no task was categorized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lays the buckets out as board lanes in status order.
    #[must_use]
    pub fn lanes(&self, config: &BoardConfig) -> Vec<BoardLane<'a>> {
        TaskStatus::ALL
            .into_iter()
            .filter(|status| *status != TaskStatus::Rejected || config.show_rejected_lane)
            .map(|status| BoardLane {
                status,
                title: status.text(),
                description: lane_description(status),
                style: status.style(),
                tasks: self.bucket(status).to_vec(),
            })
            .filter(|lane| !(config.hide_empty_lanes && lane.tasks.is_empty()))
            .collect()
    }
}

/// One rendered column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLane<'a> {
    /// Status the lane collects.
    pub status: TaskStatus,
    /// Lane header.
    pub title: &'static str,
    /// Lane tooltip.
    pub description: &'static str,
    /// Header style.
    pub style: StatusStyle,
    /// Tasks in the lane.
    pub tasks: Vec<&'a Task>,
}

/// Partitions `tasks` into status buckets.
#[must_use]
pub fn categorize<'a, I>(tasks: I) -> BoardBuckets<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut buckets = BoardBuckets::default();
    for task in tasks {
        if let Some(status) = task.status() {
            buckets.bucket_mut(status).push(task);
        }
    }
    buckets
}

/// Returns the explanatory text shown under a lane header.
#[must_use]
pub const fn lane_description(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Task has been assigned but the assignee has not accepted yet.",
        TaskStatus::InProgress => "Task is currently being worked on by the assignee.",
        TaskStatus::Completed => "Task is finished and verified by the assigner.",
        TaskStatus::Delayed => "Task is overdue and has missed the expected end time.",
        TaskStatus::Blocked => "Task cannot proceed due to a dependency or pending issue.",
        TaskStatus::PendingApproval => {
            "Assignee has submitted the task for review. Waiting for approval."
        }
        TaskStatus::Rejected => "Task was rejected by the assignee.",
    }
}
