//! Task status codes and the display registry.
//!
//! The remote API transmits task status as a bare integer. [`StatusCode`]
//! keeps that raw value so codes this crate does not know about survive a
//! round trip, while [`TaskStatus`] is the closed set the workflow engine
//! reasons about. Lookups from a raw code never fail: unknown or missing
//! codes fall back to `"Unknown"` and [`StatusStyle::NEUTRAL`].

use super::{ParseTaskStatusError, TaskAction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known task workflow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Assigned but not yet accepted by the assignee.
    Pending,
    /// Accepted and being worked on.
    InProgress,
    /// Approved by the assigner.
    Completed,
    /// Overdue: the expected end time has passed.
    Delayed,
    /// Halted by a dependency or reported issue.
    Blocked,
    /// Submitted by the assignee and awaiting the assigner's review.
    PendingApproval,
    /// Declined by the assignee.
    Rejected,
}

impl TaskStatus {
    /// Every known status in code order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Delayed,
        Self::Blocked,
        Self::PendingApproval,
        Self::Rejected,
    ];

    /// Returns the wire code for this status.
    #[must_use]
    pub const fn code(self) -> StatusCode {
        StatusCode(match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Delayed => 3,
            Self::Blocked => 4,
            Self::PendingApproval => 5,
            Self::Rejected => 6,
        })
    }

    /// Resolves a wire code, returning `None` for codes outside `0..=6`.
    #[must_use]
    pub const fn from_code(code: StatusCode) -> Option<Self> {
        match code.0 {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Completed),
            3 => Some(Self::Delayed),
            4 => Some(Self::Blocked),
            5 => Some(Self::PendingApproval),
            6 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the canonical `snake_case` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Delayed => "delayed",
            Self::Blocked => "blocked",
            Self::PendingApproval => "pending_approval",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the display text shown on badges and lane headers.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delayed => "Delayed",
            Self::Blocked => "Blocked",
            Self::PendingApproval => "Pending Approval",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the badge style for this status.
    #[must_use]
    pub const fn style(self) -> StatusStyle {
        match self {
            Self::Pending => StatusStyle {
                theme: "bg-gray-100 text-gray-700 ring-gray-500/20",
                accent: "bg-gray-500",
            },
            Self::InProgress => StatusStyle {
                theme: "bg-cyan-100 text-cyan-700 ring-cyan-500/20",
                accent: "bg-cyan-500",
            },
            Self::Completed => StatusStyle {
                theme: "bg-green-100 text-green-700 ring-green-500/20",
                accent: "bg-green-500",
            },
            Self::Delayed => StatusStyle {
                theme: "bg-orange-100 text-orange-700 ring-orange-500/20",
                accent: "bg-orange-500",
            },
            Self::Blocked => StatusStyle {
                theme: "bg-amber-100 text-amber-700 ring-amber-500/20",
                accent: "bg-amber-500",
            },
            Self::PendingApproval => StatusStyle {
                theme: "bg-blue-100 text-blue-700 ring-blue-500/20",
                accent: "bg-blue-500",
            },
            Self::Rejected => StatusStyle {
                theme: "bg-red-100 text-red-700 ring-red-500/20",
                accent: "bg-red-500",
            },
        }
    }

    /// Returns the status a task moves to when `action` is applied, or
    /// `None` when the action is not an outbound transition of this status.
    ///
    /// `Update` keeps the current status. `Delete` and `Create` never
    /// produce a status: deletion removes the task and creation does not
    /// apply to an existing one.
    #[must_use]
    pub const fn after(self, action: TaskAction) -> Option<Self> {
        match (self, action) {
            (Self::Pending, TaskAction::Accept) => Some(Self::InProgress),
            (Self::Pending, TaskAction::Reject) => Some(Self::Rejected),
            (Self::InProgress | Self::Delayed, TaskAction::Submit) => Some(Self::PendingApproval),
            (Self::InProgress | Self::Delayed, TaskAction::Block) => Some(Self::Blocked),
            (Self::PendingApproval, TaskAction::Approve) => Some(Self::Completed),
            (
                Self::Pending | Self::InProgress | Self::Delayed | Self::Blocked | Self::Rejected,
                TaskAction::Assign,
            ) => Some(Self::Pending),
            (
                Self::Pending | Self::InProgress | Self::Delayed | Self::Blocked | Self::Rejected,
                TaskAction::Update,
            ) => Some(self),
            _ => None,
        }
    }
}

impl From<TaskStatus> for StatusCode {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw status code as transmitted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(i32);

impl StatusCode {
    /// Stand-in for a missing or `null` status; outside the known set.
    pub const MISSING: Self = Self(-1);

    /// Wraps a raw code.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Resolves the code into a known status.
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        TaskStatus::from_code(self)
    }
}

impl From<i32> for StatusCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Badge styling for a status: the pill theme and the dot accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    /// Background, text and ring classes for the badge.
    pub theme: &'static str,
    /// Class for the accent dot.
    pub accent: &'static str,
}

impl StatusStyle {
    /// Style used for missing or unrecognized codes.
    pub const NEUTRAL: Self = Self {
        theme: "bg-zinc-100 text-zinc-700 ring-zinc-500/20",
        accent: "bg-zinc-500",
    };
}

/// Text rendered for missing or unrecognized codes.
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown";

/// Returns the display text for a raw code, or `"Unknown"`.
#[must_use]
pub fn status_text(code: Option<StatusCode>) -> &'static str {
    code.and_then(StatusCode::status)
        .map_or(UNKNOWN_STATUS_TEXT, TaskStatus::text)
}

/// Returns the badge style for a raw code, or [`StatusStyle::NEUTRAL`].
#[must_use]
pub fn status_style(code: Option<StatusCode>) -> StatusStyle {
    code.and_then(StatusCode::status)
        .map_or(StatusStyle::NEUTRAL, TaskStatus::style)
}
