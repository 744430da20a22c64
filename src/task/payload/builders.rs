//! Create and update payload builders.
//!
//! Required fields are always written. Optional fields are written only
//! when present: `None` means "leave out", while `Some(String::new())` is
//! sent as an empty value. Schedule times are written from their local
//! wall-clock components and are never converted to UTC.

use super::{Attachment, FormPayload};
use crate::task::domain::{TaskAction, UserId};
use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Form field names understood by the task endpoints.
pub mod fields {
    /// Task name.
    pub const NAME: &str = "name";
    /// Assignee identifier.
    pub const TARGET_USER_ID: &str = "targetUserId";
    /// Task description.
    pub const DESCRIPTION: &str = "description";
    /// Free-text remark attached to the submission.
    pub const REMARK: &str = "remark";
    /// Scheduled start.
    pub const START_TIME: &str = "startTime";
    /// Scheduled end.
    pub const END_TIME: &str = "endTime";
    /// Attachment part, repeated per file.
    pub const FILES: &str = "files";
    /// Action code of an update submission.
    pub const ACTION_TYPE: &str = "type";
}

/// Wire format for schedule times.
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a wall-clock time as `YYYY-MM-DDTHH:mm:ss`.
#[must_use]
pub fn format_local_datetime(value: NaiveDateTime) -> String {
    value.format(LOCAL_DATETIME_FORMAT).to_string()
}

/// Extracts the wall-clock components of a zoned time.
#[must_use]
pub fn wall_clock<Tz: TimeZone>(value: &DateTime<Tz>) -> NaiveDateTime {
    value.naive_local()
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    name: String,
    target_user_id: UserId,
    description: Option<String>,
    remark: Option<String>,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    files: Vec<Attachment>,
}

impl CreateTaskInput {
    /// Creates an input with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, target_user_id: impl Into<UserId>) -> Self {
        Self {
            name: name.into(),
            target_user_id: target_user_id.into(),
            description: None,
            remark: None,
            start_time: None,
            end_time: None,
            files: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the remark.
    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the scheduled end.
    #[must_use]
    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Adds attachments.
    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = Attachment>) -> Self {
        self.files.extend(files);
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the assignee identifier.
    #[must_use]
    pub const fn target_user_id(&self) -> &UserId {
        &self.target_user_id
    }
}

/// Input for an update-style action submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskInput {
    action: TaskAction,
    name: Option<String>,
    target_user_id: Option<UserId>,
    description: Option<String>,
    remark: Option<String>,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    files: Vec<Attachment>,
}

impl UpdateTaskInput {
    /// Creates an input for `action` with every optional field absent.
    #[must_use]
    pub const fn new(action: TaskAction) -> Self {
        Self {
            action,
            name: None,
            target_user_id: None,
            description: None,
            remark: None,
            start_time: None,
            end_time: None,
            files: Vec::new(),
        }
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the task name unless one is already present.
    #[must_use]
    pub fn or_name(mut self, name: impl Into<String>) -> Self {
        if self.name.is_none() {
            self.name = Some(name.into());
        }
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_target_user(mut self, target_user_id: impl Into<UserId>) -> Self {
        self.target_user_id = Some(target_user_id.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the remark.
    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the scheduled end.
    #[must_use]
    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Adds attachments.
    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = Attachment>) -> Self {
        self.files.extend(files);
        self
    }

    /// Returns the submitted action.
    #[must_use]
    pub const fn action(&self) -> TaskAction {
        self.action
    }

    /// Returns the task name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the assignee, if set.
    #[must_use]
    pub const fn target_user_id(&self) -> Option<&UserId> {
        self.target_user_id.as_ref()
    }

    /// Returns `true` when attachments were added.
    #[must_use]
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Serializes a create input.
#[must_use]
pub fn build_create_payload(input: CreateTaskInput) -> FormPayload {
    let mut form = FormPayload::new();
    form.append_text(fields::NAME, input.name);
    form.append_text(fields::TARGET_USER_ID, input.target_user_id.as_str());
    append_optional_fields(
        &mut form,
        OptionalFields {
            description: input.description,
            remark: input.remark,
            start_time: input.start_time,
            end_time: input.end_time,
            files: input.files,
        },
    );
    form
}

/// Serializes an update input, including the action `type` field.
#[must_use]
pub fn build_update_payload(input: UpdateTaskInput) -> FormPayload {
    let mut form = FormPayload::new();
    if let Some(name) = input.name {
        form.append_text(fields::NAME, name);
    }
    form.append_text(fields::ACTION_TYPE, input.action.code().to_string());
    if let Some(target) = input.target_user_id {
        form.append_text(fields::TARGET_USER_ID, target.as_str());
    }
    append_optional_fields(
        &mut form,
        OptionalFields {
            description: input.description,
            remark: input.remark,
            start_time: input.start_time,
            end_time: input.end_time,
            files: input.files,
        },
    );
    form
}

struct OptionalFields {
    description: Option<String>,
    remark: Option<String>,
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    files: Vec<Attachment>,
}

fn append_optional_fields(form: &mut FormPayload, optional: OptionalFields) {
    if let Some(description) = optional.description {
        form.append_text(fields::DESCRIPTION, description);
    }
    if let Some(remark) = optional.remark {
        form.append_text(fields::REMARK, remark);
    }
    if let Some(start_time) = optional.start_time {
        form.append_text(fields::START_TIME, format_local_datetime(start_time));
    }
    if let Some(end_time) = optional.end_time {
        form.append_text(fields::END_TIME, format_local_datetime(end_time));
    }
    for file in optional.files {
        form.append_file(fields::FILES, file);
    }
}
