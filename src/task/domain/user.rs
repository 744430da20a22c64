//! User references embedded in task records.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Group membership shown next to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    /// Group identifier.
    pub id: String,
    /// Group display name.
    pub name: String,
}

/// Snapshot of a user as embedded in a task payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Groups the user belongs to within the event.
    #[serde(default)]
    pub groups: Vec<GroupRef>,
}

impl UserRef {
    /// Creates a reference with no contact details or groups.
    #[must_use]
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            groups: Vec::new(),
        }
    }

    /// Sets the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a group membership.
    #[must_use]
    pub fn with_group(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.groups.push(GroupRef {
            id: id.into(),
            name: name.into(),
        });
        self
    }
}
