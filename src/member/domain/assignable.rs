//! Assignee options for the task creation and reassignment forms.

use crate::task::domain::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Member that may be assigned tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignableMember {
    /// Member identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
}

/// Event group with its assignable members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignableGroup {
    /// Group identifier.
    pub id: String,
    /// Group display name.
    pub name: String,
    /// Members of the group.
    #[serde(default)]
    pub members: Vec<AssignableMember>,
}

/// Entry of the assignee select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeOption {
    /// Member identifier.
    pub id: UserId,
    /// `"username (Group)"` label.
    pub label: String,
}

/// Flattens groups into assignee options.
///
/// A member listed in several groups appears once, labelled with the
/// first group that lists them.
#[must_use]
pub fn assignable_member_options(groups: &[AssignableGroup]) -> Vec<AssigneeOption> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|group| group.members.iter().map(move |member| (group, member)))
        .filter(|(_, member)| seen.insert(member.id.clone()))
        .map(|(group, member)| AssigneeOption {
            id: member.id.clone(),
            label: format!("{} ({})", member.username, group.name),
        })
        .collect()
}
