//! System and organisation member roles.
//!
//! The API reports roles either as numeric ids (`"1"`..`"4"`) or as role
//! names, sometimes comma-joined in a single string. Organisation
//! membership uses the same ids minus the administrator.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Console role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// System administrator.
    Admin,
    /// Event organizer.
    Organizer,
    /// Staff member.
    Staff,
    /// Manager.
    Manager,
}

/// Organisation role ids in display order.
const ORG_ROLES: [(&str, Role); 3] = [
    ("2", Role::Organizer),
    ("3", Role::Staff),
    ("4", Role::Manager),
];

impl Role {
    /// Every role.
    pub const ALL: [Self; 4] = [Self::Admin, Self::Organizer, Self::Staff, Self::Manager];

    /// Returns the upper-case role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Organizer => "ORGANIZER",
            Self::Staff => "STAFF",
            Self::Manager => "MANAGER",
        }
    }

    /// Resolves a system role id.
    #[must_use]
    pub fn from_system_id(id: &str) -> Option<Self> {
        match id {
            "1" => Some(Self::Admin),
            "2" => Some(Self::Organizer),
            "3" => Some(Self::Staff),
            "4" => Some(Self::Manager),
            _ => None,
        }
    }

    /// Resolves an organisation role id. Administrators are not
    /// organisation roles.
    #[must_use]
    pub fn from_org_id(id: &str) -> Option<Self> {
        ORG_ROLES
            .into_iter()
            .find(|(org_id, _)| *org_id == id)
            .map(|(_, role)| role)
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ParseRoleError(value.to_owned()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes role tokens reported for a profile.
///
/// Each input may hold a comma-separated list. Tokens are trimmed and
/// resolved as system ids first, then as case-insensitive names; unknown
/// tokens are dropped. The result keeps first-occurrence order without
/// duplicates.
#[must_use]
pub fn normalize_roles<S: AsRef<str>>(inputs: &[S]) -> Vec<Role> {
    let tokens = inputs
        .iter()
        .flat_map(|input| input.as_ref().split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let mut roles = Vec::new();
    for token in tokens {
        let resolved = Role::from_system_id(token).or_else(|| Role::try_from(token).ok());
        if let Some(role) = resolved {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
    }
    roles
}

/// Returns `true` when the user holds any of `needed`.
#[must_use]
pub fn has_any_role(user_roles: &[Role], needed: &[Role]) -> bool {
    user_roles.iter().any(|role| needed.contains(role))
}

/// Maps organisation role ids to roles, dropping unknown ids and
/// duplicates.
#[must_use]
pub fn org_roles_from_ids<S: AsRef<str>>(ids: &[S]) -> Vec<Role> {
    let mut roles = Vec::new();
    for role in ids.iter().filter_map(|id| Role::from_org_id(id.as_ref())) {
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

/// Returns the role name for an organisation role id, or `UNKNOWN(<id>)`.
#[must_use]
pub fn org_role_label(id: &str) -> String {
    Role::from_org_id(id).map_or_else(|| format!("UNKNOWN({id})"), |role| role.as_str().to_owned())
}

/// Organisation role entry for select inputs, keeping the string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrgRoleOption {
    /// Role id as sent to the API.
    pub id: &'static str,
    /// Role shown to the user.
    pub role: Role,
}

/// Organisation role options in id order.
#[must_use]
pub fn org_role_options() -> Vec<OrgRoleOption> {
    ORG_ROLES
        .into_iter()
        .map(|(id, role)| OrgRoleOption { id, role })
        .collect()
}
