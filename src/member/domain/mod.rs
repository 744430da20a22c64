//! Domain model for member roles and assignable members.

mod assignable;
mod error;
mod role;

pub use assignable::{AssignableGroup, AssignableMember, AssigneeOption, assignable_member_options};
pub use error::ParseRoleError;
pub use role::{
    OrgRoleOption, Role, has_any_role, normalize_roles, org_role_label, org_role_options,
    org_roles_from_ids,
};
