//! Event members: roles and assignee selection.

pub mod domain;
