//! "My tasks" and "my assigned tasks" selections.
//!
//! Both filters keep input order and never match a task whose assignee or
//! assigner reference is missing.

use crate::task::domain::{Task, UserId};

/// Tasks assigned to `user`.
#[must_use]
pub fn my_tasks<'a, I>(tasks: I, user: &UserId) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.is_assigned_to(user))
        .collect()
}

/// Tasks `user` assigned to someone.
#[must_use]
pub fn my_assigned_tasks<'a, I>(tasks: I, user: &UserId) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.is_assigned_by(user))
        .collect()
}
