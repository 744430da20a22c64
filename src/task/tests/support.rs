//! Task builders shared by the unit tests.

use crate::task::domain::{PersistedTaskData, StatusCode, Task, TaskId, UserRef};

pub fn user(id: &str) -> UserRef {
    UserRef::new(id, format!("User {id}")).with_group("g1", "Ops")
}

pub fn task_with(
    id: &str,
    status: impl Into<StatusCode>,
    assigner: Option<&str>,
    assignee: Option<&str>,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        name: format!("Task {id}"),
        description: None,
        status: status.into(),
        start_time: None,
        end_time: None,
        create_time: None,
        update_time: None,
        remark: None,
        assigner: assigner.map(user),
        assignee: assignee.map(user),
    })
}

pub fn task(id: &str, status: impl Into<StatusCode>) -> Task {
    task_with(id, status, Some("assigner"), Some("assignee"))
}

pub fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.id().as_str().to_owned()).collect()
}
