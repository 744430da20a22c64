//! Then steps for event task workflow BDD scenarios.

use super::world::TaskWorkflowWorld;
use corvee::task::{
    domain::{TaskDomainError, TaskStatus},
    services::EventTaskServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world.task_id()?;
    let session = world.session_as("U1")?;
    let task = session
        .task(&task_id)
        .ok_or_else(|| eyre::eyre!("task {task_id} missing from snapshot"))?;

    if task.status() != Some(expected) {
        return Err(eyre::eyre!(
            "expected status {expected}, found code {}",
            task.status_code()
        ));
    }
    Ok(())
}

#[then(r#""{viewer}" sees the actions "{labels}""#)]
fn viewer_sees_actions(
    world: &TaskWorkflowWorld,
    viewer: String,
    labels: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let session = world.session_as(&viewer)?;
    let actual: Vec<&str> = session
        .actions_for_task(&task_id)?
        .into_iter()
        .map(|option| option.label)
        .collect();
    let expected: Vec<&str> = labels.split(',').map(str::trim).collect();

    if actual != expected {
        return Err(eyre::eyre!("expected actions {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#""{viewer}" sees no actions"#)]
fn viewer_sees_no_actions(world: &TaskWorkflowWorld, viewer: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let session = world.session_as(&viewer)?;
    let actions = session.actions_for_task(&task_id)?;

    if !actions.is_empty() {
        return Err(eyre::eyre!("expected no actions, found {actions:?}"));
    }
    Ok(())
}

#[then("the action is refused as not permitted")]
fn action_refused(world: &TaskWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_action_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing action result"))?;

    if !matches!(
        result,
        Err(EventTaskServiceError::Domain(
            TaskDomainError::ActionNotPermitted { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected ActionNotPermitted error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the personal board of "{viewer}" has no rejected lane"#)]
fn personal_board_hides_rejected(
    world: &TaskWorkflowWorld,
    viewer: String,
) -> Result<(), eyre::Report> {
    let session = world.session_as(&viewer)?;
    let lanes = session.my_lanes();
    let board = session.my_board();

    if lanes.iter().any(|lane| lane.status == TaskStatus::Rejected) {
        return Err(eyre::eyre!("rejected lane shown on personal board"));
    }
    if board.rejected.is_empty() {
        return Err(eyre::eyre!("expected the rejected task in the bucket"));
    }
    Ok(())
}
