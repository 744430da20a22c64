//! When steps for event task workflow BDD scenarios.

use super::world::{TaskWorkflowWorld, run_async};
use corvee::task::{domain::TaskAction, payload::UpdateTaskInput};
use rstest_bdd_macros::when;

#[when(r#""{viewer}" performs "{action}" on the task"#)]
fn perform_action(
    world: &mut TaskWorkflowWorld,
    viewer: String,
    action: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskAction::try_from(action.as_str())
        .map_err(|err| eyre::eyre!("invalid action in scenario: {err}"))?;
    let task_id = world.task_id()?;
    let mut session = world.session_as(&viewer)?;

    let result = run_async(session.perform(&task_id, UpdateTaskInput::new(parsed)));
    world.last_action_result = Some(result);
    Ok(())
}
