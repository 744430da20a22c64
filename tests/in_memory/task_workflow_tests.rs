//! Multi-user task lifecycles driven through event task sessions.

use super::helpers::{BACKUP, ORGANIZER, STAFF, TestGateway, event_id, gateway, session_as};
use corvee::task::{
    domain::{EventId, TaskAction, TaskId, TaskStatus},
    payload::{Attachment, CreateTaskInput, UpdateTaskInput},
    services::{ActionOutcome, EventTaskSession},
};
use eyre::{Result, bail, ensure, eyre};
use rstest::rstest;

async fn perform_as(
    gateway: &TestGateway,
    event_id: &EventId,
    viewer: &str,
    task_id: &TaskId,
    input: UpdateTaskInput,
) -> Result<TaskStatus> {
    let mut session = session_as(gateway, event_id, viewer);
    session.refresh().await?;
    match session.perform(task_id, input).await? {
        ActionOutcome::Updated(task) => task
            .status()
            .ok_or_else(|| eyre!("task returned with unknown status")),
        ActionOutcome::Deleted(id) => bail!("unexpected deletion of {id}"),
    }
}

async fn create_as_organizer(gateway: &TestGateway, event_id: &EventId) -> Result<TaskId> {
    let mut organizer = session_as(gateway, event_id, ORGANIZER);
    let created = organizer
        .create_task(CreateTaskInput::new("Set up registration desk", STAFF))
        .await?;
    Ok(created.id().clone())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_is_accepted_submitted_and_approved(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let task_id = create_as_organizer(&gateway, &event_id).await?;

    let accepted = perform_as(
        &gateway,
        &event_id,
        STAFF,
        &task_id,
        UpdateTaskInput::new(TaskAction::Accept),
    )
    .await?;
    ensure!(accepted == TaskStatus::InProgress, "accept moved to {accepted}");

    let submitted = perform_as(
        &gateway,
        &event_id,
        STAFF,
        &task_id,
        UpdateTaskInput::new(TaskAction::Submit)
            .with_remark("Desk ready")
            .with_files([Attachment::new("desk.jpg", vec![1_u8, 2, 3])]),
    )
    .await?;
    ensure!(
        submitted == TaskStatus::PendingApproval,
        "submit moved to {submitted}"
    );

    let approved = perform_as(
        &gateway,
        &event_id,
        ORGANIZER,
        &task_id,
        UpdateTaskInput::new(TaskAction::Approve),
    )
    .await?;
    ensure!(approved == TaskStatus::Completed, "approve moved to {approved}");

    let mut organizer = session_as(&gateway, &event_id, ORGANIZER);
    organizer.refresh().await?;
    let task = organizer
        .task(&task_id)
        .ok_or_else(|| eyre!("task missing after approval"))?;
    ensure!(task.remark() == Some("Desk ready"), "remark was not kept");
    ensure!(task.name() == "Set up registration desk", "name changed");
    let labels: Vec<&str> = organizer
        .actions_for_task(&task_id)?
        .into_iter()
        .map(|option| option.label)
        .collect();
    ensure!(labels == ["Delete"], "completed tasks only offer deletion");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_task_is_reassigned_to_backup(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let task_id = create_as_organizer(&gateway, &event_id).await?;

    let rejected = perform_as(
        &gateway,
        &event_id,
        STAFF,
        &task_id,
        UpdateTaskInput::new(TaskAction::Reject).with_remark("Out sick"),
    )
    .await?;
    ensure!(rejected == TaskStatus::Rejected, "reject moved to {rejected}");

    let reassigned = perform_as(
        &gateway,
        &event_id,
        ORGANIZER,
        &task_id,
        UpdateTaskInput::new(TaskAction::Assign).with_target_user(BACKUP),
    )
    .await?;
    ensure!(reassigned == TaskStatus::Pending, "reassign moved to {reassigned}");

    let mut backup = session_as(&gateway, &event_id, BACKUP);
    backup.refresh().await?;
    ensure!(backup.my_tasks().len() == 1, "backup should own the task");
    let labels: Vec<&str> = backup
        .actions_for_task(&task_id)?
        .into_iter()
        .map(|option| option.label)
        .collect();
    ensure!(labels == ["Accept", "Reject"], "unexpected menu {labels:?}");

    let mut staff = session_as(&gateway, &event_id, STAFF);
    staff.refresh().await?;
    ensure!(staff.my_tasks().is_empty(), "staff should no longer own the task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn boards_split_event_and_personal_views(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let first = create_as_organizer(&gateway, &event_id).await?;
    create_as_organizer(&gateway, &event_id).await?;
    perform_as(
        &gateway,
        &event_id,
        STAFF,
        &first,
        UpdateTaskInput::new(TaskAction::Reject),
    )
    .await?;

    let mut staff: EventTaskSession<TestGateway> = session_as(&gateway, &event_id, STAFF);
    staff.refresh().await?;

    let board = staff.board();
    ensure!(board.pending.len() == 1 && board.rejected.len() == 1, "event board");
    let lanes = staff.my_lanes();
    ensure!(
        lanes.iter().all(|lane| lane.status != TaskStatus::Rejected),
        "rejected lane should be hidden on the personal board"
    );
    let pending_lane = lanes
        .iter()
        .find(|lane| lane.status == TaskStatus::Pending)
        .ok_or_else(|| eyre!("pending lane missing"))?;
    ensure!(pending_lane.tasks.len() == 1, "one pending task expected");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_for_everyone(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let task_id = create_as_organizer(&gateway, &event_id).await?;

    let mut organizer = session_as(&gateway, &event_id, ORGANIZER);
    organizer.refresh().await?;
    let outcome = organizer
        .perform(&task_id, UpdateTaskInput::new(TaskAction::Delete))
        .await?;
    ensure!(outcome == ActionOutcome::Deleted(task_id.clone()), "delete outcome");

    let mut staff = session_as(&gateway, &event_id, STAFF);
    ensure!(staff.refresh().await?.is_empty(), "staff still sees the task");
    Ok(())
}
