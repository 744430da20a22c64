//! Gateway-level checks on payload validation and workflow enforcement.

use super::helpers::{OBSERVER, ORGANIZER, STAFF, TestGateway, event_id, gateway};
use corvee::task::{
    domain::{EventId, TaskAction, TaskDomainError, TaskId, TaskStatus, UserId},
    payload::{
        CreateTaskInput, FormPayload, UpdateTaskInput, build_create_payload,
        build_update_payload, fields,
    },
    ports::{EventTaskGateway, EventTaskGatewayError},
};
use chrono::NaiveDate;
use eyre::{Result, ensure, eyre};
use rstest::rstest;

async fn seed_task(gateway: &TestGateway, event_id: &EventId) -> Result<TaskId> {
    gateway.sign_in(&UserId::from(ORGANIZER))?;
    let task = gateway
        .create_task(
            event_id,
            build_create_payload(
                CreateTaskInput::new("Hang banners", STAFF).with_description("Main hall"),
            ),
        )
        .await?;
    Ok(task.id().clone())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_requires_signed_in_user(gateway: TestGateway, event_id: EventId) {
    let result = gateway
        .create_task(
            &event_id,
            build_create_payload(CreateTaskInput::new("Hang banners", STAFF)),
        )
        .await;

    assert!(matches!(result, Err(EventTaskGatewayError::Unauthenticated)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_missing_name(gateway: TestGateway, event_id: EventId) -> Result<()> {
    gateway.sign_in(&UserId::from(ORGANIZER))?;
    let mut payload = FormPayload::new();
    payload.append_text(fields::TARGET_USER_ID, STAFF);

    let result = gateway.create_task(&event_id, payload).await;

    ensure!(
        matches!(result, Err(EventTaskGatewayError::Rejected(_))),
        "expected rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_stores_assigner_from_session(gateway: TestGateway, event_id: EventId) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;

    let tasks = gateway.list_tasks(&event_id).await?;
    let task = tasks
        .iter()
        .find(|task| task.id() == &task_id)
        .ok_or_else(|| eyre!("created task not listed"))?;
    ensure!(task.is_assigned_by(&UserId::from(ORGANIZER)), "assigner");
    ensure!(task.is_assigned_to(&UserId::from(STAFF)), "assignee");
    ensure!(task.status() == Some(TaskStatus::Pending), "initial status");
    ensure!(task.description() == Some("Main hall"), "description");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_non_update_action_codes(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;
    let mut payload = FormPayload::new();
    payload.append_text(fields::NAME, "Hang banners");
    payload.append_text(fields::ACTION_TYPE, "1");

    let result = gateway.update_task(&event_id, &task_id, payload).await;

    ensure!(
        matches!(result, Err(EventTaskGatewayError::Rejected(_))),
        "expected rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn observers_cannot_act(gateway: TestGateway, event_id: EventId) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;
    gateway.sign_in(&UserId::from(OBSERVER))?;

    let result = gateway
        .update_task(
            &event_id,
            &task_id,
            build_update_payload(UpdateTaskInput::new(TaskAction::Accept).with_name("Hang banners")),
        )
        .await;

    ensure!(
        matches!(
            result,
            Err(EventTaskGatewayError::Domain(
                TaskDomainError::ActionNotPermitted { .. }
            ))
        ),
        "expected refusal, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_action_edits_details_and_keeps_status(
    gateway: TestGateway,
    event_id: EventId,
) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;
    let start = NaiveDate::from_ymd_opt(2025, 4, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .ok_or_else(|| eyre!("valid start time"))?;

    let updated = gateway
        .update_task(
            &event_id,
            &task_id,
            build_update_payload(
                UpdateTaskInput::new(TaskAction::Update)
                    .with_name("Hang banners and flags")
                    .with_description("")
                    .with_start_time(start),
            ),
        )
        .await?;

    ensure!(updated.name() == "Hang banners and flags", "name");
    ensure!(updated.description() == Some(""), "description");
    ensure!(updated.start_time() == Some(start), "start time");
    ensure!(updated.status() == Some(TaskStatus::Pending), "status");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_to_unknown_user_fails(gateway: TestGateway, event_id: EventId) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;

    let result = gateway
        .update_task(
            &event_id,
            &task_id,
            build_update_payload(
                UpdateTaskInput::new(TaskAction::Assign)
                    .with_name("Hang banners")
                    .with_target_user("ghost"),
            ),
        )
        .await;

    ensure!(
        matches!(result, Err(EventTaskGatewayError::UnknownUser(_))),
        "expected unknown user, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_cannot_delete(gateway: TestGateway, event_id: EventId) -> Result<()> {
    let task_id = seed_task(&gateway, &event_id).await?;
    gateway.sign_in(&UserId::from(STAFF))?;

    let result = gateway.delete_task(&event_id, &task_id).await;

    ensure!(
        matches!(result, Err(EventTaskGatewayError::Domain(_))),
        "expected refusal, got {result:?}"
    );
    ensure!(gateway.list_tasks(&event_id).await?.len() == 1, "task kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_reported(gateway: TestGateway, event_id: EventId) -> Result<()> {
    gateway.sign_in(&UserId::from(ORGANIZER))?;

    let result = gateway.delete_task(&event_id, &TaskId::new("missing")).await;

    ensure!(
        matches!(result, Err(EventTaskGatewayError::TaskNotFound { .. })),
        "expected not found, got {result:?}"
    );
    Ok(())
}
