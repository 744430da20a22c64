//! Shared world state for event task workflow BDD scenarios.

use std::sync::Arc;

use corvee::task::{
    adapters::memory::InMemoryEventTaskGateway,
    domain::{EventId, TaskId, UserId},
    services::{ActionOutcome, EventTaskServiceResult, EventTaskSession},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Gateway type used by the BDD world.
pub type TestGateway = InMemoryEventTaskGateway<DefaultClock>;

/// Scenario world for event task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub gateway: TestGateway,
    pub event_id: EventId,
    pub task_id: Option<TaskId>,
    pub last_action_result: Option<EventTaskServiceResult<ActionOutcome>>,
}

impl TaskWorkflowWorld {
    /// Creates a world with an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateway: InMemoryEventTaskGateway::new(Arc::new(DefaultClock)),
            event_id: EventId::new("scenario-event"),
            task_id: None,
            last_action_result: None,
        }
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }

    /// Signs `viewer` in and opens a refreshed session on their behalf.
    ///
    /// # Errors
    ///
    /// Returns an error when sign-in or the refresh fails.
    pub fn session_as(
        &self,
        viewer: &str,
    ) -> Result<EventTaskSession<TestGateway>, eyre::Report> {
        let viewer_id = UserId::from(viewer);
        self.gateway.sign_in(&viewer_id)?;
        let mut session = EventTaskSession::new(
            Arc::new(self.gateway.clone()),
            self.event_id.clone(),
            viewer_id,
        );
        run_async(session.refresh())?;
        Ok(session)
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
