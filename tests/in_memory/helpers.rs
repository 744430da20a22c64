//! Shared test helpers for in-memory gateway integration tests.

use std::sync::Arc;

use corvee::task::{
    adapters::memory::InMemoryEventTaskGateway,
    domain::{EventId, UserId, UserRef},
    services::EventTaskSession,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Gateway type used across the in-memory tests.
pub type TestGateway = InMemoryEventTaskGateway<DefaultClock>;

/// Organizer who creates and approves tasks.
pub const ORGANIZER: &str = "U1";
/// Staff member who executes tasks.
pub const STAFF: &str = "U2";
/// Second staff member used for reassignment.
pub const BACKUP: &str = "U3";
/// Member unrelated to any task.
pub const OBSERVER: &str = "U4";

/// Provides a gateway with four registered members and nobody signed in.
///
/// # Panics
///
/// Panics if a member cannot be registered.
#[fixture]
pub fn gateway() -> TestGateway {
    let gateway = InMemoryEventTaskGateway::new(Arc::new(DefaultClock));
    for (id, name) in [
        (ORGANIZER, "Olivia Organizer"),
        (STAFF, "Sam Staff"),
        (BACKUP, "Bea Backup"),
        (OBSERVER, "Oscar Observer"),
    ] {
        gateway
            .register_member(UserRef::new(id, name).with_group("g1", "Volunteers"))
            .expect("member registration should succeed");
    }
    gateway
}

/// Provides the event all tests operate on.
#[fixture]
pub fn event_id() -> EventId {
    EventId::new("spring-fair")
}

/// Signs `viewer` in and opens a session sharing the gateway's state.
///
/// # Panics
///
/// Panics if `viewer` is not a registered member.
pub fn session_as(
    gateway: &TestGateway,
    event_id: &EventId,
    viewer: &str,
) -> EventTaskSession<TestGateway> {
    let viewer_id = UserId::from(viewer);
    gateway
        .sign_in(&viewer_id)
        .expect("viewer should be a registered member");
    EventTaskSession::new(Arc::new(gateway.clone()), event_id.clone(), viewer_id)
}
