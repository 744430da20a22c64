//! Application services for event task orchestration.

mod session;

pub use session::{
    ActionOutcome, EventTaskServiceError, EventTaskServiceResult, EventTaskSession,
};
