//! Transport envelopes for task create and update submissions.

mod builders;
mod envelope;

pub use builders::{
    CreateTaskInput, LOCAL_DATETIME_FORMAT, UpdateTaskInput, build_create_payload,
    build_update_payload, fields, format_local_datetime, wall_clock,
};
pub use envelope::{Attachment, FormField, FormPayload, FormValue};
