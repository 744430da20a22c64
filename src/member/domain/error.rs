//! Error types for member role parsing.

use thiserror::Error;

/// Error returned while parsing a role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
