//! Plan errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for plan operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised while building or mutating a Plan.
///
/// A failed operation never leaves the Plan partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlanError {
    #[error("unknown container: {0}")]
    UnknownContainer(String),

    #[error("index {index} out of range for container {container} (len {len})")]
    SourceIndexOutOfRange {
        container: String,
        index: usize,
        len: usize,
    },

    #[error("duplicate container id: {0}")]
    DuplicateContainer(String),

    #[error("location {item} is held by both {first} and {second}")]
    DuplicateItem {
        item: String,
        first: String,
        second: String,
    },
}
