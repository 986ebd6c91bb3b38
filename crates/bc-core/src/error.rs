use thiserror::Error;

use crate::node::NodeId;

pub type NotationResult<T> = Result<T, NotationError>;

/// Errors from move notation and move↔edge translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid move: {text}")]
    InvalidMove { text: String },

    #[error("Invalid edge: ({u}, {v})")]
    InvalidEdge { u: NodeId, v: NodeId },
}
