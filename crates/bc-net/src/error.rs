//! Network-specific error types.

use bc_core::{NodeId, NotationError};
use thiserror::Error;

pub type NetResult<T> = Result<T, NetError>;

/// Errors from network construction and mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("Invalid board size: {size} (expected {min}..={max})", min = crate::topology::MIN_BOARD, max = crate::topology::MAX_BOARD)]
    InvalidConfiguration { size: usize },

    #[error("No edge between {u} and {v}")]
    EdgeNotFound { u: NodeId, v: NodeId },

    #[error("Node {node} is not in the network")]
    NodeNotFound { node: NodeId },

    #[error("Self-edge at {node}")]
    SelfLoop { node: NodeId },

    #[error("Negative resistance on edge ({u}, {v})")]
    NegativeResistance { u: NodeId, v: NodeId },

    #[error(transparent)]
    Notation(#[from] NotationError),
}
