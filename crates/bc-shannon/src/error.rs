//! Error types for move ranking.

use bc_core::{NodeId, NotationError};
use bc_solver::SolverError;
use thiserror::Error;

pub type RankResult<T> = Result<T, RankError>;

/// Errors that can occur while ranking moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Notation error: {0}")]
    Notation(#[from] NotationError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// A resolved candidate endpoint had no solved voltage. Should not
    /// happen for nodes of the working network.
    #[error("No voltage for node {node}")]
    MissingVoltage { node: NodeId },
}
