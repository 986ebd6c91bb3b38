//! Error types for solver operations.

use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

/// Errors that can occur while solving a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The conductance system is singular: part of the network has no
    /// resistive path to a terminal and pull-ups are disabled.
    #[error("Disconnected network: no resistive path to a terminal")]
    DisconnectedNetwork,

    #[error("Solver setup error: {what}")]
    Setup { what: String },
}
