//! Game-level error types.

use bc_core::{Move, NotationError};
use bc_net::NetError;
use bc_shannon::RankError;
use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

/// Errors from the game surface and move sources.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("Move {mv} has already been played")]
    MoveReplayed { mv: Move },

    #[error("The game is already over")]
    GameOver,

    #[error("No untried moves remain")]
    NoMovesLeft,

    #[error("Input closed before a move was chosen")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
