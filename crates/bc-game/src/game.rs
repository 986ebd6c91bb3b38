//! Game state and win conditions.

use std::fmt;

use bc_core::{Move, NotationError, move_to_edge, valid_moves};
use bc_net::{Birdcage, NetError};

use crate::error::{GameError, GameResult};

/// The two players. White cuts connections, black shorts them; white moves
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A game in progress: the birdcage engine plus the move history.
#[derive(Debug, Clone)]
pub struct Game {
    size: usize,
    cage: Birdcage,
    played: Vec<Move>,
}

impl Game {
    pub fn new(size: usize) -> GameResult<Self> {
        Ok(Self {
            size,
            cage: Birdcage::new(size)?,
            played: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cage(&self) -> &Birdcage {
        &self.cage
    }

    pub fn played(&self) -> &[Move] {
        &self.played
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Side {
        if self.played.len() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Untried valid moves, ordered by column then row.
    pub fn untried_moves(&self) -> Vec<Move> {
        valid_moves(self.size)
            .into_iter()
            .filter(|m| !self.played.contains(m))
            .collect()
    }

    /// Apply the side-to-move's move: a cut for white, a short for black.
    ///
    /// The move must be valid and untried; `untried_moves` is the
    /// authoritative source of what can be played. A move whose connection
    /// has already dissolved through earlier merges and cuts still claims
    /// its position, with no further electrical effect.
    pub fn apply(&mut self, mv: Move) -> GameResult<()> {
        if self.winner().is_some() {
            return Err(GameError::GameOver);
        }
        if !mv.is_valid(self.size) {
            return Err(NotationError::InvalidMove {
                text: mv.to_string(),
            }
            .into());
        }
        if self.played.contains(&mv) {
            return Err(GameError::MoveReplayed { mv });
        }
        let (u, v) = move_to_edge(mv, self.size)?;
        let applied = match self.to_move() {
            Side::White => self.cage.cut(u, v),
            Side::Black => self.cage.short(u, v),
        };
        match applied {
            Ok(()) | Err(NetError::EdgeNotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
        self.played.push(mv);
        Ok(())
    }

    /// The winner, if the game has been decided.
    ///
    /// Black wins once a zero-resistance path joins the terminals (they
    /// have merged); white wins once no path joins them at all.
    pub fn winner(&self) -> Option<Side> {
        if self.cage.terminals_merged() {
            Some(Side::Black)
        } else if !self.cage.has_terminal_path() {
            Some(Side::White)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn turn_alternation() {
        let mut game = Game::new(3).unwrap();
        assert_eq!(game.to_move(), Side::White);
        game.apply(mv("A1")).unwrap();
        assert_eq!(game.to_move(), Side::Black);
        game.apply(mv("C3")).unwrap();
        assert_eq!(game.to_move(), Side::White);
        assert_eq!(game.played(), &[mv("A1"), mv("C3")]);
    }

    #[test]
    fn invalid_and_replayed_moves_rejected() {
        let mut game = Game::new(3).unwrap();
        assert!(matches!(
            game.apply(mv("A2")),
            Err(GameError::Notation(NotationError::InvalidMove { .. }))
        ));
        assert!(matches!(
            game.apply(mv("F2")),
            Err(GameError::Notation(NotationError::InvalidMove { .. }))
        ));
        game.apply(mv("A1")).unwrap();
        assert!(matches!(
            game.apply(mv("A1")),
            Err(GameError::MoveReplayed { .. })
        ));
        // The failed applications changed nothing.
        assert_eq!(game.played(), &[mv("A1")]);
    }

    #[test]
    fn untried_moves_shrink() {
        let mut game = Game::new(3).unwrap();
        assert_eq!(game.untried_moves().len(), 13);
        game.apply(mv("C1")).unwrap();
        let untried = game.untried_moves();
        assert_eq!(untried.len(), 12);
        assert!(!untried.contains(&mv("C1")));
    }

    #[test]
    fn side_other() {
        assert_eq!(Side::White.other(), Side::Black);
        assert_eq!(Side::Black.other(), Side::White);
    }
}
