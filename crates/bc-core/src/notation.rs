//! Board moves and their translation to resistor-network edges.
//!
//! A move is written as a column letter and a row number (`A3`). On a board
//! of size `M`, both numeric coordinates lie in `1..2M-1` and their sum is
//! even: valid moves are the grid points of one sublattice. Every valid
//! move corresponds to exactly one edge of the birdcage network, with the
//! top rank collapsed into [`NodeId::Source`] and the bottom rank into
//! [`NodeId::Ground`].

use std::fmt;
use std::str::FromStr;

use crate::error::{NotationError, NotationResult};
use crate::node::NodeId;

/// A board move in numeric coordinates (`col` 1-based from `A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub col: u8,
    pub row: u8,
}

impl Move {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Check validity on a board of the given size: both coordinates in
    /// `1..2M-1`, coordinate sum even.
    pub fn is_valid(self, size: usize) -> bool {
        let hi = 2 * size as u8;
        0 < self.col && self.col < hi && 0 < self.row && self.row < hi
            && (self.col + self.row) % 2 == 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col - 1) as char, self.row)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidMove { text: s.into() };
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let col = (letter.to_ascii_uppercase() as u8) - b'A' + 1;
        let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Ok(Move::new(col, row))
    }
}

/// All valid moves on a board of the given size, ordered by column then row.
pub fn valid_moves(size: usize) -> Vec<Move> {
    let hi = 2 * size as u8;
    let mut moves = Vec::new();
    for col in 1..hi {
        for row in 1..hi {
            let mv = Move::new(col, row);
            if mv.is_valid(size) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Check that a node is one the board of the given size actually contains.
fn is_board_node(n: NodeId, size: usize) -> bool {
    let hi = 2 * size as u8;
    match n {
        NodeId::Ground | NodeId::Source => true,
        NodeId::Junction { col, row } => {
            col % 2 == 1 && row % 2 == 0 && 0 < col && col < hi && 0 < row && row < hi
        }
    }
}

/// Translate a move to the network edge it plays on.
///
/// Even columns are horizontal edges between neighboring junctions; odd
/// columns are vertical edges, with rows 1 and `2M-1` reaching Ground and
/// Source respectively. Endpoints are returned in ascending [`NodeId`]
/// order.
pub fn move_to_edge(mv: Move, size: usize) -> NotationResult<(NodeId, NodeId)> {
    if !mv.is_valid(size) {
        return Err(NotationError::InvalidMove {
            text: mv.to_string(),
        });
    }
    let top = 2 * size as u8 - 1;
    let edge = if mv.col % 2 == 0 {
        (
            NodeId::junction(mv.col - 1, mv.row),
            NodeId::junction(mv.col + 1, mv.row),
        )
    } else if mv.row == 1 {
        (NodeId::Ground, NodeId::junction(mv.col, 2))
    } else if mv.row == top {
        (NodeId::junction(mv.col, top - 1), NodeId::Source)
    } else {
        (
            NodeId::junction(mv.col, mv.row - 1),
            NodeId::junction(mv.col, mv.row + 1),
        )
    };
    Ok(edge)
}

/// Translate a network edge back to the move that plays on it.
///
/// Inverse of [`move_to_edge`] for all valid moves, accepting endpoints in
/// either order. Pairs that are not a canonical board edge fail with
/// [`NotationError::InvalidEdge`].
pub fn edge_to_move(u: NodeId, v: NodeId, size: usize) -> NotationResult<Move> {
    let (u, v) = if u <= v { (u, v) } else { (v, u) };
    let invalid = || NotationError::InvalidEdge { u, v };
    if u == v || !is_board_node(u, size) || !is_board_node(v, size) {
        return Err(invalid());
    }
    let top = 2 * size as u8 - 1;
    match (u, v) {
        (NodeId::Ground, NodeId::Source) => Err(invalid()),
        (NodeId::Ground, NodeId::Junction { col, row }) => {
            if row == 2 {
                Ok(Move::new(col, 1))
            } else {
                Err(invalid())
            }
        }
        (NodeId::Junction { col, row }, NodeId::Source) => {
            if row == top - 1 {
                Ok(Move::new(col, top))
            } else {
                Err(invalid())
            }
        }
        (NodeId::Junction { col: c1, row: r1 }, NodeId::Junction { col: c2, row: r2 }) => {
            if c1 == c2 && r2 == r1 + 2 {
                Ok(Move::new(c1, r1 + 1))
            } else if r1 == r2 && c2 == c1 + 2 {
                Ok(Move::new(c1 + 1, r1))
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_move() -> impl Strategy<Value = (usize, Move)> {
        (2usize..=8)
            .prop_flat_map(|size| {
                let count = valid_moves(size).len();
                (Just(size), 0..count)
            })
            .prop_map(|(size, i)| (size, valid_moves(size)[i]))
    }

    proptest! {
        #[test]
        fn round_trip_either_order((size, m) in arb_move()) {
            let (u, v) = move_to_edge(m, size).unwrap();
            prop_assert_eq!(edge_to_move(u, v, size).unwrap(), m);
            prop_assert_eq!(edge_to_move(v, u, size).unwrap(), m);
        }

        #[test]
        fn edge_endpoints_are_board_nodes((size, m) in arb_move()) {
            let (u, v) = move_to_edge(m, size).unwrap();
            prop_assert!(u < v);
            prop_assert!(is_board_node(u, size));
            prop_assert!(is_board_node(v, size));
        }
    }
}
