//! Board topology builder.

use bc_core::{move_to_edge, valid_moves, whole};

use crate::error::{NetError, NetResult};
use crate::graph::Network;

/// Smallest playable board.
pub const MIN_BOARD: usize = 2;

/// Largest board with single-letter column labels.
pub const MAX_BOARD: usize = 13;

/// Build the full resistor network for a board of the given size: one unit
/// resistor per valid move, top-rank junctions joined to `Source` and
/// bottom-rank junctions to `Ground`. Deterministic given `size`.
pub fn board(size: usize) -> NetResult<Network> {
    if !(MIN_BOARD..=MAX_BOARD).contains(&size) {
        return Err(NetError::InvalidConfiguration { size });
    }
    let mut net = Network::new();
    for mv in valid_moves(size) {
        let (u, v) = move_to_edge(mv, size)?;
        net.add_resistor(u, v, whole(1))?;
    }
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::NodeId;

    #[test]
    fn rejects_bad_sizes() {
        for size in [0, 1, 14, 100] {
            assert!(matches!(
                board(size),
                Err(NetError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn base_board_shape() {
        let net = board(3).unwrap();
        // 6 junctions + Source + Ground, one edge per valid move.
        assert_eq!(net.node_count(), 8);
        assert_eq!(net.edge_count(), 13);
        assert!(net.contains_node(NodeId::Source));
        assert!(net.contains_node(NodeId::Ground));
        for (_, _, r) in net.edges() {
            assert_eq!(r, &whole(1));
        }
        // Each terminal touches one column top/bottom edge per column.
        assert_eq!(net.neighbors(NodeId::Source).count(), 3);
        assert_eq!(net.neighbors(NodeId::Ground).count(), 3);
    }

    #[test]
    fn node_and_edge_counts_scale() {
        for size in MIN_BOARD..=6 {
            let net = board(size).unwrap();
            assert_eq!(net.node_count(), size * (size - 1) + 2);
            assert_eq!(net.edge_count(), size * size + (size - 1) * (size - 1));
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(board(4).unwrap(), board(4).unwrap());
    }
}
