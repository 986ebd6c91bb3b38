//! The mutable resistor-network engine.

use std::collections::BTreeMap;

use bc_core::NodeId;
use tracing::debug;

use crate::error::{NetError, NetResult};
use crate::graph::Network;
use crate::topology;

/// The birdcage: an immutable original network, the working copy mutated by
/// game moves, and the alias map from merged-away nodes to their surviving
/// representatives.
///
/// One player's move removes an edge (`cut`), the other's merges two nodes
/// (`short`). The alias map is kept flat: every recorded alias points
/// directly at a live node, so resolution is a single lookup no matter how
/// many merges have happened.
#[derive(Debug, Clone)]
pub struct Birdcage {
    size: usize,
    original: Network,
    working: Network,
    aliases: BTreeMap<NodeId, NodeId>,
}

impl Birdcage {
    /// Build the initial network for a board of the given size.
    pub fn new(size: usize) -> NetResult<Self> {
        let original = topology::board(size)?;
        let working = original.clone();
        Ok(Self {
            size,
            original,
            working,
            aliases: BTreeMap::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The pre-mutation network, used to translate per-candidate edges.
    pub fn original(&self) -> &Network {
        &self.original
    }

    /// The live network as mutated by the moves so far.
    pub fn working(&self) -> &Network {
        &self.working
    }

    /// The alias map from every merged-away node to its live representative.
    pub fn aliases(&self) -> &BTreeMap<NodeId, NodeId> {
        &self.aliases
    }

    /// Resolve a node to its live representative. One flat lookup.
    pub fn resolve(&self, n: NodeId) -> NodeId {
        self.aliases.get(&n).copied().unwrap_or(n)
    }

    /// Remove the edge between `u` and `v` (after alias resolution).
    /// Fails with [`NetError::EdgeNotFound`] if no such edge is live, which
    /// uniformly covers replayed and nonexistent moves. Atomic.
    pub fn cut(&mut self, u: NodeId, v: NodeId) -> NetResult<()> {
        let (u, v) = (self.resolve(u), self.resolve(v));
        self.working.remove_edge(u, v)?;
        debug!(%u, %v, "cut edge");
        Ok(())
    }

    /// Merge `u` and `v` (after alias resolution) into one node, combining
    /// any resulting duplicate edges in parallel. Fails with
    /// [`NetError::EdgeNotFound`] when the pair has already collapsed into a
    /// single node, which covers replayed shorts. Atomic.
    ///
    /// Survivor rule: `Ground` survives any merge, otherwise `Source`
    /// survives, otherwise the smaller junction. Terminals are therefore
    /// never merged away.
    pub fn short(&mut self, u: NodeId, v: NodeId) -> NetResult<()> {
        let (u, v) = (self.resolve(u), self.resolve(v));
        if u == v {
            return Err(NetError::EdgeNotFound { u, v });
        }
        // NodeId order puts Ground below junctions and Source above, but
        // Ground must also survive a Source merge, so min() alone is not it.
        let (survivor, loser) = match (u, v) {
            (NodeId::Ground, _) => (u, v),
            (_, NodeId::Ground) => (v, u),
            (NodeId::Source, _) => (u, v),
            (_, NodeId::Source) => (v, u),
            _ => (u.min(v), u.max(v)),
        };
        self.working.contract(survivor, loser)?;
        for target in self.aliases.values_mut() {
            if *target == loser {
                *target = survivor;
            }
        }
        self.aliases.insert(loser, survivor);
        debug!(%loser, %survivor, "shorted nodes");
        Ok(())
    }

    /// True once `Source` and `Ground` have merged into one node: a
    /// zero-resistance path joins the terminals.
    pub fn terminals_merged(&self) -> bool {
        self.resolve(NodeId::Source) == self.resolve(NodeId::Ground)
    }

    /// True while some resistive path still joins the terminals.
    pub fn has_terminal_path(&self) -> bool {
        let s = self.resolve(NodeId::Source);
        let g = self.resolve(NodeId::Ground);
        self.working.is_connected(s, g)
    }
}
