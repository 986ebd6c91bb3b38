//! Core resistor-network data structure.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use bc_core::{NodeId, Rational};
use num_traits::Zero;

use crate::error::{NetError, NetResult};

/// Parallel-resistance law: two resistors joining the same pair of nodes
/// combine to `1/(1/r1 + 1/r2)`. A zero resistance is an ideal wire, so
/// anything in parallel with it is still a wire.
pub fn parallel(r1: &Rational, r2: &Rational) -> Rational {
    if r1.is_zero() || r2.is_zero() {
        Rational::zero()
    } else {
        r1 * r2 / (r1 + r2)
    }
}

/// An undirected simple graph with an exact resistance per edge.
///
/// Adjacency is stored both ways in ordered maps, so iteration order is
/// deterministic everywhere. At most one edge exists per node pair:
/// inserting a duplicate combines with the existing edge in parallel
/// immediately. Nodes persist after their last edge is removed; only
/// [`Network::contract`] deletes a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    adj: BTreeMap<NodeId, BTreeMap<NodeId, Rational>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|nbrs| nbrs.len()).sum::<usize>() / 2
    }

    pub fn contains_node(&self, n: NodeId) -> bool {
        self.adj.contains_key(&n)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.resistance(u, v).is_some()
    }

    /// Resistance of the edge between `u` and `v`, if one exists.
    pub fn resistance(&self, u: NodeId, v: NodeId) -> Option<&Rational> {
        self.adj.get(&u).and_then(|nbrs| nbrs.get(&v))
    }

    /// All live nodes, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.keys().copied()
    }

    /// Neighbors of `u` with the connecting resistance.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, &Rational)> + '_ {
        self.adj
            .get(&u)
            .into_iter()
            .flat_map(|nbrs| nbrs.iter().map(|(v, r)| (*v, r)))
    }

    /// Every edge exactly once, endpoints in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &Rational)> + '_ {
        self.adj.iter().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .filter(move |(v, _)| *u < **v)
                .map(move |(v, r)| (*u, *v, r))
        })
    }

    /// Insert a resistor between two distinct nodes, combining in parallel
    /// with any edge already joining them.
    pub fn add_resistor(&mut self, u: NodeId, v: NodeId, r: Rational) -> NetResult<()> {
        if u == v {
            return Err(NetError::SelfLoop { node: u });
        }
        if r < Rational::zero() {
            return Err(NetError::NegativeResistance { u, v });
        }
        let combined = match self.resistance(u, v) {
            Some(existing) => parallel(existing, &r),
            None => r,
        };
        self.adj.entry(u).or_default().insert(v, combined.clone());
        self.adj.entry(v).or_default().insert(u, combined);
        Ok(())
    }

    /// Remove the edge between `u` and `v`, returning its resistance.
    /// The nodes themselves stay live. No state changes on failure.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> NetResult<Rational> {
        let r = self
            .adj
            .get_mut(&u)
            .and_then(|nbrs| nbrs.remove(&v))
            .ok_or(NetError::EdgeNotFound { u, v })?;
        if let Some(nbrs) = self.adj.get_mut(&v) {
            nbrs.remove(&u);
        }
        Ok(r)
    }

    /// Merge `loser` into `survivor`: every edge of `loser` re-attaches to
    /// `survivor`, combining duplicates in parallel; an edge between the two
    /// disappears (it would be a self-loop). `loser` is deleted.
    /// No state changes on failure.
    pub fn contract(&mut self, survivor: NodeId, loser: NodeId) -> NetResult<()> {
        if survivor == loser {
            return Err(NetError::SelfLoop { node: survivor });
        }
        if !self.contains_node(survivor) {
            return Err(NetError::NodeNotFound { node: survivor });
        }
        let loser_edges = self
            .adj
            .remove(&loser)
            .ok_or(NetError::NodeNotFound { node: loser })?;
        for (nbr, r) in loser_edges {
            if let Some(nbrs) = self.adj.get_mut(&nbr) {
                nbrs.remove(&loser);
            }
            if nbr != survivor {
                self.add_resistor(survivor, nbr, r)?;
            }
        }
        Ok(())
    }

    /// Breadth-first reachability between two live nodes.
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }
        if from == to {
            return true;
        }
        let mut seen = BTreeSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(n) = queue.pop_front() {
            for (nbr, _) in self.neighbors(n) {
                if nbr == to {
                    return true;
                }
                if seen.insert(nbr) {
                    queue.push_back(nbr);
                }
            }
        }
        false
    }
}
