//! Exact elimination and the public solve entry point.

use std::collections::BTreeMap;

use bc_core::{NodeId, Rational};
use bc_net::Network;
use num_traits::Zero;
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::system::NodalSystem;

/// Exact voltage at every live node of a solved network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeVoltages {
    map: BTreeMap<NodeId, Rational>,
}

impl NodeVoltages {
    pub fn voltage(&self, n: NodeId) -> Option<&Rational> {
        self.map.get(&n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Rational)> + '_ {
        self.map.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Solve the network for the voltage at every live node.
///
/// `Source` is held at the configured source voltage and `Ground` at 0;
/// every other node's voltage comes from the exact solution of the nodal
/// system. Without pull-ups, a region with no resistive path to a terminal
/// makes the system singular and the solve fails with
/// [`SolverError::DisconnectedNetwork`].
pub fn node_voltages(net: &Network, cfg: &SolverConfig) -> SolverResult<NodeVoltages> {
    let sys = NodalSystem::assemble(net, cfg)?;
    debug!(unknowns = sys.unknown_count(), pull_ups = cfg.pull_ups, "solving nodal system");
    let NodalSystem {
        unknowns,
        matrix,
        rhs,
    } = sys;
    let x = eliminate(matrix, rhs)?;

    let mut map: BTreeMap<NodeId, Rational> = unknowns.into_iter().zip(x).collect();
    if net.contains_node(NodeId::Source) {
        map.insert(NodeId::Source, cfg.source_voltage.clone());
    }
    if net.contains_node(NodeId::Ground) {
        map.insert(NodeId::Ground, Rational::zero());
    }
    Ok(NodeVoltages { map })
}

/// Gaussian elimination over exact rationals.
///
/// Pivoting only needs a nonzero entry (there is no rounding to fight); an
/// all-zero pivot column means the system is singular, which for a nodal
/// conductance matrix means a component floats free of the terminals.
fn eliminate(mut m: Vec<Vec<Rational>>, mut b: Vec<Rational>) -> SolverResult<Vec<Rational>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n)
            .find(|&r| !m[r][col].is_zero())
            .ok_or(SolverError::DisconnectedNetwork)?;
        m.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..n {
            if m[row][col].is_zero() {
                continue;
            }
            let factor = &m[row][col] / &m[col][col];
            let pivot_row = m[col].clone();
            for k in col..n {
                let delta = &factor * &pivot_row[k];
                m[row][k] -= delta;
            }
            let delta = &factor * &b[col];
            b[row] -= delta;
        }
    }

    let mut x = vec![Rational::zero(); n];
    for row in (0..n).rev() {
        let mut acc = b[row].clone();
        for k in row + 1..n {
            acc -= &m[row][k] * &x[k];
        }
        x[row] = acc / &m[row][row];
    }
    Ok(x)
}
