//! Nodal conductance system assembly.

use std::collections::BTreeMap;

use bc_core::{NodeId, Rational, ratio};
use bc_net::Network;
use num_traits::Zero;

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};

/// Pull-up resistance, well above the unit resistances on the board.
fn pull_up_conductance() -> Rational {
    ratio(1, 30)
}

/// The dense linear system `A·x = b` for one nodal solve.
///
/// Unknowns are the live non-terminal nodes in ascending order. `Source`
/// and `Ground` are held at fixed potentials and excluded; each edge
/// touching a fixed node contributes to the right-hand side instead.
#[derive(Debug, Clone)]
pub struct NodalSystem {
    pub(crate) unknowns: Vec<NodeId>,
    pub(crate) matrix: Vec<Vec<Rational>>,
    pub(crate) rhs: Vec<Rational>,
}

impl NodalSystem {
    /// Assemble the conductance system for the given network.
    ///
    /// One KCL equation per unknown node: the currents leaving through each
    /// incident edge (conductance 1/R times the voltage difference) sum to
    /// zero. Zero-resistance edges cannot be stamped; the engine contracts
    /// them away, so meeting one is a setup error.
    pub fn assemble(net: &Network, cfg: &SolverConfig) -> SolverResult<Self> {
        let unknowns: Vec<NodeId> = net.nodes().filter(|n| !n.is_terminal()).collect();
        let index: BTreeMap<NodeId, usize> =
            unknowns.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let n = unknowns.len();
        let mut sys = Self {
            unknowns,
            matrix: vec![vec![Rational::zero(); n]; n],
            rhs: vec![Rational::zero(); n],
        };

        for (u, v, r) in net.edges() {
            if r.is_zero() {
                return Err(SolverError::Setup {
                    what: format!("zero-resistance edge ({u}, {v}) cannot be stamped"),
                });
            }
            let g = r.recip();
            let iu = index.get(&u).copied();
            let iv = index.get(&v).copied();
            sys.stamp_conductance(iu, iv, &g);
            if iu.is_none() {
                if let Some(row) = iv {
                    sys.rhs[row] += &g * &fixed_potential(u, cfg);
                }
            }
            if iv.is_none() {
                if let Some(row) = iu {
                    sys.rhs[row] += &g * &fixed_potential(v, cfg);
                }
            }
        }

        if cfg.pull_ups {
            let g = pull_up_conductance();
            for row in 0..n {
                sys.matrix[row][row] += &g;
                sys.rhs[row] += &g * &cfg.source_voltage;
            }
        }

        Ok(sys)
    }

    pub fn unknown_count(&self) -> usize {
        self.unknowns.len()
    }

    /// Stamp a conductance between two nodes; `None` marks a fixed node,
    /// which has no row of its own.
    fn stamp_conductance(&mut self, i: Option<usize>, j: Option<usize>, g: &Rational) {
        if let Some(i) = i {
            self.matrix[i][i] += g;
        }
        if let Some(j) = j {
            self.matrix[j][j] += g;
        }
        if let (Some(i), Some(j)) = (i, j) {
            self.matrix[i][j] -= g;
            self.matrix[j][i] -= g;
        }
    }
}

/// Potential of a fixed (terminal) node.
fn fixed_potential(n: NodeId, cfg: &SolverConfig) -> Rational {
    match n {
        NodeId::Source => cfg.source_voltage.clone(),
        _ => Rational::zero(),
    }
}
