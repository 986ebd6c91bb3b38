//! Voltage-difference ranking of candidate moves.

use std::cmp::Reverse;

use bc_core::{Move, Rational, move_to_edge};
use bc_net::Birdcage;
use bc_solver::{SolverConfig, node_voltages};
use num_traits::{Signed, Zero};
use tracing::debug;

/// A candidate move paired with its exact voltage difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMove {
    pub mv: Move,
    pub delta: Rational,
}

/// Rank candidate moves by strictly descending voltage difference.
///
/// The solver runs once per request, not once per candidate. Each
/// candidate's original-topology edge is translated into the working graph
/// by alias resolution; an edge whose endpoints have merged scores 0.
///
/// Ties are broken by a fixed order over coordinates (row descending, then
/// column ascending: top-left first), independent of the input's iteration
/// order: candidates are pre-sorted by the tie-break and the value sort is
/// stable.
pub fn ranked_moves(
    cage: &Birdcage,
    candidates: &[Move],
    cfg: &SolverConfig,
) -> crate::RankResult<Vec<RankedMove>> {
    let volts = node_voltages(cage.working(), cfg)?;

    let mut ordered = candidates.to_vec();
    ordered.sort_by_key(|m| (Reverse(m.row), m.col));

    let mut ranked = Vec::with_capacity(ordered.len());
    for mv in ordered {
        let (u, v) = move_to_edge(mv, cage.size())?;
        let (u, v) = (cage.resolve(u), cage.resolve(v));
        let delta = if u == v {
            Rational::zero()
        } else {
            let vu = volts
                .voltage(u)
                .ok_or(crate::RankError::MissingVoltage { node: u })?;
            let vv = volts
                .voltage(v)
                .ok_or(crate::RankError::MissingVoltage { node: v })?;
            (vu - vv).abs()
        };
        ranked.push(RankedMove { mv, delta });
    }
    ranked.sort_by(|a, b| b.delta.cmp(&a.delta));
    debug!(candidates = ranked.len(), "ranked moves");
    Ok(ranked)
}

/// The recommended move: the top of the ranking, if any candidate exists.
pub fn best_move(
    cage: &Birdcage,
    candidates: &[Move],
    cfg: &SolverConfig,
) -> crate::RankResult<Option<RankedMove>> {
    Ok(ranked_moves(cage, candidates, cfg)?.into_iter().next())
}
