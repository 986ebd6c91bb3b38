//! Solver configuration.

use bc_core::{Rational, whole};

/// Configuration for a nodal solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Voltage applied at `Source`; `Ground` is the 0 reference.
    pub source_voltage: Rational,

    /// Stamp a large pull-up resistor from every unknown node to the source
    /// rail before solving. Guarantees a unique solution when a region of
    /// the board has lost all paths to the terminals.
    pub pull_ups: bool,
}

impl SolverConfig {
    pub fn new(source_voltage: Rational, pull_ups: bool) -> Self {
        Self {
            source_voltage,
            pull_ups,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            source_voltage: whole(1),
            pull_ups: true,
        }
    }
}
