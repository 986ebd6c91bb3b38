//! bc-core: stable foundation for the birdcage engine.
//!
//! Contains:
//! - node (node identifiers for the resistor network)
//! - rational (exact arithmetic aliases + constructors)
//! - notation (board moves and move↔edge translation)
//! - error (shared notation error types)

pub mod error;
pub mod node;
pub mod notation;
pub mod rational;

// Re-exports: nice ergonomics for downstream crates
pub use error::{NotationError, NotationResult};
pub use node::NodeId;
pub use notation::{Move, edge_to_move, move_to_edge, valid_moves};
pub use rational::{Rational, ratio, whole};
