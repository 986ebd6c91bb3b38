//! bc-net: the resistor network behind the birdcage heuristic.
//!
//! Provides:
//! - Core network data structure with exact resistances ([`Network`])
//! - Topology builder for a board of a given size
//! - The mutable engine ([`Birdcage`]) with `cut`, `short` and the alias map
//! - Graphviz DOT export of the working network
//!
//! # Example
//!
//! ```
//! use bc_net::Birdcage;
//! use bc_core::NodeId;
//!
//! let mut cage = Birdcage::new(3).unwrap();
//! cage.cut(NodeId::junction(1, 4), NodeId::Source).unwrap();
//! cage.short(NodeId::Source, NodeId::junction(3, 4)).unwrap();
//!
//! assert_eq!(cage.resolve(NodeId::junction(3, 4)), NodeId::Source);
//! ```

pub mod dot;
pub mod engine;
pub mod error;
pub mod graph;
pub mod topology;

// Re-exports for ergonomics
pub use engine::Birdcage;
pub use error::{NetError, NetResult};
pub use graph::{Network, parallel};
pub use topology::{MAX_BOARD, MIN_BOARD, board};
