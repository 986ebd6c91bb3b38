//! bc-game: the Bridg-It game surface over the resistor-network engine.
//!
//! Provides:
//! - [`Game`]: played moves, alternating cut/short application, win checks
//! - [`MoveSource`]: one capability for random, human, and Shannon players
//! - ASCII board rendering via `Display`

pub mod error;
pub mod game;
pub mod render;
pub mod sources;

pub use error::{GameError, GameResult};
pub use game::{Game, Side};
pub use sources::{HumanSource, MoveSource, RandomSource, ShannonSource};
