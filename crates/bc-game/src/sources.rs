//! Move sources: where the next move comes from.
//!
//! The game loop depends only on the [`MoveSource`] capability, never on a
//! concrete chooser.

use std::io::{self, BufRead, Write};

use bc_core::{Move, whole};
use bc_shannon::best_move;
use bc_solver::SolverConfig;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::{GameError, GameResult};
use crate::game::Game;

/// Something that can choose the next move for the side to play.
pub trait MoveSource {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game: &Game) -> GameResult<Move>;
}

/// Uniform-random chooser over the untried moves.
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game: &Game) -> GameResult<Move> {
        let untried = game.untried_moves();
        if untried.is_empty() {
            return Err(GameError::NoMovesLeft);
        }
        Ok(untried[self.rng.gen_range(0..untried.len())])
    }
}

/// Shannon's analog heuristic: play the move with the largest voltage
/// difference across its edge.
pub struct ShannonSource {
    cfg: SolverConfig,
}

impl ShannonSource {
    pub fn new(pull_ups: bool) -> Self {
        Self {
            cfg: SolverConfig::new(whole(1), pull_ups),
        }
    }
}

impl MoveSource for ShannonSource {
    fn name(&self) -> &str {
        "Shannon"
    }

    fn choose_move(&mut self, game: &Game) -> GameResult<Move> {
        let ranked = best_move(game.cage(), &game.untried_moves(), &self.cfg)?;
        ranked.map(|r| r.mv).ok_or(GameError::NoMovesLeft)
    }
}

/// Interactive chooser reading moves line by line.
///
/// Reprompts until the input names a valid, untried move; fails with
/// [`GameError::InputClosed`] on end of input.
pub struct HumanSource<R> {
    input: R,
}

impl HumanSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> HumanSource<R> {
    pub fn from_reader(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> MoveSource for HumanSource<R> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_move(&mut self, game: &Game) -> GameResult<Move> {
        loop {
            print!("{} move: ", game.to_move());
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<Move>() {
                Ok(mv) if mv.is_valid(game.size()) && !game.played().contains(&mv) => {
                    return Ok(mv);
                }
                Ok(mv) => println!("{mv} is not available"),
                Err(e) => println!("{e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn random_source_is_reproducible() {
        let game = Game::new(3).unwrap();
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        let chosen = a.choose_move(&game).unwrap();
        assert_eq!(chosen, b.choose_move(&game).unwrap());
        assert!(chosen.is_valid(3));
    }

    #[test]
    fn shannon_source_opening_moves() {
        let game = Game::new(3).unwrap();
        // Without pull-ups every vertical edge ties and the tie-break picks
        // the top-left corner.
        let mut strict = ShannonSource::new(false);
        assert_eq!(strict.choose_move(&game).unwrap(), mv("A5"));
        // Pull-ups tilt the board toward the source, so the bottom edges
        // carry the largest difference.
        let mut relaxed = ShannonSource::new(true);
        assert_eq!(relaxed.choose_move(&game).unwrap(), mv("A1"));
    }

    #[test]
    fn human_source_reprompts_until_valid() {
        let mut game = Game::new(3).unwrap();
        game.apply(mv("A1")).unwrap();
        // Garbage, an off-board move, a taken move, then a good one.
        let input = Cursor::new("zzz\nA7\nA1\nC1\n");
        let mut human = HumanSource::from_reader(input);
        assert_eq!(human.choose_move(&game).unwrap(), mv("C1"));
    }

    #[test]
    fn human_source_reports_closed_input() {
        let game = Game::new(3).unwrap();
        let mut human = HumanSource::from_reader(Cursor::new(""));
        assert!(matches!(
            human.choose_move(&game),
            Err(GameError::InputClosed)
        ));
    }
}
