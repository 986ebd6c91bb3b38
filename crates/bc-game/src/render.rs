//! ASCII board rendering.
//!
//! Rows print top-down with numbers on the left and column letters along
//! the bottom. Untried positions show a thin connection (`-` or `|`),
//! shorted positions a doubled one (`=` or `‖`), cut positions nothing.

use std::fmt;

use bc_core::Move;

use crate::game::Game;

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hi = 2 * self.size() as u8;
        for y in (0..=hi).rev() {
            if 0 < y && y < hi {
                write!(f, "{y} ")?;
            } else {
                write!(f, "  ")?;
            }
            for x in 0..=hi {
                if (x + y) % 2 == 0 {
                    f.write_str(self.edge_cell(x, y))?;
                } else if y % 2 == 0 {
                    f.write_str("● ")?;
                } else {
                    f.write_str("  ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..=hi {
            if 0 < x && x < hi {
                write!(f, "{} ", (b'A' + x - 1) as char)?;
            } else {
                write!(f, "  ")?;
            }
        }
        writeln!(f)
    }
}

impl Game {
    /// The two-character cell for an edge position of the grid.
    fn edge_cell(&self, x: u8, y: u8) -> &'static str {
        let mv = Move::new(x, y);
        if !mv.is_valid(self.size()) {
            return "  ";
        }
        let horizontal = y % 2 == 0;
        match self.played().iter().position(|m| *m == mv) {
            None => {
                if horizontal {
                    "- "
                } else {
                    "| "
                }
            }
            // Even indices are white's cuts, odd are black's shorts.
            Some(i) if i % 2 == 0 => "  ",
            Some(_) => {
                if horizontal {
                    "= "
                } else {
                    "‖ "
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(game: &Game) -> Vec<String> {
        game.to_string()
            .lines()
            .map(|l| l.trim_end().to_string())
            .collect()
    }

    #[test]
    fn initial_2_board() {
        let game = Game::new(2).unwrap();
        assert_eq!(
            lines(&game),
            [
                "    ●   ●",
                "3   |   |",
                "2   ● - ●",
                "1   |   |",
                "    ●   ●",
                "    A B C",
            ]
        );
    }

    #[test]
    fn cut_and_short_render() {
        let mut game = Game::new(2).unwrap();
        game.apply("A1".parse().unwrap()).unwrap();
        game.apply("A3".parse().unwrap()).unwrap();
        assert_eq!(
            lines(&game),
            [
                "    ●   ●",
                "3   ‖   |",
                "2   ● - ●",
                "1       |",
                "    ●   ●",
                "    A B C",
            ]
        );
    }
}
