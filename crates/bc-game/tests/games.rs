//! Full-game integration tests.

use bc_game::{Game, GameError, MoveSource, RandomSource, Side};

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        assert_eq!(game.winner(), None, "game ended before {text}");
        game.apply(text.parse().unwrap()).unwrap();
    }
}

#[test]
fn white_wins_by_cutting_ground_free() {
    let mut game = Game::new(3).unwrap();
    // White severs all three Ground connections while black builds in the
    // middle column.
    play(&mut game, &["A1", "C3", "C1", "C5", "E1"]);
    assert_eq!(game.winner(), Some(Side::White));
    assert!(!game.cage().has_terminal_path());
}

#[test]
fn black_wins_by_shorting_a_column() {
    let mut game = Game::new(3).unwrap();
    // Black merges the middle column into the terminals one short at a
    // time; C1 finally fuses Source into Ground.
    play(&mut game, &["A1", "C5", "E1", "C3", "A3", "C1"]);
    assert_eq!(game.winner(), Some(Side::Black));
    assert!(game.cage().terminals_merged());
}

#[test]
fn no_moves_accepted_after_the_end() {
    let mut game = Game::new(3).unwrap();
    play(&mut game, &["A1", "C5", "E1", "C3", "A3", "C1"]);
    assert!(matches!(
        game.apply("B2".parse().unwrap()),
        Err(GameError::GameOver)
    ));
}

#[test]
fn random_playout_terminates() {
    let mut game = Game::new(3).unwrap();
    let mut white = RandomSource::seeded(7);
    let mut black = RandomSource::seeded(11);
    let budget = game.untried_moves().len();

    for _ in 0..budget {
        if game.winner().is_some() {
            break;
        }
        let source: &mut dyn MoveSource = match game.to_move() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let mv = source.choose_move(&game).unwrap();
        game.apply(mv).unwrap();
    }
    assert!(game.winner().is_some() || game.untried_moves().is_empty());
}
