use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use bc_game::{Game, GameError, GameResult, HumanSource, MoveSource, RandomSource, ShannonSource, Side};

#[derive(Parser)]
#[command(name = "bc-cli")]
#[command(about = "Bridg-It with Shannon's resistor-network heuristic", long_about = None)]
struct Cli {
    /// Board size
    #[arg(default_value_t = 3)]
    size: usize,

    /// Who plays white (cuts)
    #[arg(long, value_enum, default_value_t = SourceKind::Shannon)]
    white: SourceKind,

    /// Who plays black (shorts)
    #[arg(long, value_enum, default_value_t = SourceKind::Random)]
    black: SourceKind,

    /// Solve without pull-up regularization
    #[arg(long)]
    no_pull_ups: bool,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final working network as Graphviz DOT
    #[arg(long)]
    dot: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    Shannon,
    Random,
    Human,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Shannon => "shannon",
            SourceKind::Random => "random",
            SourceKind::Human => "human",
        };
        write!(f, "{name}")
    }
}

impl SourceKind {
    fn build(self, cli: &Cli, seed_offset: u64) -> Box<dyn MoveSource> {
        match self {
            SourceKind::Shannon => Box::new(ShannonSource::new(!cli.no_pull_ups)),
            SourceKind::Random => Box::new(match cli.seed {
                Some(seed) => RandomSource::seeded(seed.wrapping_add(seed_offset)),
                None => RandomSource::new(),
            }),
            SourceKind::Human => Box::new(HumanSource::stdin()),
        }
    }
}

fn main() -> GameResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut white = cli.white.build(&cli, 0);
    let mut black = cli.black.build(&cli, 1);

    let mut game = Game::new(cli.size)?;
    println!("{} (W) - {} (B)", white.name(), black.name());
    println!("{game}");

    let winner = loop {
        if let Some(side) = game.winner() {
            break Some(side);
        }
        let source = match game.to_move() {
            Side::White => &mut white,
            Side::Black => &mut black,
        };
        let mv = match source.choose_move(&game) {
            Ok(mv) => mv,
            Err(GameError::NoMovesLeft) => break None,
            Err(e) => return Err(e),
        };
        let side = game.to_move();
        game.apply(mv)?;
        println!("{side} plays {mv}");
        println!("{game}");
    };

    match winner {
        Some(Side::White) => println!("{} (W) wins", white.name()),
        Some(Side::Black) => println!("{} (B) wins", black.name()),
        None => println!("No moves left"),
    }

    if let Some(path) = &cli.dot {
        let dot = bc_net::dot::render(game.cage().working(), game.size());
        std::fs::write(path, dot)?;
        println!("✓ Wrote network to {}", path.display());
    }

    Ok(())
}
