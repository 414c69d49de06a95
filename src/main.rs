use connect_four::{
    init_logging, CliPresenter, GameConfig, GameLoop, Player, StarterSeed, DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    Red,
    Black,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Player::Red,
            Side::Black => Player::Black,
        }
    }
}

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    #[arg(long, value_enum, help = "Player who opens the first game")]
    first: Option<Side>,
    #[arg(long, help = "Fix the seed used to pick the opening player (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Disable ANSI colours")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rows, cli.columns);
    let starter = match (cli.first, cli.seed) {
        (Some(side), _) => StarterSeed::Fixed(side.into()),
        (None, Some(seed)) => {
            println!("Using fixed seed: {} (opening player is reproducible)", seed);
            StarterSeed::Seeded(seed)
        }
        (None, None) => StarterSeed::ClockParity,
    };

    let presenter = CliPresenter::stdio(!cli.no_color);
    let mut game_loop = GameLoop::new(presenter, config, starter)?;
    let summary = game_loop.run()?;

    println!(
        "\nGames: {}  RED wins: {}  BLACK wins: {}  Draws: {}",
        summary.games_played, summary.red_wins, summary.black_wins, summary.draws
    );
    Ok(())
}
