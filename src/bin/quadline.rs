//! quadline CLI - play four-in-a-line on the console
//!
//! Wires two configurable players (human, random, minimax, sabotage)
//! into the game loop with a console renderer.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use quadline::console::{ConsoleHumanPlayer, ConsoleRenderer};
use quadline::engine::play;
use quadline::logic::Mark;
use quadline::players::{MinimaxPlayer, Player, RandomPlayer, SabotagePlayer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerKind {
    /// Console input with sabotage hints
    Human,
    /// Uniformly random legal moves
    Random,
    /// Alpha-beta minimax
    Minimax,
    /// Anti-minimax trap hunting
    Sabotage,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Mark {
        match arg {
            MarkArg::X => Mark::Cross,
            MarkArg::O => Mark::Naught,
        }
    }
}

#[derive(Parser)]
#[command(name = "quadline")]
#[command(version, about = "Four-in-a-line on a 4x4 board with minimax and sabotage AI")]
struct Cli {
    /// Who controls X
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    player_x: PlayerKind,

    /// Who controls O
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    player_o: PlayerKind,

    /// Which mark moves first
    #[arg(long, value_enum, default_value_t = MarkArg::X)]
    first_mark: MarkArg,

    /// Seed for random players (omit for nondeterministic play)
    #[arg(long)]
    seed: Option<u64>,
}

fn build_player(kind: PlayerKind, mark: Mark, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(ConsoleHumanPlayer::with_hints(mark)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::seeded(mark, seed)),
            None => Box::new(RandomPlayer::new(mark)),
        },
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(mark)),
        PlayerKind::Sabotage => Box::new(SabotagePlayer::new(mark)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut player_x = build_player(cli.player_x, Mark::Cross, cli.seed);
    let mut player_o = build_player(cli.player_o, Mark::Naught, cli.seed);
    let mut renderer = ConsoleRenderer::new();

    play(
        player_x.as_mut(),
        player_o.as_mut(),
        cli.first_mark.into(),
        &mut renderer,
    )?;
    Ok(())
}
