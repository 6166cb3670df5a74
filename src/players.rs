//! Pluggable players
//!
//! Every player variant implements the single-method [`Player`] contract:
//! given a state, produce the move to apply, or `None` when the game is
//! already over.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::logic::{GameState, Mark, Move};
use crate::search::{find_best_move, find_worst_move};

/// The capability every player variant provides
pub trait Player {
    /// The mark this player places
    fn mark(&self) -> Mark;

    /// Produce the move to apply, or `None` on a terminal state
    fn get_move(&mut self, state: &GameState) -> Option<Move>;
}

/// Plays a uniformly random legal move
pub struct RandomPlayer {
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(mark: Mark) -> Self {
        RandomPlayer {
            mark,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible games
    pub fn seeded(mark: Mark, seed: u64) -> Self {
        RandomPlayer {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        state.make_random_move(&mut self.rng)
    }
}

/// Plays the strongest move the bounded minimax search can find
pub struct MinimaxPlayer {
    mark: Mark,
}

impl MinimaxPlayer {
    pub fn new(mark: Mark) -> Self {
        MinimaxPlayer { mark }
    }
}

impl Player for MinimaxPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        find_best_move(state, self.mark)
    }
}

/// Plays the move that steers its own position toward the worst outcome,
/// laying traps rather than chasing wins
pub struct SabotagePlayer {
    mark: Mark,
}

impl SabotagePlayer {
    pub fn new(mark: Mark) -> Self {
        SabotagePlayer { mark }
    }
}

impl Player for SabotagePlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        find_worst_move(state, self.mark)
    }
}
