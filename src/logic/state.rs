//! Immutable game state snapshots and moves

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::grid::{CELL_COUNT, Grid, Mark};
use super::lines::LineAnalyzer;
use crate::error::{Error, Result};

/// A snapshot of the game: the grid plus which mark moved first.
///
/// Everything else is derived: whose turn it is, the winner, ties, legal
/// moves. The type is a plain `Copy` value; applying a move produces a
/// brand-new state and never touches the original, which lets the search
/// tree share states freely.
///
/// Construction through [`GameState::new`] validates the structural
/// invariants (alternating mark counts, starting-mark consistency, winner
/// parity) and rejects impossible boards. Deserialization goes through
/// the same checks.
///
/// # Examples
///
/// ```
/// use quadline::logic::{GameState, Mark};
///
/// let state = GameState::initial(Mark::Cross);
/// assert_eq!(state.current_mark(), Mark::Cross);
/// assert_eq!(state.possible_moves().len(), 16);
///
/// let mv = state.make_move_to(5).unwrap();
/// assert_eq!(mv.after_state.current_mark(), Mark::Naught);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    grid: Grid,
    starting_mark: Mark,
}

/// Raw deserialization target; promoted via the validating constructor.
#[derive(Deserialize)]
struct UncheckedGameState {
    grid: Grid,
    starting_mark: Mark,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = Error;

    fn try_from(raw: UncheckedGameState) -> Result<Self> {
        GameState::new(raw.grid, raw.starting_mark)
    }
}

/// An immutable record of one placement, carrying both the snapshot it was
/// made from and the snapshot it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub mark: Mark,
    pub cell_index: usize,
    pub before_state: GameState,
    pub after_state: GameState,
}

impl GameState {
    /// Create a validated game state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarkCounts`], [`Error::WrongStartingMark`],
    /// or [`Error::InconsistentWinner`] when the grid could not have been
    /// reached through legal alternating play from `starting_mark`.
    pub fn new(grid: Grid, starting_mark: Mark) -> Result<Self> {
        let state = GameState {
            grid,
            starting_mark,
        };
        super::validation::validate_game_state(&state)?;
        Ok(state)
    }

    /// New-game entry point: an all-empty grid with a chosen first mover
    pub fn initial(starting_mark: Mark) -> Self {
        GameState {
            grid: Grid::empty(),
            starting_mark,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// The mark that moves next.
    ///
    /// Equal counts mean the starting mark is on turn; otherwise the other
    /// mark is.
    pub fn current_mark(&self) -> Mark {
        if self.grid.x_count() == self.grid.o_count() {
            self.starting_mark
        } else {
            self.starting_mark.other()
        }
    }

    /// Whether no mark has been placed yet
    pub fn not_started(&self) -> bool {
        self.grid.empty_count() == CELL_COUNT
    }

    /// The winning mark, if a line is complete
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(self.grid.cells()).map(|(mark, _)| mark)
    }

    /// Indices of the completed line, empty when there is no winner.
    ///
    /// Uses the same scan order as [`winner`](Self::winner), so the two
    /// always agree.
    pub fn winning_cells(&self) -> Vec<usize> {
        LineAnalyzer::winner(self.grid.cells())
            .map(|(_, line)| line.to_vec())
            .unwrap_or_default()
    }

    /// True when the board is full and nobody won
    pub fn tie(&self) -> bool {
        self.winner().is_none() && self.grid.empty_count() == 0
    }

    /// True when a winner is present or the board is full
    pub fn game_over(&self) -> bool {
        self.winner().is_some() || self.tie()
    }

    /// All legal moves in ascending cell-index order.
    ///
    /// Empty for terminal states, even when empty cells remain behind a
    /// completed line.
    pub fn possible_moves(&self) -> Vec<Move> {
        if self.game_over() {
            return Vec::new();
        }
        (0..CELL_COUNT)
            .filter(|&index| self.grid.cell(index).is_empty())
            .map(|index| {
                self.make_move_to(index)
                    .expect("placing on an empty cell of a live state is always legal")
            })
            .collect()
    }

    /// Place the current mark at `index`, producing a move record.
    ///
    /// The original state is untouched; the after-state is re-validated on
    /// construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] for indices outside `0..16` and
    /// [`Error::InvalidMove`] when the cell is occupied. Both are
    /// recoverable; a frontend can re-prompt.
    #[must_use = "make_move_to returns a new move record; the original state is unchanged"]
    pub fn make_move_to(&self, index: usize) -> Result<Move> {
        if index >= CELL_COUNT {
            return Err(Error::InvalidPosition { position: index });
        }
        if !self.grid.cell(index).is_empty() {
            return Err(Error::InvalidMove { position: index });
        }

        let mark = self.current_mark();
        let after_state = GameState::new(self.grid.with_cell(index, mark.to_cell()), self.starting_mark)?;

        Ok(Move {
            mark,
            cell_index: index,
            before_state: *self,
            after_state,
        })
    }

    /// Pick a uniformly random legal move, or `None` on terminal states.
    ///
    /// The random source is passed in explicitly so callers (and tests)
    /// control determinism.
    pub fn make_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.possible_moves().choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::logic::grid::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(Mark::Cross);
        assert_eq!(state.current_mark(), Mark::Cross);
        assert!(state.not_started());
        assert!(!state.game_over());
        assert_eq!(state.possible_moves().len(), 16);
    }

    #[test]
    fn test_current_mark_follows_starting_mark() {
        let state = GameState::initial(Mark::Naught);
        assert_eq!(state.current_mark(), Mark::Naught);

        let mv = state.make_move_to(0).unwrap();
        assert_eq!(mv.mark, Mark::Naught);
        assert_eq!(mv.after_state.current_mark(), Mark::Cross);
    }

    #[test]
    fn test_move_round_trip() {
        let state = GameState::initial(Mark::Cross);
        let mv = state.make_move_to(7).unwrap();
        assert_eq!(mv.after_state.grid().cell(7), Cell::Cross);
        assert_eq!(mv.before_state, state);
        assert_eq!(mv.cell_index, 7);
    }

    #[test]
    fn test_occupied_cell_fails_without_effect() {
        let state = GameState::initial(Mark::Cross)
            .make_move_to(4)
            .unwrap()
            .after_state;
        let before = state;

        let err = state.make_move_to(4).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { position: 4 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let state = GameState::initial(Mark::Cross);
        let err = state.make_move_to(16).unwrap_err();
        assert!(matches!(err, Error::InvalidPosition { position: 16 }));
    }

    #[test]
    fn test_possible_moves_plus_occupied_is_sixteen() {
        let mut state = GameState::initial(Mark::Cross);
        for index in [0, 5, 10, 3, 12] {
            state = state.make_move_to(index).unwrap().after_state;
            if state.game_over() {
                break;
            }
            let occupied = CELL_COUNT - state.grid().empty_count();
            assert_eq!(state.possible_moves().len() + occupied, 16);
        }
    }

    #[test]
    fn test_possible_moves_ascending_order() {
        let state = GameState::initial(Mark::Cross)
            .make_move_to(6)
            .unwrap()
            .after_state;
        let indices: Vec<usize> = state.possible_moves().iter().map(|m| m.cell_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
        assert!(!indices.contains(&6));
    }

    #[test]
    fn test_winner_and_winning_cells_agree() {
        // X takes the top row while O scatters
        let grid = Grid::from_string("XXXXOOO.........").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();

        assert_eq!(state.winner(), Some(Mark::Cross));
        let cells = state.winning_cells();
        assert_eq!(cells, vec![0, 1, 2, 3]);
        for &idx in &cells {
            assert_eq!(state.grid().cell(idx), Cell::Cross);
        }
    }

    #[test]
    fn test_row_completion_scenario() {
        let grid = Grid::from_string("XXX OO O        ").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_cells(), Vec::<usize>::new());
        assert_eq!(state.current_mark(), Mark::Cross);

        let mv = state.make_move_to(3).unwrap();
        assert_eq!(mv.after_state.winner(), Some(Mark::Cross));
        assert_eq!(mv.after_state.winning_cells(), vec![0, 1, 2, 3]);
        assert!(mv.after_state.game_over());
        assert!(mv.after_state.possible_moves().is_empty());
    }

    #[test]
    fn test_tie_requires_full_board() {
        let state = GameState::initial(Mark::Cross);
        assert!(!state.tie());

        // Full board with no four-in-a-line anywhere
        let grid = Grid::from_string("XXOOOOXXXXOOOOXX").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();
        assert!(state.winner().is_none());
        assert!(state.tie());
        assert!(state.game_over());
        assert!(state.possible_moves().is_empty());
    }

    #[test]
    fn test_make_random_move_is_deterministic_with_seed() {
        let state = GameState::initial(Mark::Cross);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = state.make_random_move(&mut rng_a).unwrap();
        let b = state.make_random_move(&mut rng_b).unwrap();
        assert_eq!(a.cell_index, b.cell_index);
    }

    #[test]
    fn test_make_random_move_on_terminal_state() {
        let grid = Grid::from_string("XXXXOOO.........").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(state.make_random_move(&mut rng).is_none());
    }
}
