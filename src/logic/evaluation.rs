//! Terminal payoffs and the positional heuristic
//!
//! The heuristic only runs when the search hits its depth cutoff on a
//! live board. It scans the winning lines in their declared order and
//! returns the first non-zero signal, so the scan order is observable in
//! AI behavior and deliberately fixed.

use super::grid::Mark;
use super::lines::{LineAnalyzer, WINNING_LINES};
use super::state::GameState;

/// Terminal score for a won game, from the scored mark's perspective
pub const WIN_SCORE: i32 = 10;
/// Terminal score for a lost game
pub const LOSS_SCORE: i32 = -10;
/// Terminal score for a full board with no winner
pub const TIE_SCORE: i32 = 0;

impl GameState {
    /// Score this state for `mark`.
    ///
    /// Terminal states use the fixed payoff table (win beats tie beats
    /// loss); live states fall back to the positional heuristic, whose
    /// magnitudes never reach the terminal payoffs.
    pub fn evaluate_score(&self, mark: Mark) -> i32 {
        match self.winner() {
            Some(winner) if winner == mark => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None if self.tie() => TIE_SCORE,
            None => self.positional_score(mark),
        }
    }

    /// First-signal line scan: 2 for a dense near-win, 1 for a split
    /// pair, negated when the line favors the adversary, 0 when no line
    /// shows progress.
    fn positional_score(&self, mark: Mark) -> i32 {
        for line in &WINNING_LINES {
            if let Some((owner, magnitude)) = LineAnalyzer::line_progress(self.grid().cells(), line)
            {
                return if owner == mark { magnitude } else { -magnitude };
            }
        }
        0
    }
}
