//! Construction-time validation of game states
//!
//! These checks never fire during normal play: every state produced by
//! `make_move_to` is valid by construction. They guard states built
//! directly from grids, for example out of parsed strings or
//! deserialized input.

use super::grid::{Grid, Mark};
use super::state::GameState;
use crate::error::{Error, Result};

/// Run every structural check on a candidate state
pub fn validate_game_state(state: &GameState) -> Result<()> {
    validate_mark_counts(state.grid())?;
    validate_starting_mark(state.grid(), state.starting_mark())?;
    validate_winner(state.grid(), state.starting_mark(), state.winner())
}

/// Marks alternate, so the counts may differ by at most one
pub fn validate_mark_counts(grid: &Grid) -> Result<()> {
    let x_count = grid.x_count();
    let o_count = grid.o_count();
    if x_count.abs_diff(o_count) > 1 {
        return Err(Error::InvalidMarkCounts { x_count, o_count });
    }
    Ok(())
}

/// The mark with strictly more placements must be the one that started
pub fn validate_starting_mark(grid: &Grid, starting_mark: Mark) -> Result<()> {
    let x_count = grid.x_count();
    let o_count = grid.o_count();

    let leader = if x_count > o_count {
        Some(Mark::Cross)
    } else if o_count > x_count {
        Some(Mark::Naught)
    } else {
        None
    };

    if leader.is_some_and(|mark| mark != starting_mark) {
        return Err(Error::WrongStartingMark {
            starting: starting_mark,
            x_count,
            o_count,
        });
    }
    Ok(())
}

/// The winner must have made the last move relative to the starting mark:
/// a winning starter holds one extra mark, a winning second player holds
/// exactly as many marks as the starter.
pub fn validate_winner(grid: &Grid, starting_mark: Mark, winner: Option<Mark>) -> Result<()> {
    let Some(winner) = winner else {
        return Ok(());
    };

    let x_count = grid.x_count();
    let o_count = grid.o_count();
    let (winner_count, other_count) = match winner {
        Mark::Cross => (x_count, o_count),
        Mark::Naught => (o_count, x_count),
    };

    let consistent = if winner == starting_mark {
        winner_count > other_count
    } else {
        winner_count == other_count
    };

    if !consistent {
        return Err(Error::InconsistentWinner {
            winner,
            x_count,
            o_count,
        });
    }
    Ok(())
}
