//! Game loop orchestration

use crate::error::{Error, Result};
use crate::logic::{GameState, Mark};
use crate::players::Player;

/// Consumes states for display; carries no game logic
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Renderer that discards every state, for headless games
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) {}
}

/// Reject a pairing where both players claim the same mark
pub fn validate_players(player_one: &dyn Player, player_two: &dyn Player) -> Result<()> {
    if player_one.mark() == player_two.mark() {
        return Err(Error::MatchingMarks);
    }
    Ok(())
}

/// Run one game to completion and return the terminal state.
///
/// Starts from an empty grid with `starting_mark` to move, hands the
/// state to whichever player owns the current mark, applies the returned
/// move, and renders after every transition until the game is over.
///
/// # Errors
///
/// Returns [`Error::MatchingMarks`] for an invalid pairing and
/// [`Error::NoMoveProduced`] if a player yields no move on a live state
/// (a human quitting mid-game, for example).
pub fn play<'a>(
    player_one: &'a mut dyn Player,
    player_two: &'a mut dyn Player,
    starting_mark: Mark,
    renderer: &mut dyn Renderer,
) -> Result<GameState> {
    validate_players(player_one, player_two)?;

    let mut state = GameState::initial(starting_mark);
    renderer.render(&state);

    while !state.game_over() {
        let mover = state.current_mark();
        let player = if player_one.mark() == mover {
            &mut *player_one
        } else {
            &mut *player_two
        };

        let mv = player
            .get_move(&state)
            .ok_or(Error::NoMoveProduced { mark: mover })?;
        state = mv.after_state;
        renderer.render(&state);
    }

    Ok(state)
}
