//! Test suite for the game-state model
//! Validates structural invariants and construction-time rejection

use quadline::logic::{GameState, Grid, Mark};
use quadline::{Error, Result};

mod turn_alternation {
    use super::*;

    #[test]
    fn current_mark_flips_on_every_applied_move() -> Result<()> {
        let mut state = GameState::initial(Mark::Cross);
        let mut expected = Mark::Cross;

        for index in [5, 0, 10, 1, 15, 2] {
            assert_eq!(state.current_mark(), expected);
            state = state.make_move_to(index)?.after_state;
            expected = expected.other();
        }
        Ok(())
    }

    #[test]
    fn naught_first_games_are_supported() -> Result<()> {
        let state = GameState::initial(Mark::Naught);
        let mv = state.make_move_to(0)?;
        assert_eq!(mv.mark, Mark::Naught);
        assert_eq!(mv.after_state.current_mark(), Mark::Cross);
        Ok(())
    }
}

mod construction_rejection {
    use super::*;

    #[test]
    fn three_crosses_with_naught_starter_is_rejected() {
        let grid = Grid::from_string("XXX             ").unwrap();
        let err = GameState::new(grid, Mark::Naught).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMarkCounts {
                x_count: 3,
                o_count: 0
            }
        ));
    }

    #[test]
    fn winning_starter_with_equal_counts_is_rejected() {
        // X started and holds the top row, but the counts say O moved last
        let grid = Grid::from_string("XXXXOOO.O.......").unwrap();
        let err = GameState::new(grid, Mark::Cross).unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentWinner {
                winner: Mark::Cross,
                ..
            }
        ));
    }

    #[test]
    fn second_player_win_with_equal_counts_is_accepted() {
        // X started, O won on the top row having made the last move
        let grid = Grid::from_string("OOOOXXX.X.......").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();
        assert_eq!(state.winner(), Some(Mark::Naught));
    }

    #[test]
    fn states_reached_through_play_are_always_valid() -> Result<()> {
        let mut state = GameState::initial(Mark::Cross);
        for index in [0, 4, 1, 5, 8, 9] {
            state = state.make_move_to(index)?.after_state;
            // Re-validating through the constructor must agree
            assert!(GameState::new(*state.grid(), state.starting_mark()).is_ok());
        }
        Ok(())
    }
}

mod winner_queries {
    use super::*;

    #[test]
    fn winner_and_winning_cells_always_agree() {
        let grid = Grid::from_string("O...XO...XO.X XO").unwrap();
        let state = GameState::new(grid, Mark::Cross).unwrap();

        if let Some(winner) = state.winner() {
            let cells = state.winning_cells();
            assert_eq!(cells.len(), 4);
            for &idx in &cells {
                assert_eq!(state.grid().cell(idx).to_mark(), Some(winner));
            }
        } else {
            assert!(state.winning_cells().is_empty());
        }
    }

    #[test]
    fn anti_diagonal_win_is_detected() {
        // O started and won on 3, 6, 9, 12 with X scattered off the diagonal
        let grid = Grid::from_string("X..OX.O..O..OX..").unwrap();
        let state = GameState::new(grid, Mark::Naught).unwrap();
        assert_eq!(state.winner(), Some(Mark::Naught));
        assert_eq!(state.winning_cells(), vec![3, 6, 9, 12]);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn game_state_survives_a_json_round_trip() {
        let state = GameState::initial(Mark::Cross)
            .make_move_to(5)
            .unwrap()
            .after_state;

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn deserialization_rejects_impossible_boards() {
        let state = GameState::initial(Mark::Cross)
            .make_move_to(0)
            .unwrap()
            .after_state;
        let json = serde_json::to_string(&state).unwrap();

        // Three extra Crosses make the counts impossible
        let corrupted = json.replacen("\"Empty\"", "\"Cross\"", 3);
        assert!(serde_json::from_str::<GameState>(&corrupted).is_err());
    }
}
