//! Game logic for four-in-a-line on the 4x4 board

pub mod evaluation;
pub mod grid;
pub mod lines;
pub mod state;
pub mod validation;

pub use evaluation::{LOSS_SCORE, TIE_SCORE, WIN_SCORE};
pub use grid::{CELL_COUNT, Cell, Grid, Mark};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use state::{GameState, Move};
