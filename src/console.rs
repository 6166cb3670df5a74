//! Console frontend: rendering, coordinate parsing, human input
//!
//! Cells are addressed by a column letter A-D and a row digit 1-4 in
//! either order ("B3" or "3B"), mapped onto the core's row-major 0-based
//! indexing: `index = 4 * (row - 1) + col` with A=0 through D=3.

use std::io::{self, BufRead, Write};

use crate::engine::Renderer;
use crate::error::{Error, Result};
use crate::logic::{Cell, GameState, Mark, Move};
use crate::players::Player;
use crate::search::{find_best_move, find_worst_move};

/// Parse a human coordinate like "A1" or "1A" into a cell index
pub fn cell_index(coord: &str) -> Result<usize> {
    let invalid = || Error::InvalidCoordinate {
        input: coord.to_string(),
    };

    let chars: Vec<char> = coord.trim().chars().collect();
    let [first, second] = chars.as_slice() else {
        return Err(invalid());
    };

    let (col, row) = if first.is_ascii_alphabetic() {
        (*first, *second)
    } else {
        (*second, *first)
    };
    let col = col.to_ascii_uppercase();

    if !('A'..='D').contains(&col) || !('1'..='4').contains(&row) {
        return Err(invalid());
    }

    Ok(4 * (row as usize - '1' as usize) + (col as usize - 'A' as usize))
}

/// Render a cell index as its human coordinate ("A1" for 0)
pub fn cell_name(index: usize) -> String {
    let col = char::from(b'A' + (index % 4) as u8);
    let row = index / 4 + 1;
    format!("{col}{row}")
}

/// Draws the board to stdout, highlighting the winning line with ANSI
/// blink and announcing the result
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        ConsoleRenderer
    }

    fn draw(state: &GameState) {
        // Reset the terminal so each ply replaces the previous frame
        print!("\x1bc");

        let winning = state.winning_cells();
        let cells: Vec<String> = state
            .grid()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &cell)| {
                let glyph = match cell {
                    Cell::Empty => ' ',
                    occupied => occupied.to_char(),
                };
                if winning.contains(&index) {
                    format!("\x1b[5m{glyph}\x1b[0m")
                } else {
                    glyph.to_string()
                }
            })
            .collect();

        println!("     A   B   C   D");
        println!("   -----------------");
        for row in 0..4 {
            let base = row * 4;
            println!(
                "{} \u{2506}  {} \u{2502} {} \u{2502} {} \u{2502} {}",
                row + 1,
                cells[base],
                cells[base + 1],
                cells[base + 2],
                cells[base + 3],
            );
            if row < 3 {
                println!("  \u{2506} \u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}");
            }
        }
        println!();
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, state: &GameState) {
        Self::draw(state);
        match state.winner() {
            Some(Mark::Cross) => println!("Player X wins \u{1f389}"),
            Some(Mark::Naught) => println!("Player O wins \u{1f389}"),
            None if state.tie() => println!("No one wins this time \u{1f610}"),
            None => {}
        }
    }
}

/// Human player reading coordinates from stdin.
///
/// Re-prompts on unparseable input and on occupied cells; with hints
/// enabled it prints what the sabotage search would hand away and what
/// the minimax search would take.
pub struct ConsoleHumanPlayer {
    mark: Mark,
    hints: bool,
}

impl ConsoleHumanPlayer {
    pub fn new(mark: Mark) -> Self {
        ConsoleHumanPlayer { mark, hints: false }
    }

    pub fn with_hints(mark: Mark) -> Self {
        ConsoleHumanPlayer { mark, hints: true }
    }

    fn print_hints(&self, state: &GameState) {
        if let Some(trap) = find_worst_move(state, self.mark) {
            println!("To sabotage, take cell {}", cell_name(trap.cell_index));
        }
        if let Some(best) = find_best_move(state, self.mark) {
            println!("Strongest cell to take: {}", cell_name(best.cell_index));
        }
    }
}

impl Player for ConsoleHumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        while !state.game_over() {
            if self.hints {
                self.print_hints(state);
            }
            print!("Player {}'s move: ", self.mark);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => return None, // stdin closed
            };

            let index = match cell_index(&line) {
                Ok(index) => index,
                Err(_) => {
                    println!("Please provide coordinates in the form of A1 or 1A");
                    continue;
                }
            };

            match state.make_move_to(index) {
                Ok(mv) => return Some(mv),
                Err(_) => println!("That cell is already occupied."),
            }
        }
        None
    }
}
