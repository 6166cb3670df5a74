//! Winning line analysis for the 4x4 board

use super::grid::{CELL_COUNT, Cell, Mark};

/// Winning line indices on the 4x4 board.
///
/// The declaration order is part of the contract: [`LineAnalyzer::winner`]
/// and the positional heuristic scan lines in this order and stop at the
/// first match.
pub const WINNING_LINES: [[usize; 4]; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15], // rows
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15], // columns
    [0, 5, 10, 15],
    [3, 6, 9, 12], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a mark has won by holding all four cells of a line
    pub fn has_won(cells: &[Cell; CELL_COUNT], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find the winning mark and its line, if any.
    ///
    /// Lines are scanned in declaration order and Cross is checked before
    /// Naught within each line, so the result is deterministic even for
    /// boards that were never reachable through legal play.
    pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<(Mark, &'static [usize; 4])> {
        for line in &WINNING_LINES {
            for mark in [Mark::Cross, Mark::Naught] {
                let target = mark.to_cell();
                if line.iter().all(|&idx| cells[idx] == target) {
                    return Some((mark, line));
                }
            }
        }
        None
    }

    /// Measure partial progress toward completing a line.
    ///
    /// Returns the owning mark and a signal magnitude when the line holds
    /// two or more of a single mark and no adversary marks: 2 when the
    /// marks include an adjacent pair within the line (a dense near-win),
    /// 1 for a split pair. Lines with fewer than two marks or with both
    /// marks present carry no signal.
    pub fn line_progress(cells: &[Cell; CELL_COUNT], line: &[usize; 4]) -> Option<(Mark, i32)> {
        let mut owner: Option<Mark> = None;
        let mut held = [false; 4];

        for (slot, &idx) in line.iter().enumerate() {
            if let Some(mark) = cells[idx].to_mark() {
                if owner.is_some_and(|o| o != mark) {
                    return None; // contested line
                }
                owner = Some(mark);
                held[slot] = true;
            }
        }

        let owner = owner?;
        if held.iter().filter(|&&h| h).count() < 2 {
            return None;
        }

        let dense = (0..3).any(|i| held[i] && held[i + 1]);
        Some((owner, if dense { 2 } else { 1 }))
    }
}
