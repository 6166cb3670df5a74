//! Marks, cells, and the 4x4 grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of cells on the board
pub const CELL_COUNT: usize = 16;

/// One of the two players' symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Naught,
}

impl Mark {
    /// Get the adversary mark
    pub fn other(self) -> Mark {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Cross => Cell::Cross,
            Mark::Naught => Cell::Naught,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Naught => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cell on the 4x4 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Cross,
    Naught,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Naught => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Cross),
            'O' | 'o' | '0' => Some(Cell::Naught),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::Cross => Some(Mark::Cross),
            Cell::Naught => Some(Mark::Naught),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 4x4 board as an immutable value type.
///
/// Cells are indexed row-major, 0-based: `index = 4 * row + col` with
/// `row` and `col` in `0..4`. Any change produces a new `Grid`; the type
/// implements `Copy` since it is only 16 bytes of cell data.
///
/// # Examples
///
/// ```
/// use quadline::logic::{Cell, Grid};
///
/// let grid = Grid::from_string("XO..............").unwrap();
/// assert_eq!(grid.cell(0), Cell::Cross);
/// assert_eq!(grid.x_count(), 1);
/// assert_eq!(grid.o_count(), 1);
/// assert_eq!(grid.empty_count(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a grid from a fixed cell array.
    ///
    /// The array is valid by construction: every element is a well-formed
    /// `Cell` and the length is fixed by the type.
    pub fn new(cells: [Cell; CELL_COUNT]) -> Self {
        Grid { cells }
    }

    /// Create an all-empty grid
    pub fn empty() -> Self {
        Grid {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Parse a grid from a 16-character string.
    ///
    /// Each character is one cell in row-major order: `'X'`, `'O'`, and
    /// `' '` or `'.'` for empty. Unlike label parsing, whitespace is
    /// significant because a space denotes an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridLength`] if the string is not exactly
    /// 16 characters, or [`Error::InvalidCellCharacter`] if any character
    /// is not a recognised cell value.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidGridLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Grid { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-15)
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Number of Cross marks on the board
    pub fn x_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Cross).count()
    }

    /// Number of Naught marks on the board
    pub fn o_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Naught).count()
    }

    /// Number of empty cells on the board
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Return a new grid with one cell replaced
    #[must_use = "with_cell returns a new grid; the original is unchanged"]
    pub fn with_cell(&self, index: usize, cell: Cell) -> Grid {
        let mut cells = self.cells;
        cells[index] = cell;
        Grid { cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(4) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
