//! Errors that may be encountered when reading a grid from a string
use crate::board::{Block, Cell, Col, Row};
use std::fmt;

/// An unparseable character and where it was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number in `0..=80`, counted from left to right, top to bottom.
    pub cell: u8,
    /// The character that could not be parsed.
    pub ch: char,
}

impl InvalidEntry {
    /// Row of the offending cell.
    pub fn row(self) -> Row {
        Cell::new(self.cell).row()
    }

    /// Column of the offending cell.
    pub fn col(self) -> Col {
        Cell::new(self.cell).col()
    }

    /// Block of the offending cell.
    pub fn block(self) -> Block {
        Cell::new(self.cell).block()
    }
}

/// Error emitted when reading a grid in the line format.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum LineParseError {
    /// Valid cells are the digits 1 to 9 and `.`, `_` or `0` for empty cells
    InvalidEntry(InvalidEntry),
    /// The input stopped short of 81 cells. Contains the number of cells found.
    NotEnoughCells(u8),
    /// A valid cell followed the 81st instead of whitespace
    TooManyCells,
}

impl fmt::Display for LineParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LineParseError::InvalidEntry(InvalidEntry { cell, ch }) => {
                write!(f, "invalid character '{}' in cell {}", ch, cell)
            }
            LineParseError::NotEnoughCells(n_cells) => {
                write!(f, "grid has {} cells instead of the required 81", n_cells)
            }
            LineParseError::TooManyCells => f.write_str(
                "grid has more than 81 cells or a comment without separating whitespace",
            ),
        }
    }
}

impl std::error::Error for LineParseError {}
