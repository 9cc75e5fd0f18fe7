use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rand::Rng;

use crate::bitset::DigitSet;
use crate::board::positions::{col, row};
use crate::board::{Cell, Digit};
use crate::carver::Difficulty;
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::{carver, generator, validate};

/// The main structure exposing all the functionality of the library.
///
/// A 9x9 sudoku board in row-major order. Every cell is either empty or
/// holds a [`Digit`] from 1 to 9.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid([Option<Digit>; N_CELLS]);

impl Grid {
    /// Creates a grid with all cells empty.
    pub fn empty() -> Grid {
        Grid([None; N_CELLS])
    }

    /// Creates a grid from a byte array, going from left to right, top to bottom.
    ///
    /// `0` marks an empty cell, `1..=9` a filled one. Returns an error if
    /// any byte is above 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Grid, FromBytesError> {
        let mut grid = Grid::empty();
        for (slot, &byte) in grid.0.iter_mut().zip(bytes.iter()) {
            match byte {
                0 => {}
                1..=9 => *slot = Some(Digit::new(byte)),
                _ => return Err(FromBytesError(())),
            }
        }
        Ok(grid)
    }

    /// Creates a grid from a byte slice, going from left to right, top to bottom.
    ///
    /// Like [`Grid::from_bytes`], but fails fast when the slice is not
    /// exactly 81 bytes long.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Grid, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; 81];
        array.copy_from_slice(bytes);
        Ok(Grid::from_bytes(array)?)
    }

    /// Returns the bytes of the grid, going from left to right, top to bottom.
    /// Empty cells are given as `0`.
    pub fn to_bytes(self) -> [u8; 81] {
        let mut bytes = [0; 81];
        for (byte, cell) in bytes.iter_mut().zip(self.iter()) {
            *byte = cell.map_or(0, Digit::get);
        }
        bytes
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format contains the digits of the grid in one line, going
    /// from left to right, top to bottom. Empty cells are given as `.`,
    /// `_` or `0`. After 81 cells, everything following a whitespace is
    /// ignored as a comment.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = Grid::empty();
        let mut n_cells: u8 = 0;
        for ch in s.chars() {
            if n_cells == 81 {
                match ch.is_whitespace() {
                    true => break,
                    false => return Err(LineParseError::TooManyCells),
                }
            }
            match ch {
                '1'..='9' => grid.0[n_cells as usize] = Some(Digit::new(ch as u8 - b'0')),
                '.' | '_' | '0' => {}
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells,
                        ch,
                    }))
                }
            }
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(grid)
    }

    /// Returns the line format of the grid, with `.` for empty cells.
    ///
    /// The returned [`GridLine`] derefs to `&str`.
    pub fn to_str_line(&self) -> GridLine {
        let mut chars = [0; 81];
        for (ch, cell) in chars.iter_mut().zip(self.iter()) {
            *ch = match cell {
                Some(digit) => digit.get() + b'0',
                None => b'.',
            };
        }
        GridLine(chars)
    }

    /// Returns the digit in the given cell, if any.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        self.0[cell.as_index()]
    }

    /// Enters a digit into the given cell.
    pub fn set(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = Some(digit);
    }

    /// Empties the given cell, returning the digit it contained.
    pub fn clear(&mut self, cell: Cell) -> Option<Digit> {
        self.0[cell.as_index()].take()
    }

    /// Returns an iterator over the cells of the grid, going from left
    /// to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().copied()
    }

    /// Counts the filled cells of the grid.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|cell| cell.is_some()).count() as u8
    }

    /// Counts the empty cells of the grid.
    pub fn n_empty(&self) -> u8 {
        81 - self.n_clues()
    }

    /// Checks whether every cell contains a digit. Duplicates are not checked.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns the digits that can be entered into the given cell without
    /// repeating a digit of its row, column or block.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        let mut used = DigitSet::NONE;
        let neighbors = cell
            .row()
            .cells()
            .chain(cell.col().cells())
            .chain(cell.block().cells());
        for neighbor in neighbors {
            if let Some(digit) = self.get(neighbor) {
                used |= digit;
            }
        }
        DigitSet::ALL.without(used)
    }

    /// Generates a filled sudoku grid via backtracking.
    ///
    /// Cells are filled going from left to right, top to bottom, always
    /// trying the smallest legal digit first. Without a source of
    /// randomness this always returns the same, canonical solution. Use
    /// [`Grid::generate_filled_with`] for a random one.
    pub fn generate_filled() -> Grid {
        generator::Filler::fill_deterministic()
    }

    /// Generates a random filled sudoku grid via backtracking.
    pub fn generate_filled_with<R: Rng>(rng: &mut R) -> Grid {
        generator::Filler::fill_randomized(rng)
    }

    /// Carves a puzzle out of this grid by emptying randomly chosen cells,
    /// as many as the difficulty calls for.
    ///
    /// The grid itself is left untouched. No attempt is made to keep the
    /// solution of the puzzle unique.
    pub fn carve(&self, difficulty: Difficulty) -> Grid {
        self.carve_with(difficulty, &mut rand::thread_rng())
    }

    /// Like [`Grid::carve`], but with a caller-supplied source of randomness.
    pub fn carve_with<R: Rng>(&self, difficulty: Difficulty, rng: &mut R) -> Grid {
        self.carve_cells_with(difficulty.empty_cells(), rng)
    }

    /// Carves a puzzle out of this grid by emptying `n_cells` randomly
    /// chosen filled cells.
    ///
    /// If fewer than `n_cells` cells are filled, all of them are emptied.
    pub fn carve_cells_with<R: Rng>(&self, n_cells: u8, rng: &mut R) -> Grid {
        carver::carve(*self, n_cells, rng)
    }

    /// Checks whether the grid is solved, i.e. completely filled with no
    /// digit repeated in any row, column or block.
    pub fn is_solved(&self) -> bool {
        validate::is_solved(self)
    }

    /// Checks whether no digit is repeated in any row, column or block.
    ///
    /// Empty cells are ignored, so a partially filled grid can be
    /// consistent while not being solved.
    pub fn is_consistent(&self) -> bool {
        validate::is_consistent(self)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::empty()
    }
}

impl FromStr for Grid {
    type Err = LineParseError;

    fn from_str(s: &str) -> Result<Grid, LineParseError> {
        Grid::from_str_line(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, cell) in self.iter().enumerate() {
            let cell_nr = index as u8;
            match (row(cell_nr), col(cell_nr)) {
                (_, 3) | (_, 6) => write!(f, " ")?,  // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if cell_nr != 0 => write!(f, "\n")?,
                _ => {}
            }
            match cell {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

/// The line format of a [`Grid`], with `.` for empty cells.
#[derive(Copy, Clone)]
pub struct GridLine([u8; 81]);

impl Deref for GridLine {
    type Target = str;

    fn deref(&self) -> &str {
        // the line consists of ascii digits and dots only
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    struct LineVisitor;

    impl<'de> Visitor<'de> for LineVisitor {
        type Value = Grid;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku in line format, 81 cells")
        }

        fn visit_str<E: Error>(self, line: &str) -> Result<Grid, E> {
            Grid::from_str_line(line).map_err(Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            deserializer.deserialize_str(LineVisitor)
        }
    }
}
