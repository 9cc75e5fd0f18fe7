//! Checks of grids against the sudoku rules.
use crate::bitset::DigitSet;
use crate::board::{Block, Cell, Col, Grid, Row};

/// Checks rows, columns and blocks in a single pass over the grid.
///
/// Rows and columns share the pass by walking the grid once in row-major
/// and once in column-major order with swapped indices.
pub(crate) fn is_solved(grid: &Grid) -> bool {
    for house in 0..9 {
        let mut row_digits = DigitSet::NONE;
        let mut col_digits = DigitSet::NONE;
        for position in 0..9 {
            let row_cell = Cell::from_row_col(Row::new(house), Col::new(position));
            match grid.get(row_cell) {
                None => return false,
                Some(digit) if row_digits.contains(digit) => return false,
                Some(digit) => row_digits |= digit,
            }
            let col_cell = Cell::from_row_col(Row::new(position), Col::new(house));
            if let Some(digit) = grid.get(col_cell) {
                if col_digits.contains(digit) {
                    return false;
                }
                col_digits |= digit;
            }
        }
    }
    Block::all().all(|block| digits_distinct(grid, block.cells()))
}

/// Checks that no digit repeats in any row, column or block, ignoring
/// empty cells.
pub(crate) fn is_consistent(grid: &Grid) -> bool {
    Row::all().all(|row| digits_distinct(grid, row.cells()))
        && Col::all().all(|col| digits_distinct(grid, col.cells()))
        && Block::all().all(|block| digits_distinct(grid, block.cells()))
}

fn digits_distinct(grid: &Grid, cells: impl Iterator<Item = Cell>) -> bool {
    let mut seen = DigitSet::NONE;
    for cell in cells {
        if let Some(digit) = grid.get(cell) {
            if seen.contains(digit) {
                return false;
            }
            seen |= digit;
        }
    }
    true
}
