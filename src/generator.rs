//! Filling of empty grids via backtracking search.
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::bitset::DigitSet;
use crate::board::{Cell, Digit, Grid};
use crate::helper::HouseArray;

/// Backtracking filler for sudoku grids.
///
/// Tracks the digits already entered in every house so the legal digits
/// for a cell are one mask lookup away.
#[derive(Debug)]
pub(crate) struct Filler {
    grid: Grid,
    house_digits: HouseArray<DigitSet>,
    n_backtracks: u32,
}

impl Filler {
    fn new() -> Filler {
        Filler {
            grid: Grid::empty(),
            house_digits: HouseArray([DigitSet::NONE; 27]),
            n_backtracks: 0,
        }
    }

    /// Digits not yet contained in any house of `cell`.
    fn free_digits(&self, cell: Cell) -> DigitSet {
        let [row, col, block] = cell.houses();
        DigitSet::ALL
            .without(self.house_digits[row] | self.house_digits[col] | self.house_digits[block])
    }

    fn place(&mut self, cell: Cell, digit: Digit) {
        self.grid.set(cell, digit);
        for &house in &cell.houses() {
            self.house_digits[house] |= digit;
        }
    }

    fn unplace(&mut self, cell: Cell, digit: Digit) {
        self.grid.clear(cell);
        for &house in &cell.houses() {
            self.house_digits[house].remove(digit.as_set());
        }
        self.n_backtracks += 1;
    }

    fn next_empty(&self, cell_index: u8) -> Option<Cell> {
        (cell_index..81)
            .map(Cell::new)
            .find(|&cell| self.grid.get(cell).is_none())
    }

    /// Fills all cells from `cell_index` onwards, trying digits in
    /// ascending order. Returns false if no combination works out.
    fn fill_from(&mut self, cell_index: u8) -> bool {
        let cell = match self.next_empty(cell_index) {
            Some(cell) => cell,
            None => return true,
        };
        for digit in self.free_digits(cell) {
            self.place(cell, digit);
            if self.fill_from(cell.get() + 1) {
                return true;
            }
            self.unplace(cell, digit);
        }
        false
    }

    /// Like [`Filler::fill_from`], but tries the digits of every cell in
    /// random order.
    fn fill_from_randomized<R: Rng>(&mut self, cell_index: u8, rng: &mut R) -> bool {
        let cell = match self.next_empty(cell_index) {
            Some(cell) => cell,
            None => return true,
        };
        let mut digits = self.free_digits(cell).into_iter().collect::<Vec<_>>();
        digits.shuffle(rng);
        for digit in digits {
            self.place(cell, digit);
            if self.fill_from_randomized(cell.get() + 1, rng) {
                return true;
            }
            self.unplace(cell, digit);
        }
        false
    }

    pub(crate) fn fill_deterministic() -> Grid {
        let mut filler = Filler::new();
        if !filler.fill_from(0) {
            // an empty grid constrains nothing, the search cannot exhaust
            unreachable!("backtracking failed on an empty grid");
        }
        debug!("filled grid after {} backtracks", filler.n_backtracks);
        filler.grid
    }

    pub(crate) fn fill_randomized<R: Rng>(rng: &mut R) -> Grid {
        let mut filler = Filler::new();
        // fill the first row with a permutation of 1..=9
        // not necessary, but it skips the most uniform part of the search
        let mut digits = Digit::all().collect::<Vec<_>>();
        digits.shuffle(rng);
        for (cell, digit) in (0..9).map(Cell::new).zip(digits) {
            filler.place(cell, digit);
        }
        if !filler.fill_from_randomized(9, rng) {
            unreachable!("backtracking failed on an empty grid");
        }
        debug!(
            "filled randomized grid after {} backtracks",
            filler.n_backtracks
        );
        filler.grid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deterministic_fill_takes_smallest_digits_first() {
        let grid = Filler::fill_deterministic();
        let first_row = (0..9)
            .map(Cell::new)
            .map(|cell| grid.get(cell).unwrap().get())
            .collect::<Vec<_>>();
        assert_eq!(first_row, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn house_masks_follow_placements() {
        let mut filler = Filler::new();
        let cell = Cell::new(40);
        let digit = Digit::new(5);
        filler.place(cell, digit);
        for &house in &cell.houses() {
            assert!(filler.house_digits[house].contains(digit));
        }
        assert!(!filler.free_digits(Cell::new(36)).contains(digit));

        filler.unplace(cell, digit);
        assert!(filler.free_digits(Cell::new(36)).contains(digit));
        assert_eq!(filler.grid, Grid::empty());
    }
}
