//! Host-side state of a single sudoku game.
use log::debug;
use rand::Rng;

use crate::board::{Cell, Digit, Grid};
use crate::carver::Difficulty;

/// A sudoku game in progress.
///
/// Keeps the carved puzzle next to the player's board so the givens stay
/// protected from edits, and rechecks the board against the sudoku rules
/// after every change.
#[derive(Clone, Debug)]
pub struct Game {
    puzzle: Grid,
    board: Grid,
    difficulty: Option<Difficulty>,
    completed: bool,
}

impl Game {
    /// Deals a new game of the given difficulty.
    pub fn new(difficulty: Difficulty) -> Game {
        Game::with_rng(difficulty, &mut rand::thread_rng())
    }

    /// Like [`Game::new`], but with a caller-supplied source of randomness.
    pub fn with_rng<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Game {
        let solution = Grid::generate_filled_with(rng);
        let puzzle = solution.carve_with(difficulty, rng);
        debug!("dealt {} game with {} clues", difficulty, puzzle.n_clues());
        Game {
            puzzle,
            board: puzzle,
            difficulty: Some(difficulty),
            completed: false,
        }
    }

    /// Creates a game on an empty board, with no givens and no difficulty.
    /// Every cell is editable.
    pub fn blank() -> Game {
        Game {
            puzzle: Grid::empty(),
            board: Grid::empty(),
            difficulty: None,
            completed: false,
        }
    }

    /// Enters a digit into the given cell, unless the cell is a given.
    ///
    /// Returns whether the board is completed afterwards.
    pub fn set(&mut self, cell: Cell, digit: Digit) -> bool {
        if !self.is_given(cell) {
            self.board.set(cell, digit);
            self.completed = self.board.is_solved();
        }
        self.completed
    }

    /// Empties the given cell, unless the cell is a given.
    ///
    /// Returns whether the board is completed afterwards.
    pub fn clear(&mut self, cell: Cell) -> bool {
        if !self.is_given(cell) {
            self.board.clear(cell);
            self.completed = self.board.is_solved();
        }
        self.completed
    }

    /// Throws the game away and starts over on a blank board.
    pub fn clear_board(&mut self) {
        *self = Game::blank();
    }

    /// The player's board, givens included.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The carved puzzle this game started from.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// The difficulty the game was dealt at, if it was dealt at all.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Whether the cell was filled in by the deal and cannot be edited.
    pub fn is_given(&self, cell: Cell) -> bool {
        self.puzzle.get(cell).is_some()
    }

    /// Whether the board is currently solved.
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
