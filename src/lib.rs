#![warn(missing_docs)]
//! The sudoku-engine library
//!
//! ## Overview
//!
//! sudoku-engine generates filled sudoku grids, carves playable puzzles
//! out of them and checks boards against the sudoku rules. It aims to
//! provide a simple API without having to deal with too many details.
//!
//! ## Example
//!
//! ```
//! use sudoku_engine::{Difficulty, Grid};
//!
//! // A filled grid without a source of randomness is canonical and solved.
//! let solution = Grid::generate_filled();
//! assert!(solution.is_solved());
//!
//! // Carving empties as many cells as the difficulty calls for.
//! let puzzle = solution.carve(Difficulty::Medium);
//! assert_eq!(puzzle.n_empty(), 40);
//! assert!(puzzle.is_consistent());
//! assert!(!puzzle.is_solved());
//!
//! // Grids convert to and from the line format, with `.` for empty cells.
//! let line = puzzle.to_str_line();
//! let reparsed = Grid::from_str_line(&line).unwrap();
//! assert_eq!(reparsed, puzzle);
//! ```
pub mod bitset;
pub mod board;
pub mod errors;
pub mod parse_errors;

mod carver;
mod consts;
mod game;
mod generator;
mod helper;
mod validate;

pub use crate::bitset::DigitSet;
pub use crate::board::{Block, Cell, Col, Digit, Grid, GridLine, House, Row};
pub use crate::carver::Difficulty;
pub use crate::game::Game;
