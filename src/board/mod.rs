//! Types for cells, digits and other things on a sudoku board
mod digit;
mod grid;
pub mod positions;

pub use self::{
    digit::Digit,
    grid::{Grid, GridLine},
    positions::{Block, Cell, Col, House, Row},
};
