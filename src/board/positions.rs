//! Typed indices for the cells, rows, columns and blocks of the board.
#![allow(unused, missing_docs)]

use crate::consts::*;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}

#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}

#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    cell / 27 * 3 + cell % 9 / 3
}

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                pub fn get(self) -> u8 {
                    self.0
                }

                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
    House: 27,
);

macro_rules! impl_from {
    ( $( $from:ty, $to:ty, |$arg:ident| $code:block ),* $(,)* ) => {
        $(
            impl From<$from> for $to {
                fn from($arg: $from) -> $to {
                    let $arg = $arg.0;
                    <$to>::new($code)
                }
            }
        )*
    };
}

impl_from!(
    Row, House, |r| { r },
    Col, House, |c| { c + COL_OFFSET },
    Block, House, |b| { b + BLOCK_OFFSET },
    Cell, Row, |c| { row(c) },
    Cell, Col, |c| { col(c) },
    Cell, Block, |c| { block(c) },
);

pub(crate) trait IntoHouse: Into<House> {
    #[inline(always)]
    fn house(self) -> House {
        self.into()
    }
}

impl<T: Into<House>> IntoHouse for T {}

impl Cell {
    /// The cell at the crossing of `row` and `col`.
    pub fn from_row_col(row: Row, col: Col) -> Cell {
        Cell::new(row.0 * 9 + col.0)
    }

    #[inline(always)]
    pub fn row(self) -> Row {
        Row::from(self)
    }

    #[inline(always)]
    pub fn col(self) -> Col {
        Col::from(self)
    }

    #[inline(always)]
    pub fn block(self) -> Block {
        Block::from(self)
    }

    /// The row, column and block houses containing this cell.
    pub fn houses(self) -> [House; 3] {
        [self.row().house(), self.col().house(), self.block().house()]
    }
}

impl Row {
    /// Iterates over the cells of this row, left to right.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let first = self.0 * 9;
        (first..first + 9).map(Cell::new)
    }
}

impl Col {
    /// Iterates over the cells of this column, top to bottom.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.0..81).step_by(9).map(Cell::new)
    }
}

impl Block {
    /// Iterates over the cells of this block, left to right, top to bottom.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let corner = self.0 / 3 * 27 + self.0 % 3 * 3;
        (0..3)
            .flat_map(move |band_row| {
                let first = corner + 9 * band_row;
                first..first + 3
            })
            .map(Cell::new)
    }
}
