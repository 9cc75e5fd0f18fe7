use std::fmt;
use std::num::NonZeroU8;

/// A digit that can be entered in a cell of a sudoku.
///
/// Always in the range `1..=9`. An empty cell is the absence of a digit,
/// so grids store `Option<Digit>`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).expect("digit must lie in 1..=9")
    }

    /// Constructs a new `Digit`, or `None` for anything outside `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => NonZeroU8::new(digit).map(Digit),
            _ => None,
        }
    }

    /// Constructs a new `Digit` from a 0-based index, i.e. `digit - 1`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(index: u8) -> Self {
        Self::new(index + 1)
    }

    /// Iterates over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// The digit as a number.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// The digit shifted down by 1, for indexing into arrays and masks.
    pub fn as_index(self) -> usize {
        usize::from(self.get()) - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
