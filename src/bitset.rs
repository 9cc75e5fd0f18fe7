//! A fixed-size bitset of sudoku digits
//!
//! The generator and validator constantly ask which digits a row, column
//! or block already contains. A `u16` with one bit per digit answers that
//! without allocating and should not be confusable with a plain integer,
//! so the mask gets its own type.

use crate::board::Digit;
use std::ops::{BitOr, BitOrAssign};

/// Set of digits, backed by a `u16` bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// Set containing all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Construct a set from a raw bitmask.
    ///
    /// # Panic
    /// Panics, if the mask contains bits above [`DigitSet::ALL`].
    pub fn from_bits(mask: u16) -> Self {
        assert!(mask <= Self::ALL.0);
        DigitSet(mask)
    }

    /// Return the raw bitmask backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the digits in this set that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Deletes all digits from this set that are present in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Checks if `self` contains `other`, which may be a single digit
    /// or another set.
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.0 & other.0 == other.0
    }

    /// Returns the number of digits in this set.
    pub fn len(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains any digit.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Digit {
    /// Returns a `DigitSet` with only this digit's bit set.
    pub fn as_set(self) -> DigitSet {
        DigitSet(1 << self.as_index() as u8)
    }
}

impl From<Digit> for DigitSet {
    fn from(digit: Digit) -> DigitSet {
        digit.as_set()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitOr<Digit> for DigitSet {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, digit: Digit) -> Self {
        self | digit.as_set()
    }
}

impl BitOrAssign for DigitSet {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOrAssign<Digit> for DigitSet {
    #[inline(always)]
    fn bitor_assign(&mut self, digit: Digit) {
        *self |= digit.as_set();
    }
}

/// Iterator over the digits contained in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct Iter(u16);

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Digit::from_index(bit_pos))
    }
}
