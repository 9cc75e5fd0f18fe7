// Internal helper types, like arrays that can only be indexed
// by the right position structs

use crate::board::House;
use std::ops::{Index, IndexMut};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each row, column and block
pub(crate) struct HouseArray<T>(pub [T; 27]);

impl<T, IDX: Into<House>> Index<IDX> for HouseArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: IDX) -> &Self::Output {
        &self.0[idx.into().as_index()]
    }
}

impl<T, IDX: Into<House>> IndexMut<IDX> for HouseArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: IDX) -> &mut Self::Output {
        &mut self.0[idx.into().as_index()]
    }
}
