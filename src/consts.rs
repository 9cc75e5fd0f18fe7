// Numeric facts of the fixed 9x9 board layout.

pub(crate) const N_CELLS: usize = 81;

// houses are numbered rows first, then cols, then blocks
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
