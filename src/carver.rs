//! Carving of playable puzzles out of filled grids.
use std::fmt;

use log::debug;
use rand::Rng;

use crate::board::{Cell, Col, Grid, Row};

/// Difficulty tier of a carved puzzle, given by the number of cells
/// emptied out of the filled grid.
///
/// More empty cells leave fewer clues to go on. No deeper grading of
/// the required solving techniques is attempted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Difficulty {
    /// 30 empty cells
    Easy,
    /// 40 empty cells
    Medium,
    /// 50 empty cells
    Hard,
}

impl Difficulty {
    /// The number of cells emptied for this tier.
    pub fn empty_cells(self) -> u8 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 40,
            Difficulty::Hard => 50,
        }
    }

    /// Parses a difficulty tag. Unknown tags fall back to [`Difficulty::Easy`].
    pub fn from_tag(tag: &str) -> Difficulty {
        match tag {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// The tag of this tier, the inverse of [`Difficulty::from_tag`].
    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Empties `n_cells` filled cells of `grid`, chosen by drawing random
/// row and column numbers until enough draws hit a filled cell.
pub(crate) fn carve<R: Rng>(grid: Grid, n_cells: u8, rng: &mut R) -> Grid {
    let mut puzzle = grid;
    // clamp so the sampling loop cannot run out of cells to empty
    let n_cells = n_cells.min(puzzle.n_clues());
    let mut remaining = n_cells;
    let mut n_draws = 0u32;
    while remaining > 0 {
        n_draws += 1;
        let row = Row::new(rng.gen_range(0..9));
        let col = Col::new(rng.gen_range(0..9));
        if puzzle.clear(Cell::from_row_col(row, col)).is_some() {
            remaining -= 1;
        }
    }
    debug!("emptied {} cells in {} draws", n_cells, n_draws);
    puzzle
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Difficulty;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Difficulty {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.tag())
        }
    }

    impl<'de> Deserialize<'de> for Difficulty {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
            let tag = String::deserialize(deserializer)?;
            Ok(Difficulty::from_tag(&tag))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tags_round_trip() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::from_tag(difficulty.tag()), difficulty);
        }
    }

    #[test]
    fn unknown_tags_fall_back_to_easy() {
        for tag in &["expert", "EASY", "", "42"] {
            assert_eq!(Difficulty::from_tag(tag), Difficulty::Easy);
        }
    }

    #[test]
    fn tier_table() {
        let tiers = Difficulty::iter()
            .map(|difficulty| (difficulty.tag(), difficulty.empty_cells()))
            .collect::<Vec<_>>();
        assert_eq!(tiers, [("easy", 30), ("medium", 40), ("hard", 50)]);
    }
}
