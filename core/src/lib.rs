//! Game-state engine for a seeded, turn based console minesweeper.
//!
//! A [`Seed`] is parsed into a validated [`BoardConfig`] plus mine coordinates, a [`Board`] tracks
//! what the player has uncovered and a [`GameSession`] runs the command loop against a
//! [`Frontend`].

use core::ops::RangeInclusive;
use std::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use command::*;
pub use error::*;
pub use seed::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod command;
mod error;
mod seed;
mod session;
mod tile;
mod types;

/// Allowed number of rows and of columns.
pub const SIZE_RANGE: RangeInclusive<Coord> = 5..=10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks dimensions first, then that at least one cell is left without a mine.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self, Malformation> {
        if !SIZE_RANGE.contains(&size.0) || !SIZE_RANGE.contains(&size.1) {
            return Err(Malformation::Dimensions);
        }
        let config = Self::new_unchecked(size, mines);
        if mines < 1 || mines >= config.total_cells() {
            return Err(Malformation::MineCount);
        }
        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Immutable placement of mines, fixed once the board is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds the layout, placing a mine twice at the same cell is not an error.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(CommandError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn validate_coords(&self, coords: RawCoord2) -> Result<Coord2> {
        checked_coords(coords, self.size()).ok_or(CommandError::OutOfBounds)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mines among the clipped 3x3 neighbourhood, the cell itself never counts.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count();
        // at most eight neighbours
        count as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

/// Result of uncovering a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was safe, carries its adjacent mine count.
    Safe(u8),
    /// The cell held a mine, the game is lost.
    Mine,
}

impl RevealOutcome {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_checks_dimensions_before_mines() {
        assert_eq!(BoardConfig::new((4, 5), 1), Err(Malformation::Dimensions));
        assert_eq!(BoardConfig::new((5, 11), 1), Err(Malformation::Dimensions));
        assert_eq!(BoardConfig::new((3, 3), 100), Err(Malformation::Dimensions));
    }

    #[test]
    fn config_mine_bounds() {
        assert_eq!(BoardConfig::new((5, 5), 0), Err(Malformation::MineCount));
        assert_eq!(BoardConfig::new((5, 5), 25), Err(Malformation::MineCount));
        let config = BoardConfig::new((5, 5), 24).unwrap();
        assert_eq!(config.safe_cells(), 1);
        assert_eq!((config.rows(), config.cols()), (5, 5));
    }

    #[test]
    fn layout_ignores_duplicate_mines() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(1, 1), (1, 1), (2, 3)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 23);
        assert!(layout.contains_mine((2, 3)));
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((5, 5), &[(5, 0)]),
            Err(CommandError::OutOfBounds)
        );
    }

    #[test]
    fn reveal_outcome_mine() {
        assert!(RevealOutcome::Mine.is_mine());
        assert!(!RevealOutcome::Safe(3).is_mine());
    }

    #[test]
    fn adjacent_count_excludes_the_mine_itself() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(0, 0), (0, 1), (1, 0)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((0, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((4, 4)), 0);
    }
}
