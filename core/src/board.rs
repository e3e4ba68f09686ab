use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine placement plus what the player has done to every cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    mine_layout: MineLayout,
    cells: Array2<CellVisibility>,
}

impl Board {
    pub fn new(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mine_layout = MineLayout::from_mine_coords(config.size, mine_coords)?;
        Ok(Self::from_layout(config, mine_layout))
    }

    pub fn from_layout(config: BoardConfig, mine_layout: MineLayout) -> Self {
        if mine_layout.mine_count() != config.mines {
            log::warn!(
                "Board declares {} mines but {} were placed",
                config.mines,
                mine_layout.mine_count()
            );
        }
        Self {
            config,
            mine_layout,
            cells: Array2::default(config.size.to_nd_index()),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn cell_at(&self, coords: Coord2) -> CellVisibility {
        self.cells[coords.to_nd_index()]
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    /// Uncovers a cell. Uncovering an already revealed cell yields the same count again.
    pub fn reveal(&mut self, coords: RawCoord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.mine_layout[coords] {
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(RevealOutcome::Mine);
        }

        let count = self.mine_layout.adjacent_mine_count(coords);
        self.cells[coords.to_nd_index()] = CellVisibility::Revealed(count);
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);
        Ok(RevealOutcome::Safe(count))
    }

    /// Flags a cell as a mine, whatever it held before.
    pub fn mark(&mut self, coords: RawCoord2) -> Result<()> {
        self.set_visibility(coords, CellVisibility::Flagged)
    }

    /// Flags a cell as uncertain, whatever it held before.
    pub fn guess(&mut self, coords: RawCoord2) -> Result<()> {
        self.set_visibility(coords, CellVisibility::Guessed)
    }

    fn set_visibility(&mut self, coords: RawCoord2, visibility: CellVisibility) -> Result<()> {
        let coords = self.mine_layout.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        log::trace!("Cell at {:?}: {:?} -> {:?}", coords, *cell, visibility);
        *cell = visibility;
        Ok(())
    }

    /// Every mine is flagged and every safe cell is revealed.
    ///
    /// A flag on a safe cell counts for neither tally, so it keeps the game going without any
    /// feedback to the player.
    pub fn is_won(&self) -> bool {
        let mut flagged_mines: CellCount = 0;
        let mut revealed_safe: CellCount = 0;

        for ((row, col), cell) in self.cells.indexed_iter() {
            let has_mine = self.mine_layout[(row as Coord, col as Coord)];
            if has_mine && cell.is_flagged() {
                flagged_mines += 1;
            } else if !has_mine && cell.is_revealed() {
                revealed_safe += 1;
            }
        }

        flagged_mines == self.config.mines && revealed_safe == self.config.safe_cells()
    }

    /// Display tokens for every cell, mines get exposed when `no_fog` is set.
    pub fn render(&self, no_fog: bool) -> Array2<CellToken> {
        Array2::from_shape_fn(self.cells.dim(), |(row, col)| CellToken {
            visibility: self.cells[(row, col)],
            exposed_mine: no_fog && self.mine_layout[(row as Coord, col as Coord)],
        })
    }
}
