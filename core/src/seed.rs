use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::*;

/// A validated seed: board dimensions, mine count and where the mines are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    config: BoardConfig,
    mine_layout: MineLayout,
}

impl Seed {
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    /// Fresh board with every cell hidden.
    pub fn board(&self) -> Board {
        Board::from_layout(self.config, self.mine_layout.clone())
    }

    /// Reads and parses a seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SeedError::NotFound(path.to_path_buf()),
            _ => SeedError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;
        log::debug!("Read seed from {}", path.display());
        Self::parse(&input)
    }

    /// Parses `rows cols mines` followed by `row col` pairs, all whitespace separated.
    pub fn parse(input: &str) -> Result<Self, SeedError> {
        use Malformation::*;

        let mut tokens = input.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(SeedError::Empty);
        }

        let mut header = [0i64; 3];
        for value in header.iter_mut() {
            *value = next_int(&mut tokens).ok_or(SeedError::Malformed(Header))?;
        }
        let [rows, cols, mines] = header;

        let size = match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => return Err(SeedError::Malformed(Dimensions)),
        };
        // anything outside the u16 range is rejected as a bad count right after the size check
        let mines = CellCount::try_from(mines).unwrap_or(0);
        let config = BoardConfig::new(size, mines).map_err(SeedError::Malformed)?;

        let mut mine_coords = Vec::new();
        while let Some(row) = tokens.next() {
            let row = row.parse::<i64>().map_err(|_| SeedError::Malformed(MineCoordinate))?;
            let col = next_int(&mut tokens).ok_or(SeedError::Malformed(MineCoordinate))?;
            let coords =
                checked_coords((row, col), size).ok_or(SeedError::Malformed(MineOutOfBounds))?;
            log::trace!("Seed mine at {:?}", coords);
            mine_coords.push(coords);
        }

        let mine_layout = MineLayout::from_mine_coords(size, &mine_coords)
            .map_err(|_| SeedError::Malformed(MineOutOfBounds))?;
        if mine_layout.mine_count() != config.mines {
            log::warn!(
                "Seed declares {} mines but lists {} distinct cells",
                config.mines,
                mine_layout.mine_count()
            );
        }

        log::debug!(
            "Parsed seed: {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );
        Ok(Self {
            config,
            mine_layout,
        })
    }
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<i64> {
    tokens.next()?.parse().ok()
}
