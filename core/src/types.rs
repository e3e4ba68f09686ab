use ndarray::Array2;

/// Single coordinate axis used for board rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional board coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Unchecked coordinates as typed by the player, may be negative or off the board.
pub type RawCoord2 = (i64, i64);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts raw coordinates into board coordinates when they fall inside `size`.
pub fn checked_coords((row, col): RawCoord2, size: Coord2) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    (row < size.0 && col < size.1).then_some((row, col))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up to eight neighbours of a cell, never yielding the cell itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(center: Coord2, size: Coord2) -> Vec<Coord2> {
        let grid: Array2<bool> = Array2::default(size.to_nd_index());
        grid.iter_neighbors(center).collect()
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(neighbors((0, 0), (5, 5)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((4, 4), (5, 5)).len(), 3);
    }

    #[test]
    fn edge_and_interior_counts() {
        assert_eq!(neighbors((0, 2), (5, 5)).len(), 5);
        assert_eq!(neighbors((2, 2), (5, 5)).len(), 8);
        assert!(!neighbors((2, 2), (5, 5)).contains(&(2, 2)));
    }

    #[test]
    fn checked_coords_rejects_outside_values() {
        assert_eq!(checked_coords((4, 4), (5, 5)), Some((4, 4)));
        assert_eq!(checked_coords((5, 0), (5, 5)), None);
        assert_eq!(checked_coords((-1, 0), (5, 5)), None);
        assert_eq!(checked_coords((0, 300), (5, 5)), None);
    }
}
