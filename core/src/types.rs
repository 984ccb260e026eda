use ndarray::Array2;

/// Single coordinate axis used for grid width, height, and row/column positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

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

pub trait NeighborIterExt {
    /// Up to 8 surrounding cells, diagonals included.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;

    /// Up to 4 cells sharing an edge with `index`.
    fn iter_cardinal_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::adjacent(index, grid_bounds(self))
    }

    fn iter_cardinal_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::cardinal(index, grid_bounds(self))
    }
}

fn grid_bounds<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    // grids are only ever built from `Coord` dimensions
    (rows as Coord, cols as Coord)
}

const ADJACENT: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const CARDINAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub fn adjacent(center: Coord2, bounds: Coord2) -> Self {
        Self::with_displacements(center, bounds, &ADJACENT)
    }

    pub fn cardinal(center: Coord2, bounds: Coord2) -> Self {
        Self::with_displacements(center, bounds, &CARDINAL)
    }

    fn with_displacements(
        center: Coord2,
        bounds: Coord2,
        displacements: &'static [(isize, isize)],
    ) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn adjacent_skips_cells_outside_the_grid() {
        let corner: Vec<_> = NeighborIter::adjacent((0, 0), (3, 3)).collect();
        assert_eq!(corner, [(0, 1), (1, 0), (1, 1)]);

        let edge = NeighborIter::adjacent((0, 1), (3, 3)).count();
        assert_eq!(edge, 5);

        let interior = NeighborIter::adjacent((1, 1), (3, 3)).count();
        assert_eq!(interior, 8);
    }

    #[test]
    fn cardinal_never_yields_diagonals() {
        let around: Vec<_> = NeighborIter::cardinal((1, 1), (3, 3)).collect();
        assert_eq!(around, [(0, 1), (2, 1), (1, 0), (1, 2)]);

        let corner: Vec<_> = NeighborIter::cardinal((2, 2), (3, 3)).collect();
        assert_eq!(corner, [(1, 2), (2, 1)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::adjacent((0, 0), (1, 1)).count(), 0);
        assert_eq!(NeighborIter::cardinal((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn mult_widens_to_cell_count() {
        assert_eq!(mult(3, 4), 12);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
