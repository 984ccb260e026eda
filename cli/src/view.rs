use std::fmt;

use minefield_core::{CellDisplay, Coord, Coord2, FlagOutcome, RevealOutcome, ToNdIndex};
use ndarray::Array2;

/// What the player currently sees. Only ever updated from engine outcomes.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardView {
    cells: Array2<CellDisplay>,
}

impl BoardView {
    pub(crate) fn new(width: Coord, height: Coord) -> Self {
        Self {
            cells: Array2::from_elem([usize::from(height), usize::from(width)], CellDisplay::Hidden),
        }
    }

    pub(crate) fn cell(&self, coords: Coord2) -> CellDisplay {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn apply_reveal(&mut self, outcome: &RevealOutcome) {
        for changed in &outcome.changed_cells {
            self.cells[(changed.row, changed.col).to_nd_index()] = changed.display;
        }
    }

    pub(crate) fn apply_flag(&mut self, coords: Coord2, outcome: FlagOutcome) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if matches!(cell, CellDisplay::Hidden | CellDisplay::Flag) {
            *cell = outcome.display();
        }
    }

    /// Uncovers every mine that is still hidden, flagged mines keep their flag.
    pub(crate) fn show_mines(&mut self, mines: &[Coord2]) {
        for &coords in mines {
            let cell = &mut self.cells[coords.to_nd_index()];
            if *cell == CellDisplay::Hidden {
                *cell = CellDisplay::Mine;
            }
        }
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, cols) = self.cells.dim();

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.rows().into_iter().enumerate() {
            write!(f, "{:>3}", row)?;
            for cell in cells {
                write!(f, "{:>3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
