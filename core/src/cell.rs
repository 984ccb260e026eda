use serde::{Deserialize, Serialize};

use crate::CellDisplay;

/// Reveal progress of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    /// Stepped on, holding the number of mines among its neighbors.
    Revealed(u8),
    /// Stepped on and blown up.
    Mine,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub has_mine: bool,
    /// Only ever set while `state` is `Hidden`.
    pub flagged: bool,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self.state, CellState::Hidden)
    }

    /// What a player is allowed to see of this cell.
    pub const fn display(self) -> CellDisplay {
        match self.state {
            CellState::Hidden if self.flagged => CellDisplay::Flag,
            CellState::Hidden => CellDisplay::Hidden,
            CellState::Revealed(count) => CellDisplay::Count(count),
            CellState::Mine => CellDisplay::Mine,
        }
    }
}
