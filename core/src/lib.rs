#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Shape and mine density of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight.into());
        }
        let cells = mult(width, height);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn contains(&self, row: Coord, col: Coord) -> bool {
        row < self.height && col < self.width
    }

    pub(crate) fn validate_coords(&self, row: Coord, col: Coord) -> Result<Coord2> {
        if self.contains(row, col) {
            Ok((row, col))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    pub(crate) const fn grid_shape(&self) -> [usize; 2] {
        [self.height as usize, self.width as usize]
    }
}

/// Where the mines are. Fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    config: GameConfig,
    mine_mask: Array2<bool>,
}

impl MineLayout {
    /// Builds a layout with mines at exactly the given `(row, col)` cells, duplicates are counted once.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        // validates the shape, mines are checked once deduplicated
        let shape = GameConfig::new(width, height, 0)?;
        let mut mine_mask: Array2<bool> = Array2::default(shape.grid_shape());

        for &(row, col) in mine_coords {
            let coords = shape.validate_coords(row, col)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        let mines = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        let config = GameConfig::new(width, height, mines)?;

        Ok(Self { config, mine_mask })
    }

    pub(crate) fn from_parts(config: GameConfig, mine_mask: Array2<bool>) -> Self {
        Self { config, mine_mask }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// Every mined cell in row-major order.
    pub fn mine_locations(&self) -> Vec<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Where a game stands.
///
/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What the presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellDisplay {
    Hidden,
    Count(u8),
    Flag,
    Mine,
}

impl CellDisplay {
    /// Single character rendering: `.` hidden, `F` flagged, `0`-`8` counts, `X` mine.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '.',
            Self::Flag => 'F',
            Self::Count(count) if count <= 8 => (b'0' + count) as char,
            Self::Count(_) => '?',
            Self::Mine => 'X',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedCell {
    pub row: Coord,
    pub col: Coord,
    pub display: CellDisplay,
}

/// Outcome of revealing a cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    /// State of the game after the move.
    pub state: GameState,
    /// Every cell whose display changed, in the order it was revealed.
    pub changed_cells: Vec<ChangedCell>,
}

impl RevealOutcome {
    pub(crate) const fn unchanged(state: GameState) -> Self {
        Self {
            state,
            changed_cells: Vec::new(),
        }
    }

    /// Whether this outcome could have caused an update to the game
    pub fn has_update(&self) -> bool {
        !self.changed_cells.is_empty()
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagOutcome {
    pub flagged: bool,
}

impl FlagOutcome {
    pub const fn display(self) -> CellDisplay {
        if self.flagged {
            CellDisplay::Flag
        } else {
            CellDisplay::Hidden
        }
    }
}
