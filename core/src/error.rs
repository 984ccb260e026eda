use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigError),
    #[error("Coordinates ({row}, {col}) are outside the grid")]
    OutOfBounds { row: Coord, col: Coord },
}

/// Why a grid could not be built.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width must be at least 1")]
    ZeroWidth,
    #[error("height must be at least 1")]
    ZeroHeight,
    #[error("{mines} mines do not fit a grid of {cells} cells, at least one cell must be safe")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
