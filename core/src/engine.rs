use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the grid of a single game and applies every rule to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridEngine {
    mine_layout: MineLayout,
    board: Array2<Cell>,
    hidden_safe_count: CellCount,
    flag_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl GridEngine {
    /// Starts a game with mines placed from a fresh entropy seed.
    #[cfg(feature = "std")]
    pub fn new(width: Coord, height: Coord, mine_count: CellCount) -> Result<Self> {
        let config = GameConfig::new(width, height, mine_count)?;
        Ok(Self::generate(config, RandomMineGenerator::from_entropy()))
    }

    /// Starts a game whose mine placement is fully determined by `seed`.
    pub fn with_seed(width: Coord, height: Coord, mine_count: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(width, height, mine_count)?;
        Ok(Self::generate(config, RandomMineGenerator::new(seed)))
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let config = mine_layout.config();
        let board = Array2::from_shape_fn(config.grid_shape(), |(row, col)| Cell {
            has_mine: mine_layout.contains_mine((row as Coord, col as Coord)),
            ..Default::default()
        });
        Self {
            mine_layout,
            board,
            hidden_safe_count: config.safe_cells(),
            flag_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.config()
    }

    pub fn width(&self) -> Coord {
        self.config().width
    }

    pub fn height(&self) -> Coord {
        self.config().height
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config().mines
    }

    /// Safe cells that still have to be revealed to win.
    pub fn hidden_safe_count(&self) -> CellCount {
        self.hidden_safe_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.config().mines as isize) - (self.flag_count as isize)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, row: Coord, col: Coord) -> Result<Cell> {
        let coords = self.config().validate_coords(row, col)?;
        Ok(self.board[coords.to_nd_index()])
    }

    /// Number of mines among the up to 8 cells around `(row, col)`.
    pub fn neighbor_mine_count(&self, row: Coord, col: Coord) -> Result<u8> {
        let coords = self.config().validate_coords(row, col)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    /// Every mined cell in row-major order, regardless of what has been revealed.
    pub fn mine_locations(&self) -> Vec<Coord2> {
        self.mine_layout.mine_locations()
    }

    /// Flag or unflag a hidden cell. Revealed cells and finished games are left untouched.
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<FlagOutcome> {
        let coords = self.config().validate_coords(row, col)?;
        let cell = &mut self.board[coords.to_nd_index()];

        if self.state.is_finished() || !cell.is_hidden() {
            return Ok(FlagOutcome {
                flagged: cell.flagged,
            });
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        log::debug!("Flag at {:?} set to {}", coords, cell.flagged);

        Ok(FlagOutcome {
            flagged: cell.flagged,
        })
    }

    /// Step on a cell, opening the surrounding area when it has no adjacent mines.
    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<RevealOutcome> {
        let coords = self.config().validate_coords(row, col)?;

        if self.state.is_finished() || !self.board[coords.to_nd_index()].is_hidden() {
            return Ok(RevealOutcome::unchanged(self.state));
        }

        if self.board[coords.to_nd_index()].has_mine {
            return Ok(self.explode(coords));
        }

        let mut changed_cells = Vec::new();
        let count = self.open_cell(coords, &mut changed_cells);
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);

        if count == 0 {
            self.flood_fill(coords, &mut changed_cells);
        }

        log::debug!("Remaining safe cells: {}", self.hidden_safe_count);
        if self.hidden_safe_count == 0 {
            self.state = GameState::Won;
            log::debug!("Game won");
        }
        log::trace!("Field after reveal:\n{}", self);

        Ok(RevealOutcome {
            state: self.state,
            changed_cells,
        })
    }

    /// Opens every hidden cell reachable from `origin` through cardinal steps over zero-count cells.
    fn flood_fill(&mut self, origin: Coord2, changed_cells: &mut Vec<ChangedCell>) {
        let mut to_visit = Vec::from([origin]);

        while let Some(zero_coords) = to_visit.pop() {
            for pos in self.board.iter_cardinal_neighbors(zero_coords) {
                let cell = self.board[pos.to_nd_index()];
                // guard so the cascade never steps onto a mine implicitly
                if !cell.is_hidden() || cell.has_mine {
                    continue;
                }

                let count = self.open_cell(pos, changed_cells);
                log::trace!("Flood opened cell at {:?}, mine count: {}", pos, count);

                if count == 0 {
                    to_visit.push(pos);
                }
            }
        }
    }

    /// Turns a hidden safe cell into a revealed one, dropping any flag on it.
    fn open_cell(&mut self, coords: Coord2, changed_cells: &mut Vec<ChangedCell>) -> u8 {
        let count = self.mine_layout.adjacent_mine_count(coords);
        let cell = &mut self.board[coords.to_nd_index()];

        if cell.flagged {
            cell.flagged = false;
            self.flag_count -= 1;
        }
        cell.state = CellState::Revealed(count);
        self.hidden_safe_count -= 1;

        changed_cells.push(ChangedCell {
            row: coords.0,
            col: coords.1,
            display: CellDisplay::Count(count),
        });
        count
    }

    fn explode(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = &mut self.board[coords.to_nd_index()];
        if cell.flagged {
            cell.flagged = false;
            self.flag_count -= 1;
        }
        cell.state = CellState::Mine;

        self.triggered_mine = Some(coords);
        self.state = GameState::Lost;
        log::debug!("Hit mine at {:?}, game lost", coords);

        RevealOutcome {
            state: self.state,
            changed_cells: Vec::from([ChangedCell {
                row: coords.0,
                col: coords.1,
                display: CellDisplay::Mine,
            }]),
        }
    }
}

/// Dumps the field one row per line, see [`CellDisplay::symbol`].
impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows() {
            for cell in row {
                write!(f, "{}", cell.display().symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
