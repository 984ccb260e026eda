use std::io::Write;

use minefield_core::{ChangedCell, Coord, Coord2, GameState, GridEngine};
use serde::Serialize;

use crate::command::{Command, HELP};
use crate::view::BoardView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Machine-readable line printed in `--json` mode.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Reveal {
        row: Coord,
        col: Coord,
        state: GameState,
        changed_cells: &'a [ChangedCell],
    },
    Flag {
        row: Coord,
        col: Coord,
        flagged: bool,
    },
    Mines {
        left: isize,
        locations: Option<&'a [Coord2]>,
    },
    Error {
        message: String,
    },
}

/// Runs one game, translating player commands into engine calls.
pub(crate) struct Session {
    engine: GridEngine,
    view: BoardView,
    json: bool,
}

impl Session {
    pub(crate) fn new(engine: GridEngine, json: bool) -> Self {
        let view = BoardView::new(engine.width(), engine.height());
        Self { engine, view, json }
    }

    pub(crate) fn start(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if !self.json {
            writeln!(
                out,
                "{}x{} field with {} mines, type `help` for commands",
                self.engine.width(),
                self.engine.height(),
                self.engine.total_mines()
            )?;
            write!(out, "{}", self.view)?;
        }
        Ok(())
    }

    pub(crate) fn handle(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                self.report_error(out, &err)?;
                return Ok(Flow::Continue);
            }
        };
        log::trace!("command: {:?}", command);

        match command {
            Command::Reveal { row, col } => self.reveal(row, col, out),
            Command::Flag { row, col } => self.flag(row, col, out),
            Command::Mines => {
                self.mines(out)?;
                Ok(Flow::Continue)
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(Flow::Continue)
            }
            Command::Quit => Ok(Flow::Stop),
        }
    }

    fn reveal(&mut self, row: Coord, col: Coord, out: &mut impl Write) -> anyhow::Result<Flow> {
        let outcome = match self.engine.reveal(row, col) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report_error(out, &err)?;
                return Ok(Flow::Continue);
            }
        };

        self.view.apply_reveal(&outcome);
        if self.json {
            print_event(
                out,
                &Event::Reveal {
                    row,
                    col,
                    state: outcome.state,
                    changed_cells: &outcome.changed_cells,
                },
            )?;
        }

        if !outcome.state.is_finished() {
            if !self.json {
                write!(out, "{}", self.view)?;
            }
            return Ok(Flow::Continue);
        }

        let mines = self.engine.mine_locations();
        self.view.show_mines(&mines);
        if self.json {
            self.mines(out)?;
        } else {
            write!(out, "{}", self.view)?;
            match outcome.state {
                GameState::Won => writeln!(out, "You win!")?,
                _ => writeln!(out, "You hit a mine!")?,
            }
        }
        log::info!("Game over: {:?}", outcome.state);
        Ok(Flow::Stop)
    }

    fn flag(&mut self, row: Coord, col: Coord, out: &mut impl Write) -> anyhow::Result<Flow> {
        match self.engine.toggle_flag(row, col) {
            Ok(outcome) => {
                self.view.apply_flag((row, col), outcome);
                if self.json {
                    print_event(
                        out,
                        &Event::Flag {
                            row,
                            col,
                            flagged: outcome.flagged,
                        },
                    )?;
                } else {
                    write!(out, "{}", self.view)?;
                }
            }
            Err(err) => self.report_error(out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn mines(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let left = self.engine.mines_left();
        if self.json {
            let locations = self
                .engine
                .is_finished()
                .then(|| self.engine.mine_locations());
            print_event(
                out,
                &Event::Mines {
                    left,
                    locations: locations.as_deref(),
                },
            )?;
        } else {
            writeln!(out, "{left} mines left")?;
        }
        Ok(())
    }

    fn report_error(&self, out: &mut impl Write, err: &dyn std::error::Error) -> anyhow::Result<()> {
        log::debug!("rejected input: {}", err);
        if self.json {
            print_event(
                out,
                &Event::Error {
                    message: err.to_string(),
                },
            )
        } else {
            writeln!(out, "{err}")?;
            Ok(())
        }
    }
}

fn print_event(out: &mut impl Write, event: &Event<'_>) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    Ok(())
}
