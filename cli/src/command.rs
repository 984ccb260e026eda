use std::str::FromStr;

use minefield_core::Coord;
use thiserror::Error;

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal { row: Coord, col: Coord },
    Flag { row: Coord, col: Coord },
    Mines,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` expects a row and a column")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

pub(crate) const HELP: &str = "\
commands:
  reveal ROW COL   (r)  step on a cell
  flag ROW COL     (f)  mark or unmark a hidden cell
  mines                 show how many mines are left unflagged
  help             (h)  show this message
  quit             (q)  leave the game";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "reveal" | "r" => {
                let (row, col) = parse_coords(&mut words, "reveal")?;
                Command::Reveal { row, col }
            }
            "flag" | "f" => {
                let (row, col) = parse_coords(&mut words, "flag")?;
                Command::Flag { row, col }
            }
            "mines" => Command::Mines,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<(Coord, Coord), CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::MissingCoords(name))?;
        word.parse()
            .map_err(|_| CommandError::InvalidCoord(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
