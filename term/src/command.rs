use std::str::FromStr;

use anyhow::{Context, bail};
use fieldsweep_core::{Coord, Coord2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Replay,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  o ROW COL   reveal a cell
  f ROW COL   cycle flag / question mark on a cell
  n           start a new game
  ?           show this help
  q           quit";

fn parse_coords<'a>(mut parts: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parts.next().context("missing row")?;
    let col = parts.next().context("missing column")?;
    if parts.next().is_some() {
        bail!("too many arguments");
    }
    let row: Coord = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("invalid column {col:?}"))?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("empty command");
        };
        Ok(match verb {
            "o" | "open" | "r" | "reveal" => Command::Reveal(parse_coords(parts)?),
            "f" | "flag" => Command::Flag(parse_coords(parts)?),
            "n" | "new" => Command::Replay,
            "?" | "h" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}"),
        })
    }
}
