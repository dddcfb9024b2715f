use anyhow::{Context, bail};
use minefield_core::{Coord, Coord2};

pub(crate) const HELP: &str = "\
Commands:
  r <row> <col>   reveal a cell
  f <row> <col>   toggle a flag
  h               show this help
  q               give up and quit";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command, type `h` for help");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command `{other}`, type `h` for help"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument `{extra}`");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<Coord> {
        let word = words.next().with_context(|| format!("missing {axis}"))?;
        word.parse()
            .with_context(|| format!("invalid {axis} `{word}`"))
    };
    Ok((next("row")?, next("column")?))
}
