use std::io::{BufRead, Write};

use anyhow::Context;
use minefield_core::{Board, Coord2, GameConfig, GameStatus, MineGenerator, SafeZone};

use crate::command::{Command, HELP};
use crate::render::render;

/// One round as seen from the terminal: the board plus whatever is needed to finish setting it up.
pub(crate) struct Session {
    config: GameConfig,
    board: Board,
    generator: Box<dyn MineGenerator>,
}

impl Session {
    /// With `safe_first_click` the mines are only placed on the first reveal, around the revealed cell.
    pub(crate) fn new(
        config: GameConfig,
        mut generator: Box<dyn MineGenerator>,
        safe_first_click: bool,
    ) -> anyhow::Result<Self> {
        let board = if safe_first_click {
            Board::new(config.size())?
        } else {
            Board::generate(&config, &mut *generator)?
        };
        Ok(Self {
            config,
            board,
            generator,
        })
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    fn reveal(&mut self, coords: Coord2) -> anyhow::Result<GameStatus> {
        if !self.board.has_mines() {
            let coords = self.board.validate_coords(coords)?;
            self.board
                .generate_mines(self.config.mines, &SafeZone::Around(coords), &mut *self.generator)?;
            self.board.compute_adjacency_counts();
        }
        Ok(self.board.reveal(coords)?)
    }

    /// Feeds one command to the board and reports the status afterwards.
    pub(crate) fn apply(&mut self, command: Command) -> anyhow::Result<GameStatus> {
        match command {
            Command::Reveal(coords) => self.reveal(coords),
            Command::Flag(coords) => {
                if !self.board.toggle_flag(coords)?.has_update() {
                    log::debug!("Cell {:?} is already revealed, flag ignored", coords);
                }
                Ok(self.board.status())
            }
            Command::Help | Command::Quit => Ok(self.board.status()),
        }
    }

    /// Plays until the round is over, input runs out, or the player quits.
    pub(crate) fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<GameStatus> {
        writeln!(output, "{}", render(&self.board))?;

        for line in input.lines() {
            let line = line.context("could not read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    writeln!(output, "{HELP}")?;
                    continue;
                }
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{err:#}")?;
                    continue;
                }
            };

            log::debug!("Applying {:?}", command);
            let status = match self.apply(command) {
                Ok(status) => status,
                Err(err) => {
                    writeln!(output, "{err:#}")?;
                    continue;
                }
            };

            if status.is_finished() {
                return self.finish(status, output);
            }
            writeln!(output, "{}", render(&self.board))?;
        }

        let status = self.board.status();
        log::info!("Round abandoned with status {:?}", status);
        Ok(status)
    }

    fn finish(&mut self, status: GameStatus, mut output: impl Write) -> anyhow::Result<GameStatus> {
        if status == GameStatus::Lost {
            self.board.reveal_all();
        }
        writeln!(output, "{}", render(&self.board))?;
        match status {
            GameStatus::Won => writeln!(output, "YOU WON")?,
            _ => writeln!(output, "YOU LOST")?,
        }
        log::info!("Round finished with status {:?}", status);
        Ok(status)
    }
}
