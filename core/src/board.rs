use alloc::collections::VecDeque;
use alloc::vec::Vec;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::{validate_dimensions, validate_mine_count};
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Fixed-size grid of cells together with the progress of one round.
///
/// Lifecycle of a round: [`Board::new`], then [`Board::generate_mines`] once, then
/// [`Board::compute_adjacency_counts`] once, then any number of [`Board::reveal`] and
/// [`Board::toggle_flag`] calls. [`Board::generate`] and [`Board::from_mine_coords`] do the setup in one go. A new
/// round always starts from a new board.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
    revealed_count: CellCount,
    revealed_safe_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(size: Coord2) -> Result<Self> {
        validate_dimensions(size)?;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Cell::new((row as Coord, col as Coord))
        });

        Ok(Self {
            size,
            cells,
            mine_count: 0,
            mines_placed: false,
            revealed_count: 0,
            revealed_safe_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        })
    }

    /// Sets up a complete round from `config`: mines placed and adjacency counts ready.
    pub fn generate(config: &GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Self::new(config.size())?;
        board.generate_mines(config.mines, &config.safe_zone, generator)?;
        board.compute_adjacency_counts();
        Ok(board)
    }

    /// Sets up a round with mines at exactly `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        if mine_coords.iter().any(|&coords| !in_bounds(coords, size)) {
            return Err(GameError::OutOfBounds);
        }

        for &coords in mine_coords {
            board.place_mine(coords);
        }
        validate_mine_count(board.total_cells(), 0, board.mine_count)?;
        board.mines_placed = true;
        board.compute_adjacency_counts();
        Ok(board)
    }

    /// Places `mine_count` mines outside of `safe_zone`, with `generator` picking the cells.
    ///
    /// Nothing is changed when an error is returned.
    pub fn generate_mines(
        &mut self,
        mine_count: CellCount,
        safe_zone: &SafeZone,
        mut generator: impl MineGenerator,
    ) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }
        let safe_cells = safe_zone.resolve(self.size)?;
        validate_mine_count(self.total_cells(), safe_cells.len(), mine_count)?;

        let candidates: Vec<Coord2> = iter_coords(self.size)
            .filter(|coords| safe_cells.binary_search(coords).is_err())
            .collect();
        log::debug!(
            "Placing {} mines on a {}x{} board, {} candidate cells",
            mine_count,
            self.size.0,
            self.size.1,
            candidates.len()
        );

        for coords in generator.choose_mines(self.size, candidates, mine_count) {
            if !in_bounds(coords, self.size) || safe_cells.binary_search(&coords).is_ok() {
                log::warn!("Generator picked ineligible cell {:?}, ignored", coords);
                continue;
            }
            self.place_mine(coords);
        }
        self.mines_placed = true;

        if self.mine_count != mine_count {
            log::warn!(
                "Generated mine count mismatch, actual: {}, requested: {}",
                self.mine_count,
                mine_count
            );
        }
        Ok(())
    }

    fn place_mine(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.is_mine {
            cell.is_mine = true;
            self.mine_count += 1;
        }
    }

    /// Stores the number of neighbouring mines on every safe cell.
    ///
    /// Calling it again recomputes the same values.
    pub fn compute_adjacency_counts(&mut self) {
        for coords in iter_coords(self.size) {
            let count = if self.cells[coords.to_nd_index()].is_mine {
                0
            } else {
                NeighborIter::new(coords, self.size)
                    .filter(|&pos| self.cells[pos.to_nd_index()].is_mine)
                    .count()
                    .try_into()
                    .unwrap()
            };
            self.cells[coords.to_nd_index()].adjacent_mine_count = count;
        }
    }

    /// Reveals a cell, cascading through empty regions, and reports the resulting status.
    ///
    /// Revealed and flagged cells are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<GameStatus> {
        let coords = self.validate_coords(coords)?;
        self.reveal_from(coords);
        Ok(self.status())
    }

    /// Runs a reveal on every cell in row-major order, returning how many cells were newly revealed.
    ///
    /// Used for full disclosure once a round is over. Flagged cells stay covered.
    pub fn reveal_all(&mut self) -> CellCount {
        let revealed: CellCount = iter_coords(self.size)
            .map(|coords| self.reveal_from(coords))
            .sum();
        log::debug!("Reveal-all sweep uncovered {} cells", revealed);
        revealed
    }

    fn reveal_from(&mut self, start: Coord2) -> CellCount {
        let mut revealed = 0;
        let mut frontier = VecDeque::from([start]);

        while let Some(coords) = frontier.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_revealed || cell.is_flagged {
                continue;
            }
            cell.is_revealed = true;
            let cell = *cell;
            revealed += 1;
            self.revealed_count += 1;

            if cell.is_mine {
                if self.triggered_mine.is_none() {
                    log::debug!("Mine revealed at {:?}, round lost", coords);
                    self.triggered_mine = Some(coords);
                }
                continue;
            }

            self.revealed_safe_count += 1;
            if cell.is_void() {
                let cells = &self.cells;
                let before = frontier.len();
                frontier.extend(NeighborIter::new(coords, self.size).filter(|&pos| {
                    let neighbor = &cells[pos.to_nd_index()];
                    !neighbor.is_revealed && !neighbor.is_flagged
                }));
                log::trace!(
                    "Cascade from {:?} queued {} neighbors",
                    coords,
                    frontier.len() - before
                );
            }
        }

        if revealed > 0 && self.status() == GameStatus::Won {
            log::debug!("All {} safe cells revealed, round won", self.revealed_safe_count);
        }
        revealed
    }

    /// Flips the flag on a covered cell, revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// `Lost` once any mine was revealed, `Won` when every safe cell is revealed, otherwise `InProgress`.
    pub fn status(&self) -> GameStatus {
        if self.triggered_mine.is_some() {
            GameStatus::Lost
        } else if self.revealed_safe_count == self.safe_cell_count() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].view())
    }

    /// Player-visible state of every cell in row-major order.
    pub fn iter_views(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.cells.iter().map(|cell| (cell.coords, cell.view()))
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn has_mines(&self) -> bool {
        self.mines_placed
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count as isize)
    }

    /// The first mine that was revealed, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }
}
