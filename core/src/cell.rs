use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Full state of one grid position, including hidden information.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) coords: Coord2,
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mine_count: u8,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            is_mine: false,
            adjacent_mine_count: 0,
            is_revealed: false,
            is_flagged: false,
        }
    }

    /// Non-mine cell with no adjacent mines, revealing it cascades.
    pub(crate) const fn is_void(&self) -> bool {
        !self.is_mine && self.adjacent_mine_count == 0
    }

    pub(crate) const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Revealed(self.adjacent_mine_count),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }
}

/// Player-visible state of a cell.
///
/// Hidden cells carry no information about mines or counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
