use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// Cells that are excluded from mine placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafeZone {
    /// No protected cells, every cell may hold a mine.
    Empty,
    /// The 2x2 block at the centre of the board.
    CenterBlock,
    /// The given cell and its neighbours, for a guaranteed opening on the first click.
    Around(Coord2),
    /// Explicit list of protected cells.
    Cells(Vec<Coord2>),
}

impl Default for SafeZone {
    fn default() -> Self {
        Self::CenterBlock
    }
}

impl SafeZone {
    /// Distinct protected cells inside a board of `size`, in row-major order.
    ///
    /// Block shaped zones are clipped at the board boundary, explicit cells must all be in bounds.
    pub fn resolve(&self, size: Coord2) -> Result<Vec<Coord2>> {
        let cells: BTreeSet<Coord2> = match self {
            Self::Empty => BTreeSet::new(),
            Self::CenterBlock => {
                let (rows, cols) = size;
                let first = ((rows / 2).saturating_sub(1), (cols / 2).saturating_sub(1));
                [(0, 0), (0, 1), (1, 0), (1, 1)]
                    .into_iter()
                    .filter_map(|(d_row, d_col)| {
                        Some((first.0.checked_add(d_row)?, first.1.checked_add(d_col)?))
                    })
                    .filter(|&coords| in_bounds(coords, size))
                    .collect()
            }
            Self::Around(center) => {
                if !in_bounds(*center, size) {
                    return Err(GameError::OutOfBounds);
                }
                NeighborIter::new(*center, size)
                    .chain(core::iter::once(*center))
                    .collect()
            }
            Self::Cells(cells) => {
                if cells.iter().any(|&coords| !in_bounds(coords, size)) {
                    return Err(GameError::OutOfBounds);
                }
                cells.iter().copied().collect()
            }
        };

        Ok(cells.into_iter().collect())
    }
}
