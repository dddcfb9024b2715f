use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing which cells receive mines.
pub trait MineGenerator {
    /// Picks `mine_count` distinct cells out of `candidates`.
    ///
    /// `candidates` holds every eligible cell of a board of `size` in row-major order, and is always strictly larger
    /// than `mine_count`.
    fn choose_mines(&mut self, size: Coord2, candidates: Vec<Coord2>, mine_count: CellCount) -> Vec<Coord2>;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn choose_mines(&mut self, size: Coord2, candidates: Vec<Coord2>, mine_count: CellCount) -> Vec<Coord2> {
        (**self).choose_mines(size, candidates, mine_count)
    }
}
