use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement through a partial Fisher-Yates shuffle of the eligible cells.
///
/// Always terminates after `mine_count` swaps regardless of density.
#[derive(Clone, Debug)]
pub struct ShuffleGenerator<R = SmallRng> {
    rng: R,
}

impl ShuffleGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShuffleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for ShuffleGenerator<R> {
    fn choose_mines(&mut self, _size: Coord2, mut candidates: Vec<Coord2>, mine_count: CellCount) -> Vec<Coord2> {
        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, mine_count.into());
        chosen.to_vec()
    }
}

/// Legacy placement: draw a uniformly random cell until it is eligible and not yet mined.
///
/// This is rejection sampling. It is fine for the usual densities, but has no termination bound as the mine count
/// approaches the number of eligible cells.
#[derive(Clone, Debug)]
pub struct RejectionGenerator<R = SmallRng> {
    rng: R,
}

impl RejectionGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RejectionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RejectionGenerator<R> {
    fn choose_mines(&mut self, size: Coord2, candidates: Vec<Coord2>, mine_count: CellCount) -> Vec<Coord2> {
        let mut open: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in &candidates {
            open[coords.to_nd_index()] = true;
        }

        let mut chosen = Vec::with_capacity(mine_count.into());
        let mut draws: u32 = 0;
        while chosen.len() < usize::from(mine_count) {
            let coords = (self.rng.random_range(0..size.0), self.rng.random_range(0..size.1));
            draws += 1;
            let slot = &mut open[coords.to_nd_index()];
            if *slot {
                *slot = false;
                chosen.push(coords);
            }
        }
        log::trace!("Rejection sampling placed {} mines in {} draws", chosen.len(), draws);

        chosen
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use super::*;

    fn candidates(size: Coord2, excluded: &[Coord2]) -> Vec<Coord2> {
        iter_coords(size).filter(|coords| !excluded.contains(coords)).collect()
    }

    fn assert_valid_choice(chosen: &[Coord2], eligible: &[Coord2], mine_count: CellCount) {
        let distinct: BTreeSet<_> = chosen.iter().copied().collect();
        assert_eq!(chosen.len(), usize::from(mine_count));
        assert_eq!(distinct.len(), chosen.len());
        assert!(chosen.iter().all(|coords| eligible.contains(coords)));
    }

    #[test]
    fn shuffle_picks_distinct_eligible_cells() {
        let excluded = [(4, 4), (4, 5), (5, 4), (5, 5)];
        let eligible = candidates((10, 10), &excluded);
        let chosen = ShuffleGenerator::from_seed(7).choose_mines((10, 10), eligible.clone(), 20);
        assert_valid_choice(&chosen, &eligible, 20);
    }

    #[test]
    fn shuffle_handles_dense_boards() {
        let eligible = candidates((6, 6), &[(0, 0)]);
        let chosen = ShuffleGenerator::from_seed(1).choose_mines((6, 6), eligible.clone(), 34);
        assert_valid_choice(&chosen, &eligible, 34);
    }

    #[test]
    fn rejection_picks_distinct_eligible_cells() {
        let excluded = [(1, 1), (2, 2)];
        let eligible = candidates((5, 5), &excluded);
        let chosen = RejectionGenerator::from_seed(3).choose_mines((5, 5), eligible.clone(), 12);
        assert_valid_choice(&chosen, &eligible, 12);
    }

    #[test]
    fn same_seed_same_layout() {
        let eligible = candidates((8, 8), &[]);
        let first = ShuffleGenerator::from_seed(42).choose_mines((8, 8), eligible.clone(), 10);
        let second = ShuffleGenerator::from_seed(42).choose_mines((8, 8), eligible, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_mines_chooses_nothing() {
        let eligible = candidates((3, 3), &[]);
        assert!(ShuffleGenerator::from_seed(0).choose_mines((3, 3), eligible.clone(), 0).is_empty());
        assert!(RejectionGenerator::from_seed(0).choose_mines((3, 3), eligible, 0).is_empty());
    }
}
