use ndarray::Array2;

use super::*;

/// Seeded two-step placement: the first `mines` positions are set in
/// row-major order, then scattered by nested per-axis swaps.
///
/// The swap pass walks rows and columns from the high end down to 1 and
/// swaps each position with an independently drawn row and column pick,
/// so row 0 and column 0 appear only as swap targets. This does not
/// produce a uniform permutation of the flattened grid; the resulting
/// distribution is part of the observable behavior and is kept as is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledPlacer {
    seed: u64,
}

impl ShuffledPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for ShuffledPlacer {
    fn place(self, config: GameConfig) -> Array2<bool> {
        use rand::prelude::*;

        let rows = config.rows as usize;
        let columns = config.columns as usize;
        let mut mine_mask: Array2<bool> = Array2::default((rows, columns));

        for index in 0..config.mines as usize {
            mine_mask[(index / columns, index % columns)] = true;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..rows).rev() {
            for j in (1..columns).rev() {
                let m = rng.random_range(0..=i);
                let n = rng.random_range(0..=j);
                mine_mask.swap((i, j), (m, n));
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} board with seed {}",
            config.mines,
            config.rows,
            config.columns,
            self.seed
        );

        mine_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellCount;

    fn count_mines(mask: &Array2<bool>) -> CellCount {
        mask.iter().filter(|&&is_mine| is_mine).count() as CellCount
    }

    #[test]
    fn placement_preserves_the_requested_mine_count() {
        for seed in 0..16 {
            let config = GameConfig::new_unchecked(8, 8, 10);
            let mask = ShuffledPlacer::new(seed).place(config);
            assert_eq!(count_mines(&mask), 10);
        }
    }

    #[test]
    fn same_seed_yields_the_same_layout() {
        let config = GameConfig::new_unchecked(8, 8, 10);
        let a = ShuffledPlacer::new(42).place(config);
        let b = ShuffledPlacer::new(42).place(config);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_mines_yields_an_empty_mask() {
        let config = GameConfig::new_unchecked(4, 4, 0);
        let mask = ShuffledPlacer::new(7).place(config);
        assert_eq!(count_mines(&mask), 0);
    }

    #[test]
    fn nearly_full_board_keeps_one_cell_clear() {
        let config = GameConfig::new_unchecked(4, 4, 15);
        let mask = ShuffledPlacer::new(3).place(config);
        assert_eq!(count_mines(&mask), 15);
        assert!(mask.iter().any(|&is_mine| !is_mine));
    }
}
