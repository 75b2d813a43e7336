use ndarray::Array2;

use crate::GameConfig;

pub use shuffle::*;

mod shuffle;

/// Strategy for laying out mines on a fresh board.
pub trait MinePlacer {
    fn place(self, config: GameConfig) -> Array2<bool>;
}
