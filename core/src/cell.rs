use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

use crate::Coord;

/// A single position on the board, carrying mine/flag/discovered state.
///
/// Identity is the `(row, column)` pair alone; the mutable state does not
/// participate in equality or hashing. Cells are created once at board
/// construction and mutated in place through [`crate::Board`].
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub column: Coord,
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_discovered: bool,
}

impl Cell {
    pub(crate) const fn new(row: Coord, column: Coord, is_mine: bool) -> Self {
        Self {
            row,
            column,
            is_mine,
            is_flagged: false,
            is_discovered: false,
        }
    }

    pub const fn coords(&self) -> (Coord, Coord) {
        (self.row, self.column)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}
