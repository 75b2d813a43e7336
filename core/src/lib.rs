#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use observer::*;
pub use placer::*;
pub use reveal::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod observer;
mod placer;
mod reveal;
mod types;

/// Board construction parameters, validated at the setup boundary.
/// Game operations trust the config and do not re-validate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const MIN_AXIS: Coord = 4;
    pub const MAX_AXIS: Coord = 32;

    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// Validates rows and columns against `[4, 32]` and requires the
    /// mine count to leave at least one field clear.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows < Self::MIN_AXIS || rows > Self::MAX_AXIS {
            return Err(GameError::InvalidRows);
        }
        if columns < Self::MIN_AXIS || columns > Self::MAX_AXIS {
            return Err(GameError::InvalidColumns);
        }
        if mines >= mult(rows, columns) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, columns, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

/// Outcome of a click.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Exploded => true,
            Won => true,
        }
    }
}

/// Outcome of a right-click.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
