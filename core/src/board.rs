use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Row/column displacements of the Chebyshev-distance-1 neighborhood,
/// excluding the center.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Outcome of [`Board::toggle_flag`], consumed by the game layer to keep
/// the flag counter and notifications in sync.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum FlagToggle {
    NoOp,
    Placed,
    Removed,
}

/// Owns the cell grid and mediates every spatial query and mutation.
///
/// Cells never hold a reference back to their board; all neighborhood
/// lookups go through coordinates into the row-major `Array2` arena.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: Coord,
    columns: Coord,
    grid: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with mines laid out by the given placer.
    pub fn with_placer<P: MinePlacer>(config: GameConfig, placer: P) -> Self {
        Self::from_mine_mask(placer.place(config))
    }

    /// Builds a board from an explicit mine mask. The mine count is
    /// whatever the mask carries.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let (rows, columns) = mine_mask.dim();
        let rows: Coord = rows.try_into().unwrap();
        let columns: Coord = columns.try_into().unwrap();

        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();

        let grid = Array2::from_shape_fn(mine_mask.dim(), |(row, column)| {
            Cell::new(row as Coord, column as Coord, mine_mask[(row, column)])
        });

        Self {
            rows,
            columns,
            grid,
            mine_count,
        }
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords((rows, columns): Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((rows, columns).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= rows || coords.1 >= columns {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn columns(&self) -> Coord {
        self.columns
    }

    pub fn field_count(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Copy of the cell at `coords`. In-bounds coordinates are the
    /// caller's contract; violation panics.
    pub fn cell(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    /// In-bounds coordinates of the up-to-8 cells around `coords`,
    /// center excluded, in row-major order.
    pub fn neighbors_of(&self, (row, column): Coord2) -> SmallVec<[Coord2; 8]> {
        let mut neighbors = SmallVec::new();

        for (d_row, d_column) in DISPLACEMENTS {
            let r = row as isize + d_row;
            let c = column as isize + d_column;

            if r < 0 || r >= self.rows as isize {
                continue;
            }
            if c < 0 || c >= self.columns as isize {
                continue;
            }

            neighbors.push((r as Coord, c as Coord));
        }

        neighbors
    }

    /// Number of mines in the 3x3 block centered on `coords`. The block
    /// includes the center cell: a mine counts itself.
    pub fn mine_count_around(&self, (row, column): Coord2) -> u8 {
        let mut count = 0;

        for d_row in -1..=1isize {
            for d_column in -1..=1isize {
                let r = row as isize + d_row;
                let c = column as isize + d_column;

                if r < 0 || r >= self.rows as isize {
                    continue;
                }
                if c < 0 || c >= self.columns as isize {
                    continue;
                }

                if self.grid[(r as usize, c as usize)].is_mine {
                    count += 1;
                }
            }
        }

        count
    }

    pub(crate) fn mark_discovered(&mut self, coords: Coord2) {
        self.grid[coords.to_nd_index()].is_discovered = true;
    }

    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> FlagToggle {
        let cell = &mut self.grid[coords.to_nd_index()];

        if cell.is_discovered {
            FlagToggle::NoOp
        } else if cell.is_flagged {
            cell.is_flagged = false;
            FlagToggle::Removed
        } else {
            cell.is_flagged = true;
            FlagToggle::Placed
        }
    }
}
