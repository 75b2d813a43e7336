use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// One cell that became discovered, with its surrounding mine count
/// already computed. Emission order is the discovery order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub row: Coord,
    pub column: Coord,
    pub adjacent_mines: u8,
    pub is_mine: bool,
}

impl Discovery {
    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }
}

/// Flood-fill discovery over a [`Board`].
///
/// The engine mutates plain cell state and reports data-only
/// [`Discovery`] records; it knows nothing about presentation or game
/// bookkeeping.
pub struct RevealEngine;

impl RevealEngine {
    /// Discovers `start` and, when its surrounding count is zero, the
    /// whole connected zero-count region plus one ring of numbered
    /// cells, breadth-first.
    ///
    /// Discovered, flagged, and mine cells are not flood-revealable and
    /// yield an empty sequence; the exploding path is
    /// [`RevealEngine::reveal_all`].
    pub fn flood_reveal(board: &mut Board, start: Coord2) -> Vec<Discovery> {
        let cell = board.cell(start);
        if cell.is_discovered || cell.is_flagged || cell.is_mine {
            return Vec::new();
        }

        let mut discoveries = Vec::new();
        let mut visited: HashSet<Coord2> = HashSet::new();
        visited.insert(start);
        let mut to_visit: VecDeque<Coord2> = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            board.mark_discovered(coords);
            let adjacent_mines = board.mine_count_around(coords);
            discoveries.push(Discovery {
                row: coords.0,
                column: coords.1,
                adjacent_mines,
                is_mine: false,
            });
            log::trace!("discovered {:?}, adjacent mines: {}", coords, adjacent_mines);

            // expansion stops at the first numbered cell
            if adjacent_mines > 0 {
                continue;
            }

            for neighbor in board.neighbors_of(coords) {
                let neighbor_cell = board.cell(neighbor);
                if neighbor_cell.is_discovered || neighbor_cell.is_flagged {
                    continue;
                }
                // visited is marked on enqueue so shared neighbors of the
                // zero region are queued once
                if visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        discoveries
    }

    /// Discovers every cell not already discovered, mines included.
    /// Used once the game ends by explosion; already-discovered cells
    /// are skipped, so a second call yields nothing.
    pub fn reveal_all(board: &mut Board) -> Vec<Discovery> {
        let mut discoveries = Vec::new();

        for row in 0..board.rows() {
            for column in 0..board.columns() {
                let coords = (row, column);
                let cell = board.cell(coords);
                if cell.is_discovered {
                    continue;
                }

                board.mark_discovered(coords);
                discoveries.push(Discovery {
                    row,
                    column,
                    // computed for mines too; a mine counts itself
                    adjacent_mines: board.mine_count_around(coords),
                    is_mine: cell.is_mine,
                });
            }
        }

        discoveries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_reveal_opens_the_zero_region_and_one_numbered_ring() {
        // mines fill the last column; column 2 is the numbered ring
        let mines = [(0, 3), (1, 3), (2, 3), (3, 3)];
        let mut board = Board::from_mine_coords((4, 4), &mines).unwrap();

        let discoveries = RevealEngine::flood_reveal(&mut board, (0, 0));

        assert_eq!(discoveries.len(), 12);
        assert!(discoveries.iter().all(|d| !d.is_mine));
        assert!(discoveries.iter().all(|d| d.column != 3));
        assert!(
            discoveries
                .iter()
                .filter(|d| d.column == 2)
                .all(|d| d.adjacent_mines > 0)
        );
    }

    #[test]
    fn flood_reveal_discovers_each_cell_at_most_once() {
        let mut board = Board::from_mine_coords((4, 4), &[(3, 3)]).unwrap();

        let discoveries = RevealEngine::flood_reveal(&mut board, (0, 0));

        let unique: HashSet<Coord2> = discoveries.iter().map(Discovery::coords).collect();
        assert_eq!(unique.len(), discoveries.len());
        assert_eq!(discoveries.len(), 15);
        assert!(!unique.contains(&(3, 3)));
    }

    #[test]
    fn flood_reveal_from_a_numbered_cell_opens_only_that_cell() {
        let mut board = Board::from_mine_coords((4, 4), &[(0, 0)]).unwrap();

        let discoveries = RevealEngine::flood_reveal(&mut board, (1, 1));

        assert_eq!(discoveries.len(), 1);
        assert_eq!(discoveries[0].coords(), (1, 1));
        assert_eq!(discoveries[0].adjacent_mines, 1);
        assert!(!board.cell((2, 2)).is_discovered);
    }

    #[test]
    fn flood_reveal_skips_discovered_flagged_and_mine_cells() {
        let mut board = Board::from_mine_coords((4, 4), &[(0, 0)]).unwrap();

        board.toggle_flag((1, 1));
        assert!(RevealEngine::flood_reveal(&mut board, (1, 1)).is_empty());
        assert!(RevealEngine::flood_reveal(&mut board, (0, 0)).is_empty());

        board.mark_discovered((2, 2));
        assert!(RevealEngine::flood_reveal(&mut board, (2, 2)).is_empty());
    }

    #[test]
    fn flood_reveal_does_not_expand_into_flagged_cells() {
        let mut board = Board::from_mine_coords((4, 4), &[]).unwrap();
        board.toggle_flag((1, 1));

        let discoveries = RevealEngine::flood_reveal(&mut board, (3, 3));

        assert_eq!(discoveries.len(), 15);
        assert!(!board.cell((1, 1)).is_discovered);
        assert!(board.cell((1, 1)).is_flagged);
    }

    #[test]
    fn reveal_all_reports_mines_as_mines_and_is_idempotent() {
        let mut board = Board::from_mine_coords((4, 4), &[(0, 0)]).unwrap();

        let first = RevealEngine::reveal_all(&mut board);
        assert_eq!(first.len(), 16);

        let mine = first.iter().find(|d| d.coords() == (0, 0)).unwrap();
        assert!(mine.is_mine);
        assert_eq!(mine.adjacent_mines, 1);

        let second = RevealEngine::reveal_all(&mut board);
        assert!(second.is_empty());
    }

    #[test]
    fn reveal_all_skips_already_discovered_cells() {
        let mut board = Board::from_mine_coords((4, 4), &[(0, 0)]).unwrap();

        let opened = RevealEngine::flood_reveal(&mut board, (3, 3));
        let rest = RevealEngine::reveal_all(&mut board);

        assert_eq!(opened.len() + rest.len(), 16);
        assert!(rest.iter().any(|d| d.is_mine));
    }
}
