use serde::{Deserialize, Serialize};

use crate::*;

/// Handle returned by [`crate::Game::add_observer`], used to unregister.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(u32);

impl ObserverId {
    pub(crate) const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Counter snapshot carried by every change notification.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub discovered_count: CellCount,
    pub flag_count: CellCount,
    pub mine_count: CellCount,
    pub field_count: CellCount,
}

/// Data-only notification emitted by the game after an action settles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Discovered(Discovery),
    FlagPlaced { row: Coord, column: Coord },
    FlagRemoved { row: Coord, column: Coord },
    Exploded { row: Coord, column: Coord },
    MineFieldChanged(FieldSummary),
    Won,
    ExplodeGameOver,
}

impl GameEvent {
    pub(crate) fn dispatch(&self, observer: &mut dyn GameObserver) {
        match *self {
            GameEvent::Discovered(ref discovery) => observer.on_discover(discovery),
            GameEvent::FlagPlaced { row, column } => observer.on_flag_place(row, column),
            GameEvent::FlagRemoved { row, column } => observer.on_flag_remove(row, column),
            GameEvent::Exploded { row, column } => observer.on_explode(row, column),
            GameEvent::MineFieldChanged(ref summary) => observer.on_mine_field_change(summary),
            GameEvent::Won => observer.on_win(),
            GameEvent::ExplodeGameOver => observer.on_explode_game_over(),
        }
    }
}

/// Contract between the game and its presentation layer. Callbacks run
/// synchronously on the calling thread, after the triggering action has
/// fully applied. All methods default to no-ops.
pub trait GameObserver {
    /// One cell became discovered, surrounding count already computed.
    fn on_discover(&mut self, discovery: &Discovery) {
        let _ = discovery;
    }

    fn on_flag_place(&mut self, row: Coord, column: Coord) {
        let _ = (row, column);
    }

    fn on_flag_remove(&mut self, row: Coord, column: Coord) {
        let _ = (row, column);
    }

    /// Fired once, identifying the clicked mine.
    fn on_explode(&mut self, row: Coord, column: Coord) {
        let _ = (row, column);
    }

    /// Fired after every click or right-click that changed anything.
    fn on_mine_field_change(&mut self, summary: &FieldSummary) {
        let _ = summary;
    }

    fn on_win(&mut self) {}

    fn on_explode_game_over(&mut self) {}
}
