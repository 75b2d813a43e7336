use alloc::boxed::Box;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::board::FlagToggle;
use crate::*;

/// Valid transitions:
/// - Playing -> Exploded (mine clicked)
/// - Playing -> Won (coverage condition met)
///
/// Both end states are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Exploded,
    Won,
}

impl GameState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exploded | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A game from first click to terminal state: board, counters, and the
/// observer fan-out driving any presentation layer.
pub struct Game {
    board: Board,
    state: GameState,
    discovered_count: CellCount,
    flag_count: CellCount,
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_observer_id: u32,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: GameState::default(),
            discovered_count: 0,
            flag_count: 0,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self.board.cell(coords)
    }

    pub fn discovered_count(&self) -> CellCount {
        self.discovered_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn field_count(&self) -> CellCount {
        self.board.field_count()
    }

    pub fn summary(&self) -> FieldSummary {
        FieldSummary {
            discovered_count: self.discovered_count,
            flag_count: self.flag_count,
            mine_count: self.board.mine_count(),
            field_count: self.board.field_count(),
        }
    }

    /// Registers an observer; callbacks run synchronously, in
    /// registration order, after each action settles.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId::new(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregisters an observer. Returns whether the handle was known.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Reveals the cell at `coords`. Clicking a discovered or flagged
    /// cell, or clicking after the game ended, changes nothing and
    /// notifies nobody.
    pub fn click(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_terminal() {
            return RevealOutcome::NoChange;
        }

        let cell = self.board.cell(coords);
        if cell.is_discovered || cell.is_flagged {
            return RevealOutcome::NoChange;
        }

        log::debug!("click at {:?}", coords);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome = if cell.is_mine {
            self.state = GameState::Exploded;
            // the clicked mine is reported through Exploded, not Discovered;
            // terminal reveals leave discovered_count untouched
            self.board.mark_discovered(coords);
            for discovery in RevealEngine::reveal_all(&mut self.board) {
                events.push(GameEvent::Discovered(discovery));
            }
            events.push(GameEvent::Exploded {
                row: coords.0,
                column: coords.1,
            });
            events.push(GameEvent::MineFieldChanged(self.summary()));
            events.push(GameEvent::ExplodeGameOver);
            RevealOutcome::Exploded
        } else {
            let discoveries = RevealEngine::flood_reveal(&mut self.board, coords);
            self.discovered_count += discoveries.len() as CellCount;
            for discovery in discoveries {
                events.push(GameEvent::Discovered(discovery));
            }
            events.push(GameEvent::MineFieldChanged(self.summary()));

            if self.discovered_count + self.flag_count == self.field_count() {
                self.state = GameState::Won;
                events.push(GameEvent::Won);
                RevealOutcome::Won
            } else {
                RevealOutcome::Revealed
            }
        };

        self.dispatch(&events);
        outcome
    }

    /// Toggles the flag at `coords`. Flags are free-form markings, not
    /// constrained by the mine count. No-op on discovered cells and
    /// after the game ended. Flagging the last covered cell completes
    /// the coverage condition and wins the game.
    pub fn right_click(&mut self, coords: Coord2) -> MarkOutcome {
        if self.state.is_terminal() {
            return MarkOutcome::NoChange;
        }

        let (row, column) = coords;
        let mut events: Vec<GameEvent> = Vec::new();

        match self.board.toggle_flag(coords) {
            FlagToggle::NoOp => return MarkOutcome::NoChange,
            FlagToggle::Placed => {
                self.flag_count += 1;
                events.push(GameEvent::FlagPlaced { row, column });
            }
            FlagToggle::Removed => {
                self.flag_count -= 1;
                events.push(GameEvent::FlagRemoved { row, column });
            }
        }
        events.push(GameEvent::MineFieldChanged(self.summary()));

        if self.discovered_count + self.flag_count == self.field_count() {
            self.state = GameState::Won;
            events.push(GameEvent::Won);
        }

        self.dispatch(&events);
        MarkOutcome::Changed
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            for (_, observer) in self.observers.iter_mut() {
                event.dispatch(observer.as_mut());
            }
        }
    }
}
