//! Game state: the one value presentation code reads.
//!
//! ## GameState
//!
//! - The board (cups)
//! - Current selection
//! - Move history (for undo and the move counter)
//! - Status (playing, won, lost)
//! - Remaining shuffle power-ups
//!
//! Fields are read-only outside the crate. Every change goes through
//! [`Puzzle`](crate::games::puzzle::Puzzle) operations.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::moves::Move;

/// Overall game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Won or lost.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Selection state machine as seen by the player.
///
/// Derived from status and selection; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    NoSelection,
    Selected(usize),
    Won,
    Lost,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    cups: Board,
    selected_cup: Option<usize>,
    move_history: Vector<Move>,
    status: GameStatus,
    shuffle_count: u32,
    /// History entries at or below this length cannot be undone
    /// (they predate the last shuffle).
    undo_floor: usize,
}

impl GameState {
    /// Fresh state for a newly dealt board.
    pub(crate) fn new(cups: Board, status: GameStatus, shuffle_count: u32) -> Self {
        Self {
            cups,
            selected_cup: None,
            move_history: Vector::new(),
            status,
            shuffle_count,
            undo_floor: 0,
        }
    }

    // === Read-only view ===

    /// The board.
    #[must_use]
    pub fn cups(&self) -> &Board {
        &self.cups
    }

    /// Index of the selected cup.
    #[must_use]
    pub fn selected_cup(&self) -> Option<usize> {
        self.selected_cup
    }

    /// Every pour made this game, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &Vector<Move> {
        &self.move_history
    }

    /// Moves made this game (the score).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Remaining shuffle power-ups.
    #[must_use]
    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }

    /// Whether an undo would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.move_history.len() > self.undo_floor
    }

    /// Whether the cup at `index` is locked.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.cups.is_locked(index)
    }

    /// Selection phase for renderers and input handlers.
    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        match (self.status, self.selected_cup) {
            (GameStatus::Won, _) => TurnPhase::Won,
            (GameStatus::Lost, _) => TurnPhase::Lost,
            (GameStatus::Playing, Some(index)) => TurnPhase::Selected(index),
            (GameStatus::Playing, None) => TurnPhase::NoSelection,
        }
    }

    // === Engine-only mutation ===

    pub(crate) fn set_selected(&mut self, selected: Option<usize>) {
        self.selected_cup = selected;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Apply a forward pour.
    pub(crate) fn record_pour(&mut self, cups: Board, mv: Move) {
        self.cups = cups;
        self.move_history.push_back(mv);
    }

    /// The move undo would reverse, if undo is allowed.
    pub(crate) fn last_undoable(&self) -> Option<Move> {
        if self.can_undo() {
            self.move_history.back().copied()
        } else {
            None
        }
    }

    /// Drop the last move after its reversal has been applied to `cups`.
    pub(crate) fn rewind(&mut self, cups: Board) {
        self.cups = cups;
        self.move_history.pop_back();
    }

    /// Spend one shuffle and seal the history against undo.
    pub(crate) fn spend_shuffle(&mut self, cups: Board) {
        self.cups = cups;
        self.shuffle_count = self.shuffle_count.saturating_sub(1);
        self.undo_floor = self.move_history.len();
    }
}
