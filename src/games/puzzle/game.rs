//! The stateful puzzle engine.

use tracing::{debug, trace, warn};

use crate::core::{Board, GameRng, GameState, GameStatus, Move, PuzzleConfig, RandomSource};
use crate::error::ConfigError;
use crate::rules::{
    attempt_pour, deal_playable, evaluate_status, legal_moves, shuffle_board, unpour,
};

/// What a `select_cup` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Game over, index out of range, locked cup, or empty cup with
    /// nothing selected.
    Ignored,
    /// Cup selected as a pour source.
    Selected(usize),
    /// The selected cup was clicked again.
    Deselected,
    /// Pour succeeded; carries the recorded move and the resulting status.
    Poured { mv: Move, status: GameStatus },
    /// Pour failed; selection moved to the clicked (non-empty) cup.
    Retargeted(usize),
    /// Pour failed onto an empty cup; selection cleared.
    Cleared,
}

/// A single game: configuration, state, and its random streams.
///
/// The only writer of its [`GameState`]. Every operation is one atomic
/// transition; invalid requests leave the state as it was (or move it to
/// the documented fallback) and are reported through the return value.
///
/// ```
/// use cup_sort::games::puzzle::{Puzzle, SelectOutcome};
/// use cup_sort::core::GameStatus;
///
/// let mut puzzle = Puzzle::new(42);
/// assert_eq!(puzzle.status(), GameStatus::Playing);
///
/// let mv = puzzle.hint().unwrap();
/// puzzle.select_cup(mv.from);
/// assert!(matches!(puzzle.select_cup(mv.to), SelectOutcome::Poured { .. }));
/// assert_eq!(puzzle.state().move_count(), 1);
///
/// assert_eq!(puzzle.undo(), Some(mv));
/// assert_eq!(puzzle.state().move_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Puzzle<R: RandomSource = GameRng> {
    config: PuzzleConfig,
    state: GameState,
    deal_rng: R,
    shuffle_rng: R,
}

impl Puzzle<GameRng> {
    /// Default puzzle dealt from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self::start(
            PuzzleConfig::default(),
            rng.for_context("deal"),
            rng.for_context("shuffle"),
        )
    }

    /// Puzzle with a custom configuration.
    pub fn with_config(config: PuzzleConfig, seed: u64) -> Result<Self, ConfigError> {
        let rng = GameRng::new(seed);
        Self::with_sources(config, rng.for_context("deal"), rng.for_context("shuffle"))
    }

    /// Puzzle starting from a given board instead of a deal.
    ///
    /// The board must have the configured shape and hold exactly
    /// `capacity` units of every color in play. Later resets deal
    /// normally from `seed`.
    pub fn from_board(
        config: PuzzleConfig,
        board: Board,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate_board(&board)?;
        let rng = GameRng::new(seed);
        let status = evaluate_status(&board, config.color_count);
        let state = GameState::new(board, status, config.shuffle_uses);
        Ok(Self {
            config,
            state,
            deal_rng: rng.for_context("deal"),
            shuffle_rng: rng.for_context("shuffle"),
        })
    }
}

impl<R: RandomSource> Puzzle<R> {
    /// Puzzle drawing deals and shuffles from injected sources.
    pub fn with_sources(
        config: PuzzleConfig,
        deal_rng: R,
        shuffle_rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, deal_rng, shuffle_rng))
    }

    fn start(config: PuzzleConfig, mut deal_rng: R, shuffle_rng: R) -> Self {
        let state = Self::fresh_state(&config, &mut deal_rng);
        Self {
            config,
            state,
            deal_rng,
            shuffle_rng,
        }
    }

    fn fresh_state(config: &PuzzleConfig, rng: &mut R) -> GameState {
        let board = deal_playable(config, rng);
        let status = evaluate_status(&board, config.color_count);
        debug!(?status, "dealt new board");
        GameState::new(board, status, config.shuffle_uses)
    }

    // === Read-only view ===

    /// Current state, for renderers.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn cups(&self) -> &Board {
        self.state.cups()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// First progress-making pour, if the game is still on.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        if !self.state.status().is_playing() {
            return None;
        }
        legal_moves(self.state.cups()).next()
    }

    // === Operations ===

    /// Click on a cup.
    ///
    /// Locked cups are read-only: clicking one is ignored and keeps any
    /// pending selection. With nothing selected, a non-empty cup becomes
    /// the pour source.
    /// Clicking the source again deselects it. Clicking another cup pours
    /// into it; if that pour is illegal the selection jumps to the clicked
    /// cup when it has liquid, and clears otherwise.
    pub fn select_cup(&mut self, index: usize) -> SelectOutcome {
        if !self.state.status().is_playing() {
            trace!(index, status = ?self.state.status(), "selection ignored, game over");
            return SelectOutcome::Ignored;
        }
        let Some(cup) = self.state.cups().cup(index) else {
            trace!(index, "selection ignored, no such cup");
            return SelectOutcome::Ignored;
        };
        if self.state.cups().is_locked(index) {
            trace!(index, "selection ignored, cup is locked");
            return SelectOutcome::Ignored;
        }
        let target_empty = cup.is_empty();

        let Some(source) = self.state.selected_cup() else {
            if target_empty {
                return SelectOutcome::Ignored;
            }
            self.state.set_selected(Some(index));
            return SelectOutcome::Selected(index);
        };

        if source == index {
            self.state.set_selected(None);
            return SelectOutcome::Deselected;
        }

        match attempt_pour(self.state.cups(), source, index) {
            Ok(pour) => {
                let mv = pour.to_move(source, index);
                let status = evaluate_status(&pour.board, self.config.color_count);
                self.state.record_pour(pour.board, mv);
                self.state.set_selected(None);
                self.state.set_status(status);
                debug!(
                    from = mv.from,
                    to = mv.to,
                    count = mv.count,
                    color = %pour.color,
                    ?status,
                    "poured"
                );
                SelectOutcome::Poured { mv, status }
            }
            Err(err) => {
                trace!(%err, source, index, "pour rejected");
                if target_empty {
                    self.state.set_selected(None);
                    SelectOutcome::Cleared
                } else {
                    self.state.set_selected(Some(index));
                    SelectOutcome::Retargeted(index)
                }
            }
        }
    }

    /// Take back the last pour.
    ///
    /// Always leaves the game playing with nothing selected. Moves made
    /// before the last shuffle cannot be undone. Returns the undone move.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.state.last_undoable()?;
        match unpour(self.state.cups(), mv) {
            Ok(board) => {
                self.state.rewind(board);
                self.state.set_selected(None);
                self.state.set_status(GameStatus::Playing);
                debug!(from = mv.from, to = mv.to, count = mv.count, "undid move");
                Some(mv)
            }
            Err(err) => {
                warn!(%err, %mv, "history does not match board, undo skipped");
                None
            }
        }
    }

    /// Deal a new game with fresh shuffles and empty history.
    pub fn reset(&mut self) {
        self.state = Self::fresh_state(&self.config, &mut self.deal_rng);
    }

    /// Spend a shuffle power-up.
    ///
    /// Re-deals the liquid of every unlocked cup, clears the selection and
    /// re-evaluates status (a lost game may become playable again). No-op
    /// when no shuffles remain or the game is won. Returns whether a
    /// shuffle was spent.
    pub fn shuffle(&mut self) -> bool {
        if self.state.shuffle_count() == 0 || self.state.status() == GameStatus::Won {
            trace!(
                remaining = self.state.shuffle_count(),
                status = ?self.state.status(),
                "shuffle ignored"
            );
            return false;
        }
        let board = shuffle_board(self.state.cups(), &mut self.shuffle_rng);
        let status = evaluate_status(&board, self.config.color_count);
        self.state.spend_shuffle(board);
        self.state.set_selected(None);
        self.state.set_status(status);
        debug!(remaining = self.state.shuffle_count(), ?status, "shuffled");
        true
    }
}
