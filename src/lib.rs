//! # cup-sort
//!
//! Rules engine and game-state machine for the cup water-sort puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: dealing, pouring, status and shuffling are functions
//!    from a board to a new board. No globals, no hidden state.
//!
//! 2. **One writer**: a [`Puzzle`] owns its [`GameState`] and is the only
//!    thing that changes it. Presentation code reads the state and calls
//!    `select_cup`, `undo`, `reset` and `shuffle`.
//!
//! 3. **Injectable randomness**: everything random goes through
//!    [`RandomSource`], so deals and shuffles replay exactly from a seed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: boards and history use `im-rs`, so
//!   snapshots clone in O(1).
//!
//! - **Absorbed errors**: rule functions return typed errors; the engine
//!   turns them into outcomes and never panics on player input.
//!
//! ## Modules
//!
//! - `core`: Colors, cups, board, moves, state, RNG, configuration
//! - `rules`: Deal, pour, status and shuffle rules
//! - `games`: The stateful puzzle engine
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    LiquidColor, Cup, Board, Move,
    GameState, GameStatus, TurnPhase,
    GameRng, GameRngState, RandomSource,
    PuzzleConfig, MAX_LAYERS, NUM_FILLED_CUPS, NUM_EMPTY_CUPS, TOTAL_CUPS, INITIAL_SHUFFLE_COUNT,
};

pub use crate::rules::{
    attempt_pour, can_pour, unpour, Pour,
    check_win, has_valid_moves, legal_moves, evaluate_status,
    deal, deal_playable, distribute,
    shuffle_board, partition, Partition,
};

pub use crate::games::puzzle::{Puzzle, SelectOutcome};

pub use crate::error::{ConfigError, PourError};
