//! Core puzzle types: colors, cups, board, moves, state, RNG, configuration.
//!
//! Everything here is plain data plus local invariants. Rules that look at
//! more than one cup live in `rules`.

pub mod color;
pub mod cup;
pub mod board;
pub mod moves;
pub mod state;
pub mod rng;
pub mod config;

pub use color::LiquidColor;
pub use cup::Cup;
pub use board::Board;
pub use moves::Move;
pub use state::{GameState, GameStatus, TurnPhase};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{
    PuzzleConfig, DEFAULT_DEAL_ATTEMPTS, INITIAL_SHUFFLE_COUNT, MAX_LAYERS, NUM_EMPTY_CUPS,
    NUM_FILLED_CUPS, TOTAL_CUPS,
};
