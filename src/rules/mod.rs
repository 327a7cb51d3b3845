//! Pure puzzle rules.
//!
//! Every function here maps a board (and, for the random parts, a
//! [`RandomSource`](crate::core::RandomSource)) to a new value. Nothing in
//! this module holds state; [`Puzzle`](crate::games::puzzle::Puzzle) wires
//! the rules into the game loop.
//!
//! - `deal`: initial distribution of liquid into cups
//! - `pour`: pour legality, execution and reversal
//! - `status`: win/loss detection and move enumeration
//! - `shuffle`: the shuffle power-up

pub mod deal;
pub mod pour;
pub mod status;
pub mod shuffle;

pub use deal::{deal, deal_playable, distribute};
pub use pour::{attempt_pour, can_pour, unpour, Pour};
pub use status::{check_win, evaluate_status, has_valid_moves, legal_moves};
pub use shuffle::{partition, shuffle_board, Partition};
