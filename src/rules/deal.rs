//! Board initialization.
//!
//! A deal builds `capacity` units of every color in play, permutes them
//! uniformly, then fills cups left to right with
//! `min(capacity, ceil(remaining units / remaining cups))` units each.
//! The ceiling spread places every unit without overfilling a cup and
//! leaves the headroom spread over the trailing cups.
//!
//! Deals are not checked for solvability.

use tracing::{debug, warn};

use crate::core::{Board, Cup, LiquidColor, PuzzleConfig, RandomSource};

use super::status::evaluate_status;

/// Spread `units` (in order) over `cup_count` cups of `capacity`.
///
/// Units beyond `cup_count * capacity` are dropped; callers size the pool
/// from a validated config or from cups that already held it.
#[must_use]
pub fn distribute(units: &[LiquidColor], cup_count: usize, capacity: usize) -> Vec<Cup> {
    debug_assert!(units.len() <= cup_count * capacity);

    let mut rest = units;
    (0..cup_count)
        .map(|i| {
            let remaining_cups = cup_count - i;
            let take = capacity
                .min(rest.len().div_ceil(remaining_cups))
                .min(rest.len());
            let (cup, tail) = rest.split_at(take);
            rest = tail;
            Cup::from_colors(cup)
        })
        .collect()
}

/// One random deal.
pub fn deal<R: RandomSource>(config: &PuzzleConfig, rng: &mut R) -> Board {
    let mut units: Vec<LiquidColor> = config
        .colors()
        .iter()
        .flat_map(|&color| std::iter::repeat(color).take(config.capacity))
        .collect();
    rng.permute(&mut units);

    Board::new(
        distribute(&units, config.total_cups(), config.capacity),
        config.capacity,
    )
}

/// Deal until the opening position has a move and is not already solved.
///
/// Gives up after `config.max_deal_attempts` and returns the last deal.
/// With the default configuration the first deal always qualifies: nine
/// tops over seven colors guarantee a shared top, and the single full cup
/// sits beside cups with room.
pub fn deal_playable<R: RandomSource>(config: &PuzzleConfig, rng: &mut R) -> Board {
    let attempts = config.max_deal_attempts.max(1);
    let mut board = deal(config, rng);
    for attempt in 1..attempts {
        if evaluate_status(&board, config.color_count).is_playing() {
            debug!(attempt, "dealt playable board");
            return board;
        }
        board = deal(config, rng);
    }
    if !evaluate_status(&board, config.color_count).is_playing() {
        warn!(attempts, "no playable deal found, keeping the last one");
    }
    board
}
