//! Shuffle power-up: re-deal the liquid in unsolved cups.
//!
//! Three pure phases:
//! 1. Partition: locked cups stay put, every other cup is active.
//! 2. Permute: pool the active cups' units and Fisher-Yates them.
//! 3. Redistribute: spread the pool back over the active cups with the
//!    same ceiling spread used by the initial deal.

use crate::core::{Board, LiquidColor, RandomSource};

use super::deal::distribute;

/// Indices of locked and active cups, in board order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub settled: Vec<usize>,
    pub active: Vec<usize>,
}

/// Split cups into locked and active.
#[must_use]
pub fn partition(board: &Board) -> Partition {
    let (settled, active): (Vec<usize>, Vec<usize>) =
        (0..board.len()).partition(|&i| board.is_locked(i));
    Partition { settled, active }
}

/// Shuffle the board's unsolved liquid.
///
/// Locked cups come back unchanged. Unit counts per color are conserved
/// and no cup exceeds capacity.
pub fn shuffle_board<R: RandomSource>(board: &Board, rng: &mut R) -> Board {
    let Partition { active, .. } = partition(board);

    let mut pool: Vec<LiquidColor> = active
        .iter()
        .filter_map(|&i| board.cup(i))
        .flat_map(|cup| cup.units().iter().copied())
        .collect();
    rng.permute(&mut pool);

    let refilled = distribute(&pool, active.len(), board.capacity());
    let mut next = board.clone();
    for (index, cup) in active.into_iter().zip(refilled) {
        next.replace(index, cup);
    }
    next
}
