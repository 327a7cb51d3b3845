//! Win/loss detection.

use crate::core::{Board, GameStatus, Move};

use super::pour::can_pour;

/// True when every non-empty cup is locked and exactly `solved_cups` of
/// them exist (one per color in play).
#[must_use]
pub fn check_win(board: &Board, solved_cups: usize) -> bool {
    let capacity = board.capacity();
    let mut solved = 0;
    for cup in board.cups().filter(|cup| !cup.is_empty()) {
        if !cup.is_settled(capacity) {
            return false;
        }
        solved += 1;
    }
    solved == solved_cups
}

/// Every legal pour that makes progress, as moves with their unit counts.
///
/// Locked cups cannot be selected, so they are never a source. Order: by
/// source, then by target.
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    let capacity = board.capacity();
    board.cups().enumerate().flat_map(move |(from, source)| {
        board.cups().enumerate().filter_map(move |(to, target)| {
            if from == to || source.is_settled(capacity) || !can_pour(source, target, capacity) {
                return None;
            }
            let moved = source.top_run().min(target.space(capacity));
            Some(Move::new(from, to, moved))
        })
    })
}

/// Whether any progress-making pour exists.
#[must_use]
pub fn has_valid_moves(board: &Board) -> bool {
    legal_moves(board).next().is_some()
}

/// Status after a board change: won, else lost when stuck, else playing.
#[must_use]
pub fn evaluate_status(board: &Board, solved_cups: usize) -> GameStatus {
    if check_win(board, solved_cups) {
        GameStatus::Won
    } else if !has_valid_moves(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}
