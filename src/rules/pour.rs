//! Pour legality and execution.
//!
//! A pour moves the top run of one cup onto another. It is legal when the
//! source has liquid, the target has room, and the target is either empty
//! or topped with the same color. As much of the run moves as fits.

use crate::core::{Board, Cup, LiquidColor, Move};
use crate::error::PourError;

/// Result of a successful pour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pour {
    /// Board after the pour.
    pub board: Board,
    /// Units moved (always at least 1).
    pub moved: usize,
    /// Color of the moved units.
    pub color: LiquidColor,
}

impl Pour {
    /// History record for this pour.
    #[must_use]
    pub fn to_move(&self, from: usize, to: usize) -> Move {
        Move::new(from, to, self.moved)
    }
}

/// Legality check on two cups, ignoring indices.
#[must_use]
pub fn can_pour(from: &Cup, to: &Cup, capacity: usize) -> bool {
    check_cups(from, to, capacity, 0, 0).is_ok()
}

fn check_cups(
    from: &Cup,
    to: &Cup,
    capacity: usize,
    from_index: usize,
    to_index: usize,
) -> Result<LiquidColor, PourError> {
    let color = from.top().ok_or(PourError::SourceEmpty(from_index))?;
    if to.is_full(capacity) {
        return Err(PourError::TargetFull(to_index));
    }
    match to.top() {
        Some(target) if target != color => Err(PourError::ColorMismatch {
            poured: color,
            target,
        }),
        _ => Ok(color),
    }
}

/// Pour the top run of cup `from` into cup `to`.
///
/// Moves `min(top run, free space)` units. The input board is untouched.
pub fn attempt_pour(board: &Board, from: usize, to: usize) -> Result<Pour, PourError> {
    let source = board.try_cup(from)?;
    let target = board.try_cup(to)?;
    if from == to {
        return Err(PourError::SameCup(from));
    }

    let capacity = board.capacity();
    let color = check_cups(source, target, capacity, from, to)?;
    let moved = source.top_run().min(target.space(capacity));

    let mut source = source.clone();
    let mut target = target.clone();
    source
        .take_top(moved)
        .ok_or(PourError::ShortRun { cup: from, count: moved })?;
    target.push_units(color, moved);

    let mut next = board.clone();
    next.replace(from, source);
    next.replace(to, target);

    Ok(Pour {
        board: next,
        moved,
        color,
    })
}

/// Reverse a recorded move.
///
/// Takes `mv.count` units of the top color off cup `mv.to` and puts them
/// back on cup `mv.from`. Only valid directly on top of the state the move
/// produced; anything else is rejected.
pub fn unpour(board: &Board, mv: Move) -> Result<Board, PourError> {
    let back = mv.reversed();
    let source = board.try_cup(back.from)?;
    let target = board.try_cup(back.to)?;
    if back.from == back.to {
        return Err(PourError::SameCup(back.from));
    }
    if target.space(board.capacity()) < back.count {
        return Err(PourError::TargetFull(back.to));
    }

    let mut source = source.clone();
    let color = source.take_top(back.count).ok_or(PourError::ShortRun {
        cup: back.from,
        count: back.count,
    })?;
    let mut target = target.clone();
    target.push_units(color, back.count);

    let mut next = board.clone();
    next.replace(back.from, source);
    next.replace(back.to, target);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LiquidColor::*;

    fn board(cups: &[&[LiquidColor]]) -> Board {
        Board::new(cups.iter().map(|c| Cup::from_colors(c)), 4)
    }

    #[test]
    fn test_pour_onto_empty_moves_whole_run_that_fits() {
        let b = board(&[&[Blue, Red, Red, Red], &[]]);
        let pour = attempt_pour(&b, 0, 1).unwrap();

        assert_eq!(pour.moved, 3);
        assert_eq!(pour.color, Red);
        assert_eq!(pour.board.cup(0).unwrap().units(), &[Blue]);
        assert_eq!(pour.board.cup(1).unwrap().units(), &[Red, Red, Red]);
        assert_eq!(pour.to_move(0, 1), Move::new(0, 1, 3));
    }

    #[test]
    fn test_pour_limited_by_space() {
        let b = board(&[&[Green, Green, Green], &[Yellow, Yellow, Green]]);
        let pour = attempt_pour(&b, 0, 1).unwrap();

        assert_eq!(pour.moved, 1);
        assert_eq!(pour.board.cup(0).unwrap().units(), &[Green, Green]);
        assert_eq!(pour.board.cup(1).unwrap().units(), &[Yellow, Yellow, Green, Green]);
    }

    #[test]
    fn test_pour_does_not_touch_input() {
        let b = board(&[&[Red], &[]]);
        let _ = attempt_pour(&b, 0, 1).unwrap();
        assert_eq!(b.cup(0).unwrap().units(), &[Red]);
        assert!(b.cup(1).unwrap().is_empty());
    }

    #[test]
    fn test_rejections() {
        let b = board(&[&[], &[Red, Red, Red, Red], &[Blue], &[Red]]);

        assert_eq!(attempt_pour(&b, 0, 2), Err(PourError::SourceEmpty(0)));
        assert_eq!(attempt_pour(&b, 3, 1), Err(PourError::TargetFull(1)));
        assert_eq!(
            attempt_pour(&b, 2, 3),
            Err(PourError::ColorMismatch { poured: Blue, target: Red })
        );
        assert_eq!(attempt_pour(&b, 2, 2), Err(PourError::SameCup(2)));
        assert_eq!(
            attempt_pour(&b, 2, 9),
            Err(PourError::CupOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_can_pour() {
        let red = Cup::from_colors(&[Red]);
        let full = Cup::from_colors(&[Red; 4]);
        let blue = Cup::from_colors(&[Blue]);
        let empty = Cup::new();

        assert!(can_pour(&red, &empty, 4));
        assert!(can_pour(&full, &red, 4));
        assert!(!can_pour(&red, &full, 4));
        assert!(!can_pour(&red, &blue, 4));
        assert!(!can_pour(&empty, &red, 4));
    }

    #[test]
    fn test_unpour_restores_board() {
        let b = board(&[&[Blue, Red, Red], &[Red], &[]]);
        for (from, to) in [(0, 1), (0, 2), (1, 0), (1, 2)] {
            let pour = attempt_pour(&b, from, to).unwrap();
            let restored = unpour(&pour.board, pour.to_move(from, to)).unwrap();
            assert_eq!(restored, b, "pour {from} -> {to}");
        }
    }

    #[test]
    fn test_unpour_rejects_stale_moves() {
        let b = board(&[&[Red, Red, Red, Red], &[Blue]]);
        assert_eq!(
            unpour(&b, Move::new(0, 1, 1)),
            Err(PourError::TargetFull(0))
        );
        assert_eq!(
            unpour(&b, Move::new(1, 0, 2)).map(|_| ()),
            Ok(())
        );
        let b = board(&[&[], &[Blue, Red]]);
        assert_eq!(
            unpour(&b, Move::new(0, 1, 2)),
            Err(PourError::ShortRun { cup: 1, count: 2 })
        );
    }
}
