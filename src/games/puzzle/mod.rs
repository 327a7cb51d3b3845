//! The cup water-sort puzzle.
//!
//! Pour stacked colored liquid between cups until every color fills a cup
//! of its own:
//! - Click a cup to pick it up, click another to pour its top run
//! - A pour lands on an empty cup or on the same color, as much as fits
//! - Undo takes back pours; shuffle re-deals unsolved cups (limited uses)
//! - The game is lost when no pour makes progress

mod game;

pub use game::{Puzzle, SelectOutcome};
