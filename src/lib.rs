pub mod difficulty;
pub mod error;
pub mod field;
pub mod game;
pub mod position;
pub mod statistics;
pub mod status;
pub mod timer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use difficulty::{DifficultyCatalog, DifficultySettings};
pub use error::{GameError, Result};
pub use field::{CellState, MineField};
pub use game::{Action, ClickOutcome, Game};
pub use position::Position;
pub use statistics::{describe, Leaderboard, PlayerStatistics, Summary};
pub use status::{GameStatus, HistoryEntry, StatusTracker};
pub use timer::{format_time, RoundTimer};
