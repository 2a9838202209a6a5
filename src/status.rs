use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

const MAX_HISTORY: usize = 100;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    TimeUp,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// End-of-round message for the player.
    pub fn description(self) -> &'static str {
        match self {
            GameStatus::Playing => "Game in progress...",
            GameStatus::Won => "Congratulations! You won!",
            GameStatus::Lost => "You stepped on a mine! Game over.",
            GameStatus::TimeUp => "Time is up! You lost.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub event: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp.format(TIMESTAMP_FORMAT), self.event)
    }
}

/// Tracks whether a round is still being played. Once a terminal status is
/// reached it sticks until [`StatusTracker::reset`] or
/// [`StatusTracker::start_new_game`].
#[derive(Debug, Clone)]
pub struct StatusTracker {
    status: GameStatus,
    name: String,
    history: VecDeque<HistoryEntry>,
}

impl StatusTracker {
    pub fn new() -> Self {
        let mut tracker = Self::blank("Default Game".to_string());
        tracker.add_to_history("Game created");
        tracker
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut tracker = Self::blank(name.clone());
        tracker.add_to_history(format!("Game created with name: {name}"));
        tracker
    }

    fn blank(name: String) -> Self {
        Self {
            status: GameStatus::Playing,
            name,
            history: VecDeque::with_capacity(MAX_HISTORY),
        }
    }

    pub fn start_new_game(&mut self) {
        self.status = GameStatus::Playing;
        self.add_to_history("New game started");
    }

    pub fn process_cell_open(&mut self, was_mine: bool) {
        if self.status.is_terminal() {
            return;
        }

        if was_mine {
            self.add_to_history("Player stepped on a mine!");
            self.end_game(GameStatus::Lost);
        } else {
            self.add_to_history("Cell opened successfully");
        }
    }

    /// Running out of time takes precedence over a simultaneous win.
    pub fn check_game_completion(&mut self, has_won: bool, is_time_up: bool) {
        if self.status.is_terminal() {
            return;
        }

        if is_time_up {
            self.end_game(GameStatus::TimeUp);
        } else if has_won {
            self.end_game(GameStatus::Won);
        }
    }

    /// Moves a round in progress to `status`. Ignored when the round has
    /// already ended or `status` is not terminal.
    pub fn end_game(&mut self, status: GameStatus) {
        if self.status.is_terminal() || !status.is_terminal() {
            return;
        }

        self.status = status;
        log::info!("{}: round ended ({:?})", self.name, status);
        self.add_to_history(format!("Game ended: {}", status.description()));
    }

    pub fn reset(&mut self) {
        self.status = GameStatus::Playing;
        self.history.clear();
        self.add_to_history("Game reset");
    }

    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_active(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn add_to_history(&mut self, event: impl Into<String>) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            timestamp: Local::now(),
            event: event.into(),
        });
    }

    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn full_history(&self) -> String {
        let mut report = format!("Game History for: {}\n{}\n", self.name, "=".repeat(40));
        for entry in &self.history {
            report.push_str(&entry.to_string());
            report.push('\n');
        }
        report
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() || name == self.name {
            return;
        }

        let old = std::mem::replace(&mut self.name, name);
        let event = format!("Game renamed from '{}' to '{}'", old, self.name);
        self.add_to_history(event);
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatusTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameState: {}, Status: {}, History entries: {}",
            self.name,
            self.status.description(),
            self.history.len()
        )
    }
}
