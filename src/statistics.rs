use itertools::Itertools;
use statrs::statistics::{Data, Median, Statistics};
use std::cmp::Reverse;
use std::fmt::Write;

const TIMELINE_LIMIT: usize = 5;

/// Descriptive statistics over a sample of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Summarizes `values`, or `None` for an empty sample. The standard
/// deviation is the population one.
pub fn describe(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    Some(Summary {
        min: Statistics::min(values),
        max: Statistics::max(values),
        mean: Statistics::mean(values),
        median: Data::new(values.to_vec()).median(),
        std_dev: Statistics::population_std_dev(values),
    })
}

/// Results of one player across rounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStatistics {
    name: String,
    games_played: u32,
    games_won: u32,
    best_time: Option<u32>,
    game_times: Vec<u32>,
    game_dates: Vec<String>,
}

impl PlayerStatistics {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Records a finished round. `time_secs` is only kept for wins that
    /// took a positive amount of time.
    pub fn record(&mut self, won: bool, time_secs: u32, date: impl Into<String>) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.games_won = self.games_won.saturating_add(1);
            if time_secs > 0 {
                self.game_times.push(time_secs);
                self.best_time = Some(self.best_time.map_or(time_secs, |b| b.min(time_secs)));
            }
        }
        self.game_dates.push(date.into());
    }

    /// Adds another player's game count to this one.
    pub fn merge(&mut self, other: &PlayerStatistics) {
        self.games_played = self.games_played.saturating_add(other.games_played);
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.games_played as f64
    }

    pub fn average_time(&self) -> Option<f64> {
        let times: Vec<f64> = self.game_times.iter().map(|&t| t as f64).collect();
        describe(&times).map(|s| s.mean)
    }

    pub fn time_summary(&self) -> Option<Summary> {
        let times: Vec<f64> = self.game_times.iter().map(|&t| t as f64).collect();
        describe(&times)
    }

    pub fn score(&self) -> u32 {
        self.games_played
            .saturating_mul(1000)
            .saturating_add((self.win_rate() * 100.0) as u32)
    }

    pub fn summary(&self) -> String {
        format!(
            "Player: {}, Games: {}, Won: {}, Win Rate: {:.1}%, Best Time: {}s",
            self.name,
            self.games_played,
            self.games_won,
            self.win_rate() * 100.0,
            self.best_time.unwrap_or(0)
        )
    }

    pub fn timeline(&self) -> String {
        let mut out = String::from("=== Game Timeline ===\n");
        for (i, date) in self.game_dates.iter().take(TIMELINE_LIMIT).enumerate() {
            let _ = writeln!(out, "Game {}: {}", i + 1, date);
        }
        if self.game_dates.len() > TIMELINE_LIMIT {
            let _ = writeln!(
                out,
                "... and {} more games",
                self.game_dates.len() - TIMELINE_LIMIT
            );
        }
        out
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<PlayerStatistics>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stats: PlayerStatistics) {
        self.entries.push(stats);
    }

    pub fn sort_by_score(&mut self) {
        self.entries.sort_by_key(|s| Reverse(s.score()));
    }

    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PlayerStatistics> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Names ordered from best to worst score without reordering the board.
    pub fn ranking(&self) -> Vec<&str> {
        self.entries
            .iter()
            .sorted_by_key(|s| Reverse(s.score()))
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&PlayerStatistics> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStatistics> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&[]), None);

        let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert!((summary.mean - 5.0).abs() < 1e-9);
        assert!((summary.median - 4.5).abs() < 1e-9);
        assert!((summary.std_dev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_results() {
        let mut stats = PlayerStatistics::new("Ann");
        stats.record(true, 120, "2024-05-01");
        stats.record(false, 40, "2024-05-02");
        stats.record(true, 90, "2024-05-03");
        stats.record(true, 0, "2024-05-04");

        assert_eq!(stats.games_played(), 4);
        assert_eq!(stats.games_won(), 3);
        assert_eq!(stats.best_time(), Some(90));
        assert!((stats.win_rate() - 0.75).abs() < 1e-9);
        assert_eq!(stats.average_time(), Some(105.0));
        assert_eq!(
            stats.summary(),
            "Player: Ann, Games: 4, Won: 3, Win Rate: 75.0%, Best Time: 90s"
        );
    }

    #[test]
    fn test_empty_statistics() {
        let stats = PlayerStatistics::new("Nobody");
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_time(), None);
        assert_eq!(stats.score(), 0);
    }

    #[test]
    fn test_timeline_truncates() {
        let mut stats = PlayerStatistics::new("Bo");
        for day in 1..=7 {
            stats.record(false, 0, format!("day {day}"));
        }
        let timeline = stats.timeline();
        assert!(timeline.contains("Game 5: day 5\n"));
        assert!(!timeline.contains("day 6"));
        assert!(timeline.ends_with("... and 2 more games\n"));
    }

    #[test]
    fn test_merge_adds_games() {
        let mut a = PlayerStatistics::new("A");
        let mut b = PlayerStatistics::new("B");
        a.record(true, 10, "d1");
        b.record(false, 0, "d2");
        b.record(false, 0, "d3");
        a.merge(&b);
        assert_eq!(a.games_played(), 3);
        assert_eq!(a.games_won(), 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut veteran = PlayerStatistics::new("Veteran");
        veteran.games_played = u32::MAX - 1;
        veteran.games_won = u32::MAX - 1;
        veteran.record(true, 10, "d1");
        veteran.record(true, 10, "d2");
        assert_eq!(veteran.games_played(), u32::MAX);
        assert_eq!(veteran.games_won(), u32::MAX);
        assert_eq!(veteran.score(), u32::MAX);

        let other = veteran.clone();
        veteran.merge(&other);
        assert_eq!(veteran.games_played(), u32::MAX);
    }

    #[test]
    fn test_leaderboard() {
        let mut board = Leaderboard::new();
        let mut carol = PlayerStatistics::new("Carol");
        carol.record(true, 50, "d");
        let mut alice = PlayerStatistics::new("Alice");
        alice.record(true, 60, "d");
        alice.record(false, 0, "d");
        board.add(carol);
        board.add(alice);
        board.add(PlayerStatistics::new("Bob"));

        assert_eq!(board.ranking(), vec!["Alice", "Carol", "Bob"]);
        assert_eq!(board.get(0).unwrap().name(), "Carol");

        board.sort_by_score();
        assert_eq!(board.get(0).unwrap().name(), "Alice");

        board.sort_by_name();
        let names: Vec<&str> = board.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

        assert_eq!(board.find_by_name("Bob").unwrap().games_played(), 0);
        assert!(board.find_by_name("Dave").is_none());
        assert_eq!(board.len(), 3);
    }
}
