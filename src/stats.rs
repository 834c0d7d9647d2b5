//! # Dashboard Statistics
//!
//! Aggregates over finished `SessionRecord`s supplied by the caller. Records
//! are taken in the order they were stored; "recent" means the last five.

use serde::Serialize;

use crate::session::SessionRecord;

const RECENT_GAMES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyStats {
    pub key: String,
    pub total_games: usize,
    pub average_accuracy: f64,
    pub best_score: u32,
    pub recent_accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_games: usize,
    pub overall_accuracy: f64,
    /// Key with the most games
    pub favorite_key: Option<String>,
    /// Sorted by number of games, most played first
    pub key_stats: Vec<KeyStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighScore {
    pub key: String,
    pub score: u32,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean<'a>(records: impl Iterator<Item = &'a SessionRecord>) -> f64 {
    let (sum, count) = records.fold((0.0, 0usize), |(sum, count), r| (sum + r.accuracy, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Keys in order of first appearance
fn keys_in_order(records: &[SessionRecord]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for record in records {
        if !keys.contains(&record.key.as_str()) {
            keys.push(&record.key);
        }
    }
    keys
}

/// Stats for one key; zeroed when it has no games
pub fn key_stats(records: &[SessionRecord], key: &str) -> KeyStats {
    let games: Vec<&SessionRecord> = records.iter().filter(|r| r.key == key).collect();
    let recent = &games[games.len().saturating_sub(RECENT_GAMES)..];
    KeyStats {
        key: key.to_string(),
        total_games: games.len(),
        average_accuracy: round2(mean(games.iter().copied())),
        best_score: games.iter().map(|r| r.score).max().unwrap_or(0),
        recent_accuracy: round2(mean(recent.iter().copied())),
    }
}

pub fn overall_stats(records: &[SessionRecord]) -> OverallStats {
    let mut per_key: Vec<KeyStats> = keys_in_order(records)
        .into_iter()
        .map(|key| key_stats(records, key))
        .collect();
    // Stable: ties keep first-played order
    per_key.sort_by(|a, b| b.total_games.cmp(&a.total_games));

    OverallStats {
        total_games: records.len(),
        overall_accuracy: round2(mean(records.iter())),
        favorite_key: per_key.first().map(|s| s.key.clone()),
        key_stats: per_key,
    }
}

/// Best score per key, highest first
pub fn high_scores(records: &[SessionRecord]) -> Vec<HighScore> {
    let mut scores: Vec<HighScore> = keys_in_order(records)
        .into_iter()
        .map(|key| HighScore {
            key: key.to_string(),
            score: key_stats(records, key).best_score,
        })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
