//! # Sessions
//!
//! The running tally of one game, the countdown that ends a timed game, and
//! the flat record handed to whatever stores finished games.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{QuizSettings, TimerMode};
use crate::table::Key;

/// Score for one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total_questions: u32,
    pub correct_answers: u32,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        self.total_questions += 1;
        if correct {
            self.correct_answers += 1;
        }
    }

    /// One point per correct answer
    pub fn score(&self) -> u32 {
        self.correct_answers
    }

    /// Percentage of correct answers, rounded; 0 before the first question
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        (self.correct_answers as f64 / self.total_questions as f64 * 100.0).round()
    }
}

/// Deadline of a timed game
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    deadline: Option<Instant>,
}

impl Countdown {
    pub fn start(timer: TimerMode) -> Self {
        Self::start_at(timer, Instant::now())
    }

    pub fn start_at(timer: TimerMode, now: Instant) -> Self {
        let deadline = match timer {
            TimerMode::Untimed => None,
            TimerMode::Seconds(seconds) => Some(now + Duration::from_secs(seconds)),
        };
        Countdown { deadline }
    }

    /// Time left, `None` when untimed
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(Instant::now())
    }

    /// Once expired, no further answers count
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_some_and(|left| left.is_zero())
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// One finished game, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub key: String,
    pub mode: String,
    pub timer_mode: String,
    pub score: u32,
    pub total_questions: u32,
    pub accuracy: f64,
}

impl SessionRecord {
    /// `played` is the last source and target of a transposition game
    pub fn new(
        session_id: String,
        settings: &QuizSettings,
        tally: &Tally,
        played: Option<(Key, Key)>,
    ) -> Self {
        let record = SessionRecord {
            session_id,
            key: settings.key_label(played),
            mode: settings.mode.name().to_string(),
            timer_mode: settings.timer.name(),
            score: tally.score(),
            total_questions: tally.total_questions,
            accuracy: tally.accuracy(),
        };
        info!(
            "session {} finished: {}/{} in {} ({}%)",
            record.session_id, record.score, record.total_questions, record.mode, record.accuracy
        );
        record
    }
}

/// `session_<unix millis>_<9 random base-36 digits>`
pub fn generate_session_id<R: Rng>(rng: &mut R) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: String = (0..9)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect();
    format!("session_{}_{}", millis, suffix)
}

/// Encouragement shown with the final accuracy
pub fn accuracy_message(accuracy: f64) -> &'static str {
    if accuracy >= 90.0 {
        "Outstanding!"
    } else if accuracy >= 70.0 {
        "Great job!"
    } else if accuracy >= 50.0 {
        "Good effort!"
    } else {
        "Keep practicing!"
    }
}
