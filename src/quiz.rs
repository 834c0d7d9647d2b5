//! # Quiz Questions
//!
//! Turns quiz settings into questions and checks answers. The engine keeps no
//! state between questions; a `Question` carries its own expected answer.
//!
//! ## Modes
//! - `number-to-chord` - shown a degree label in a key, pick the chord
//! - `chord-to-number` - shown a chord in a key, pick its degree label
//! - `transposition` - shown a chord in a source key, pick the same degree in the target key
//! - `intervals` - shown two notes, pick the interval from the first up to the second
//! - `interval-transpose` - shown a note, an interval and a direction, pick the note reached
//!
//! ## Answer Checking
//! Chord and note answers compare with [`chords_equal()`], so a player who
//! answers "Db" to a question expecting "C#/Db" is right. Labels and
//! intervals compare by identity after parsing.

use std::fmt;

use log::debug;
use rand::Rng;

use crate::api;
use crate::config::QuizSettings;
use crate::degree::DegreeLabel;
use crate::enharmonic::chords_equal;
use crate::interval::{interval_between, Interval};
use crate::pitch::{Chord, PitchClass};
use crate::random::{self, IntervalQuestion};
use crate::table::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    NumberToChord,
    ChordToNumber,
    Transposition,
    Intervals,
    IntervalTranspose,
}

impl QuizMode {
    pub const ALL: [QuizMode; 5] = [
        QuizMode::NumberToChord,
        QuizMode::ChordToNumber,
        QuizMode::Transposition,
        QuizMode::Intervals,
        QuizMode::IntervalTranspose,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuizMode::NumberToChord => "number-to-chord",
            QuizMode::ChordToNumber => "chord-to-number",
            QuizMode::Transposition => "transposition",
            QuizMode::Intervals => "intervals",
            QuizMode::IntervalTranspose => "interval-transpose",
        }
    }

    pub fn from_name(name: &str) -> Option<QuizMode> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|mode| mode.name() == name)
    }

    /// Instruction shown above the prompt
    pub fn instruction(self, include_parallel_minor: bool) -> String {
        let range = if include_parallel_minor { "I-vi, i-♭VII" } else { "I-vi" };
        match self {
            QuizMode::NumberToChord => format!("Select the chord for ({})", range),
            QuizMode::ChordToNumber => format!("Select the number for ({})", range),
            QuizMode::Transposition => "Transpose this chord".to_string(),
            QuizMode::Intervals => "Name the interval".to_string(),
            QuizMode::IntervalTranspose => "Find the note".to_string(),
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the player is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Degree { key: Key, label: DegreeLabel },
    Chord { key: Key, chord: Chord },
    Transposition { source: Key, target: Key, chord: Chord },
    Interval { from: PitchClass, to: PitchClass },
    Step(IntervalQuestion),
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Degree { key, label } => write!(f, "{} in {} major", label, key),
            Prompt::Chord { key, chord } => write!(f, "{} in {} major", chord, key),
            Prompt::Transposition { source, target, chord } => {
                write!(f, "{} from {} to {}", chord, source, target)
            }
            Prompt::Interval { from, to } => write!(f, "{} to {}", from, to),
            Prompt::Step(step) => write!(f, "{} {} {}", step.start, step.interval, step.direction),
        }
    }
}

/// The expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Chord(Chord),
    Degree(DegreeLabel),
    Interval(Interval),
    Note(PitchClass),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Chord(chord) => write!(f, "{}", chord),
            Answer::Degree(label) => write!(f, "{}", label),
            Answer::Interval(interval) => write!(f, "{}", interval),
            Answer::Note(note) => write!(f, "{}", note),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: Prompt,
    pub answer: Answer,
}

impl Question {
    /// Whether a player's response is the expected answer
    pub fn check(&self, response: &str) -> bool {
        match self.answer {
            Answer::Chord(chord) => chords_equal(response, &chord.name()),
            Answer::Note(note) => chords_equal(response, note.name()),
            Answer::Degree(label) => DegreeLabel::from_name(response) == Some(label),
            Answer::Interval(interval) => Interval::from_name(response) == Some(interval),
        }
    }

    /// The key a question is asked in, if any
    pub fn key(&self) -> Option<Key> {
        match self.prompt {
            Prompt::Degree { key, .. } | Prompt::Chord { key, .. } => Some(key),
            Prompt::Transposition { source, .. } => Some(source),
            Prompt::Interval { .. } | Prompt::Step(_) => None,
        }
    }

    /// Source and target of a transposition question
    pub fn transposition_keys(&self) -> Option<(Key, Key)> {
        match self.prompt {
            Prompt::Transposition { source, target, .. } => Some((source, target)),
            _ => None,
        }
    }
}

/// Generate the next question for the settings
pub fn generate_question<R: Rng>(settings: &QuizSettings, rng: &mut R) -> Question {
    let include = settings.include_parallel_minor;
    let question = match settings.mode {
        QuizMode::NumberToChord => {
            let key = settings.key.pick(rng);
            let label = random::random_degree_label_with(rng, include);
            Question {
                prompt: Prompt::Degree { key, label },
                answer: Answer::Chord(key.chord(label)),
            }
        }
        QuizMode::ChordToNumber => {
            let key = settings.key.pick(rng);
            let label = random::random_degree_label_with(rng, include);
            Question {
                prompt: Prompt::Chord {
                    key,
                    chord: key.chord(label),
                },
                answer: Answer::Degree(label),
            }
        }
        QuizMode::Transposition => {
            let source = settings.key.pick(rng);
            let target = settings.target_key.pick(rng);
            let label = random::random_degree_label_with(rng, include);
            Question {
                prompt: Prompt::Transposition {
                    source,
                    target,
                    chord: source.chord(label),
                },
                answer: Answer::Chord(target.chord(label)),
            }
        }
        QuizMode::Intervals => {
            let from = random::random_note_with(rng);
            let to = random::random_note_with(rng);
            Question {
                prompt: Prompt::Interval { from, to },
                answer: Answer::Interval(interval_between(from, to)),
            }
        }
        QuizMode::IntervalTranspose => {
            let step = random::random_interval_question_with(rng);
            Question {
                prompt: Prompt::Step(step),
                answer: Answer::Note(step.answer),
            }
        }
    };
    debug!("{} question: {} (answer {})", settings.mode, question.prompt, question.answer);
    question
}

/// The answer buttons for a mode
pub fn answer_choices(mode: QuizMode, include_parallel_minor: bool) -> Vec<String> {
    match mode {
        QuizMode::NumberToChord | QuizMode::Transposition => api::all_display_chords(),
        QuizMode::ChordToNumber => api::all_degree_labels(include_parallel_minor),
        QuizMode::Intervals => api::all_interval_names(),
        QuizMode::IntervalTranspose => api::all_notes(),
    }
}
