//! # Public API
//!
//! The name-based boundary collaborators call: a quiz screen hands over the
//! strings on its buttons ("C", "♭VII", "F#m/Gbm", "P5") and gets strings
//! back. Every function here parses its arguments into the typed engine
//! (`Key`, `DegreeLabel`, `Chord`, `Interval`) and formats the result with
//! canonical display names.
//!
//! A name outside its closed set, or a lookup with no answer, is `None`.
//!
//! ## Typical Usage
//!
//! ```rust
//! use scale_genius::{chord_for_degree, chords_equal, degree_for_chord, transpose_chord};
//!
//! assert_eq!(chord_for_degree("C", "V", false).as_deref(), Some("G"));
//! assert_eq!(degree_for_chord("C", "G", false).as_deref(), Some("V"));
//! assert_eq!(chord_for_degree("C", "♭VII", true).as_deref(), Some("A#/Bb"));
//! assert_eq!(transpose_chord("G", "C", "D").as_deref(), Some("A"));
//! assert!(chords_equal("C#", "Db"));
//! ```

use crate::degree::DegreeLabel;
use crate::interval::{self, Direction, Interval};
use crate::pitch::{Chord, PitchClass};
use crate::random::{self, IntervalQuestion};
use crate::table::Key;
use crate::{resolver, transpose};

/// Chord a degree label names in a key
pub fn chord_for_degree(key: &str, label: &str, include_parallel_minor: bool) -> Option<String> {
    let key = Key::from_name(key)?;
    let label = DegreeLabel::from_name(label)?;
    resolver::chord_for_degree(key, label, include_parallel_minor).map(Chord::name)
}

/// Degree label of a chord in a key
pub fn degree_for_chord(key: &str, chord: &str, include_parallel_minor: bool) -> Option<String> {
    let key = Key::from_name(key)?;
    let chord = Chord::from_name(chord)?;
    resolver::degree_for_chord(key, chord, include_parallel_minor).map(|label| label.name().to_string())
}

/// Move a chord from one key to the same degree of another
pub fn transpose_chord(chord: &str, source_key: &str, target_key: &str) -> Option<String> {
    let chord = Chord::from_name(chord)?;
    let source = Key::from_name(source_key)?;
    let target = Key::from_name(target_key)?;
    transpose::transpose_chord(chord, source, target).map(Chord::name)
}

/// Interval name from `from` up to `to`; `None` only for unknown note names
pub fn interval_between(from: &str, to: &str) -> Option<String> {
    let from = PitchClass::from_name(from)?;
    let to = PitchClass::from_name(to)?;
    Some(interval::interval_between(from, to).name().to_string())
}

/// Note reached from `note` by a named interval, `direction` "up" or "down"
pub fn transpose_by_interval(note: &str, interval: &str, direction: &str) -> Option<String> {
    let note = PitchClass::from_name(note)?;
    let interval = Interval::from_name(interval)?;
    let direction = Direction::from_name(direction)?;
    Some(interval::transpose_by_interval(note, interval, direction).name().to_string())
}

pub fn random_key() -> String {
    random::random_key().name().to_string()
}

pub fn random_degree_label(include_parallel_minor: bool) -> String {
    random::random_degree_label(include_parallel_minor).name().to_string()
}

pub fn random_chord_from_key(key: &str, include_parallel_minor: bool) -> Option<String> {
    let key = Key::from_name(key)?;
    random::random_chord_from_key(key, include_parallel_minor).map(Chord::name)
}

pub fn random_interval_question() -> IntervalQuestion {
    random::random_interval_question()
}

/// The twelve key names, chromatic from C
pub fn all_keys() -> Vec<String> {
    Key::ALL.iter().map(|key| key.name().to_string()).collect()
}

pub fn all_degree_labels(include_parallel_minor: bool) -> Vec<String> {
    DegreeLabel::active(include_parallel_minor)
        .iter()
        .map(|label| label.name().to_string())
        .collect()
}

/// The 24 chord buttons: twelve majors, then twelve minors
pub fn all_display_chords() -> Vec<String> {
    Chord::all().into_iter().map(Chord::name).collect()
}

pub fn all_notes() -> Vec<String> {
    PitchClass::ALL.iter().map(|p| p.name().to_string()).collect()
}

pub fn all_interval_names() -> Vec<String> {
    Interval::ALL.iter().map(|i| i.name().to_string()).collect()
}
