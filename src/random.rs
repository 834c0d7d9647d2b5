//! # Random Selectors
//!
//! Uniform picks over the engine's closed sets. Each selector has a `_with`
//! form taking any `rand::Rng` (seedable in tests) and a convenience form
//! drawing from the thread-local generator.

use rand::Rng;

use crate::degree::DegreeLabel;
use crate::interval::{transpose_by_interval, Direction, Interval};
use crate::pitch::{Chord, PitchClass};
use crate::resolver::chord_for_degree;
use crate::table::Key;

/// A "step from a note" question with its answer precomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalQuestion {
    pub start: PitchClass,
    pub interval: Interval,
    pub direction: Direction,
    pub answer: PitchClass,
}

fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

pub fn random_key_with<R: Rng>(rng: &mut R) -> Key {
    pick(rng, &Key::ALL)
}

pub fn random_note_with<R: Rng>(rng: &mut R) -> PitchClass {
    pick(rng, &PitchClass::ALL)
}

pub fn random_degree_label_with<R: Rng>(rng: &mut R, include_parallel_minor: bool) -> DegreeLabel {
    pick(rng, DegreeLabel::active(include_parallel_minor))
}

pub fn random_chord_from_key_with<R: Rng>(
    rng: &mut R,
    key: Key,
    include_parallel_minor: bool,
) -> Option<Chord> {
    let label = random_degree_label_with(rng, include_parallel_minor);
    chord_for_degree(key, label, include_parallel_minor)
}

pub fn random_interval_question_with<R: Rng>(rng: &mut R) -> IntervalQuestion {
    let start = random_note_with(rng);
    let interval = pick(rng, &Interval::ALL);
    let direction = pick(rng, &Direction::ALL);
    IntervalQuestion {
        start,
        interval,
        direction,
        answer: transpose_by_interval(start, interval, direction),
    }
}

pub fn random_key() -> Key {
    random_key_with(&mut rand::thread_rng())
}

pub fn random_degree_label(include_parallel_minor: bool) -> DegreeLabel {
    random_degree_label_with(&mut rand::thread_rng(), include_parallel_minor)
}

pub fn random_chord_from_key(key: Key, include_parallel_minor: bool) -> Option<Chord> {
    random_chord_from_key_with(&mut rand::thread_rng(), key, include_parallel_minor)
}

pub fn random_interval_question() -> IntervalQuestion {
    random_interval_question_with(&mut rand::thread_rng())
}
