//! # Interval Engine
//!
//! Pitch-class arithmetic: naming the interval from one note up to another,
//! and stepping from a note by a named interval.
//!
//! ## Interval Table
//! ```text
//! semitones  1   2   3   4   5   6   7   8   9   10  11  12
//! name       m2  M2  m3  M3  P4  TT  P5  m6  M6  m7  M7  P8
//! ```
//!
//! Distances are measured upward modulo the octave. Two notes of the same
//! pitch class are an octave apart (P8), never zero.

use std::fmt;

use crate::pitch::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    Octave,
}

impl Interval {
    /// Ordered by size, m2 to P8
    pub const ALL: [Interval; 12] = [
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
        Interval::Octave,
    ];

    /// Size in semitones, 1-12
    pub fn semitones(self) -> i32 {
        self as i32 + 1
    }

    /// Interval for a distance of 1-12 semitones
    pub fn from_semitones(semitones: i32) -> Option<Interval> {
        usize::try_from(semitones - 1)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::Tritone => "TT",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::Octave => "P8",
        }
    }

    /// Parse an interval name; "A4" and "d5" are accepted for the tritone
    pub fn from_name(name: &str) -> Option<Interval> {
        match name.trim() {
            "A4" | "d5" => Some(Interval::Tritone),
            name => Self::ALL.iter().copied().find(|i| i.name() == name),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn from_name(name: &str) -> Option<Direction> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interval from `from` up to `to`
///
/// # Examples
/// ```
/// use scale_genius::interval::{interval_between, Interval};
/// use scale_genius::PitchClass;
///
/// assert_eq!(interval_between(PitchClass::C, PitchClass::G), Interval::PerfectFifth);
/// assert_eq!(interval_between(PitchClass::G, PitchClass::C), Interval::PerfectFourth);
/// assert_eq!(interval_between(PitchClass::E, PitchClass::E), Interval::Octave);
/// ```
pub fn interval_between(from: PitchClass, to: PitchClass) -> Interval {
    let distance = (to.index() - from.index()).rem_euclid(12);
    if distance == 0 {
        Interval::Octave
    } else {
        Interval::ALL[(distance - 1) as usize]
    }
}

/// The note reached by moving from `start` by `interval` in `direction`
pub fn transpose_by_interval(start: PitchClass, interval: Interval, direction: Direction) -> PitchClass {
    start.shifted(direction.sign() * interval.semitones())
}
