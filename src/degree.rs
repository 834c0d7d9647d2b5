//! # Scale-Degree Labels
//!
//! Roman-numeral labels for the chords of a major key, plus the six chords
//! borrowed from the parallel (same tonic) natural minor.
//!
//! ```text
//! Diatonic:        I    ii   iii   IV   V   vi
//! Parallel minor:  i   ♭III  iv    v   ♭VI  ♭VII
//! ```
//!
//! Uppercase numerals are major chords, lowercase minor. The quality at each
//! position is the same in every key.

use std::fmt;

use crate::pitch::Quality;

/// Which of a key's two chord lists a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeSet {
    Diatonic,
    ParallelMinor,
}

impl DegreeSet {
    /// Sets searched for the given mode, diatonic always first
    pub fn active(include_parallel_minor: bool) -> &'static [DegreeSet] {
        if include_parallel_minor {
            &[DegreeSet::Diatonic, DegreeSet::ParallelMinor]
        } else {
            &[DegreeSet::Diatonic]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeLabel {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    MinorOne,
    FlatThree,
    MinorFour,
    MinorFive,
    FlatSix,
    FlatSeven,
}

const DIATONIC: [DegreeLabel; 6] = [
    DegreeLabel::One,
    DegreeLabel::Two,
    DegreeLabel::Three,
    DegreeLabel::Four,
    DegreeLabel::Five,
    DegreeLabel::Six,
];

const PARALLEL_MINOR: [DegreeLabel; 6] = [
    DegreeLabel::MinorOne,
    DegreeLabel::FlatThree,
    DegreeLabel::MinorFour,
    DegreeLabel::MinorFive,
    DegreeLabel::FlatSix,
    DegreeLabel::FlatSeven,
];

const ALL: [DegreeLabel; 12] = [
    DegreeLabel::One,
    DegreeLabel::Two,
    DegreeLabel::Three,
    DegreeLabel::Four,
    DegreeLabel::Five,
    DegreeLabel::Six,
    DegreeLabel::MinorOne,
    DegreeLabel::FlatThree,
    DegreeLabel::MinorFour,
    DegreeLabel::MinorFive,
    DegreeLabel::FlatSix,
    DegreeLabel::FlatSeven,
];

impl DegreeLabel {
    /// Labels of one set, ordered by position
    pub fn in_set(set: DegreeSet) -> &'static [DegreeLabel; 6] {
        match set {
            DegreeSet::Diatonic => &DIATONIC,
            DegreeSet::ParallelMinor => &PARALLEL_MINOR,
        }
    }

    /// Labels a player can be asked about: 6 diatonic, or all 12
    pub fn active(include_parallel_minor: bool) -> &'static [DegreeLabel] {
        if include_parallel_minor {
            &ALL
        } else {
            &DIATONIC
        }
    }

    /// The label at a position (0-5) of a set
    pub fn at(set: DegreeSet, position: usize) -> Option<DegreeLabel> {
        Self::in_set(set).get(position).copied()
    }

    pub fn set(self) -> DegreeSet {
        match self {
            DegreeLabel::One
            | DegreeLabel::Two
            | DegreeLabel::Three
            | DegreeLabel::Four
            | DegreeLabel::Five
            | DegreeLabel::Six => DegreeSet::Diatonic,
            _ => DegreeSet::ParallelMinor,
        }
    }

    /// Position (0-5) within its set
    pub fn position(self) -> usize {
        match self {
            DegreeLabel::One | DegreeLabel::MinorOne => 0,
            DegreeLabel::Two | DegreeLabel::FlatThree => 1,
            DegreeLabel::Three | DegreeLabel::MinorFour => 2,
            DegreeLabel::Four | DegreeLabel::MinorFive => 3,
            DegreeLabel::Five | DegreeLabel::FlatSix => 4,
            DegreeLabel::Six | DegreeLabel::FlatSeven => 5,
        }
    }

    /// Semitones from the tonic to the chord root
    pub fn semitones_above_tonic(self) -> i32 {
        match self {
            DegreeLabel::One | DegreeLabel::MinorOne => 0,
            DegreeLabel::Two => 2,
            DegreeLabel::FlatThree => 3,
            DegreeLabel::Three => 4,
            DegreeLabel::Four | DegreeLabel::MinorFour => 5,
            DegreeLabel::Five | DegreeLabel::MinorFive => 7,
            DegreeLabel::FlatSix => 8,
            DegreeLabel::Six => 9,
            DegreeLabel::FlatSeven => 10,
        }
    }

    /// Chord quality implied by the numeral's case
    pub fn quality(self) -> Quality {
        match self {
            DegreeLabel::One
            | DegreeLabel::Four
            | DegreeLabel::Five
            | DegreeLabel::FlatThree
            | DegreeLabel::FlatSix
            | DegreeLabel::FlatSeven => Quality::Major,
            _ => Quality::Minor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DegreeLabel::One => "I",
            DegreeLabel::Two => "ii",
            DegreeLabel::Three => "iii",
            DegreeLabel::Four => "IV",
            DegreeLabel::Five => "V",
            DegreeLabel::Six => "vi",
            DegreeLabel::MinorOne => "i",
            DegreeLabel::FlatThree => "♭III",
            DegreeLabel::MinorFour => "iv",
            DegreeLabel::MinorFive => "v",
            DegreeLabel::FlatSix => "♭VI",
            DegreeLabel::FlatSeven => "♭VII",
        }
    }

    /// Parse a roman numeral; "bVII" is accepted for "♭VII"
    pub fn from_name(name: &str) -> Option<DegreeLabel> {
        let name = name.trim();
        let name = match name.strip_prefix('b') {
            Some(rest) => format!("♭{}", rest),
            None => name.to_string(),
        };
        ALL.iter().copied().find(|label| label.name() == name)
    }
}

impl fmt::Display for DegreeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
