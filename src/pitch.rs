//! # Pitch Classes and Chords
//!
//! The twelve pitch classes in chromatic order starting at C, and chords built
//! on them (a root plus a major/minor quality).
//!
//! ## Display Spelling
//! Every pitch class has exactly one canonical display name. Black keys carry
//! both spellings, sharp first:
//!
//! ```text
//! C  C#/Db  D  D#/Eb  E  F  F#/Gb  G  G#/Ab  A  A#/Bb  B
//! ```
//!
//! Minor chords put the `m` on each spelling: `Cm`, `C#m/Dbm`, `A#m/Bbm`.
//!
//! ## Equality
//! `PitchClass` and `Chord` are spelling-free values, so `==` on them is
//! enharmonic equality. Parsing any accepted spelling (see `enharmonic`)
//! lands on the same value: `Db`, `C#` and `C#/Db` all parse to
//! `PitchClass::CSharp`.

use std::fmt;

use crate::enharmonic;

/// One of the twelve pitch classes, in chromatic order from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Pitch class for any semitone offset from C, wrapped into the octave
    pub fn from_index(index: i32) -> PitchClass {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Move up (positive) or down (negative) by semitones
    pub fn shifted(self, semitones: i32) -> PitchClass {
        Self::from_index(self.index() + semitones)
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#/Db",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#/Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#/Gb",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#/Ab",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#/Bb",
            PitchClass::B => "B",
        }
    }

    /// Parse any accepted spelling ("Db", "C#", "C#/Db", "E#", "Cb", ...)
    pub fn from_name(name: &str) -> Option<PitchClass> {
        enharmonic::parse_note(name)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chord quality; only triads the quiz asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
}

/// A major or minor triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: Quality,
}

impl Chord {
    pub const fn major(root: PitchClass) -> Self {
        Chord {
            root,
            quality: Quality::Major,
        }
    }

    pub const fn minor(root: PitchClass) -> Self {
        Chord {
            root,
            quality: Quality::Minor,
        }
    }

    /// Same quality, root moved by semitones
    pub fn shifted(self, semitones: i32) -> Chord {
        Chord {
            root: self.root.shifted(semitones),
            quality: self.quality,
        }
    }

    /// Canonical display name: "G", "C#/Db", "Em", "F#m/Gbm"
    pub fn name(self) -> String {
        match self.quality {
            Quality::Major => self.root.name().to_string(),
            Quality::Minor => self
                .root
                .name()
                .split('/')
                .map(|spelling| format!("{}m", spelling))
                .collect::<Vec<_>>()
                .join("/"),
        }
    }

    /// Parse any accepted chord spelling ("Dbm", "C#m/Dbm", "E#m", "Cb", ...)
    pub fn from_name(name: &str) -> Option<Chord> {
        enharmonic::parse_chord(name)
    }

    /// All 24 chords: twelve majors then twelve minors, chromatic from C
    pub fn all() -> Vec<Chord> {
        PitchClass::ALL
            .iter()
            .map(|&p| Chord::major(p))
            .chain(PitchClass::ALL.iter().map(|&p| Chord::minor(p)))
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
