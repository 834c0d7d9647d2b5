//! # Key/Chord Table
//!
//! Authored chord lists for the twelve major keys: six diatonic chords and
//! six chords borrowed from the parallel minor, each ordered by degree.
//!
//! The table is written out by hand rather than computed from intervals. Its
//! agreement with interval arithmetic (e.g. ♭VII of a key is IV of the key a
//! whole step below) is checked by the tests at the bottom of this file.

use std::fmt;

use crate::degree::{DegreeLabel, DegreeSet};
use crate::pitch::{Chord, PitchClass};

/// A major key, identified by its tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(PitchClass);

/// Chord lists for one key
#[derive(Debug)]
pub struct KeyChords {
    pub tonic: PitchClass,
    pub diatonic: [Chord; 6],
    pub parallel_minor: [Chord; 6],
}

impl KeyChords {
    pub fn list(&self, set: DegreeSet) -> &[Chord; 6] {
        match set {
            DegreeSet::Diatonic => &self.diatonic,
            DegreeSet::ParallelMinor => &self.parallel_minor,
        }
    }

    pub fn chord(&self, label: DegreeLabel) -> Chord {
        self.list(label.set())[label.position()]
    }
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key(PitchClass::C),
        Key(PitchClass::CSharp),
        Key(PitchClass::D),
        Key(PitchClass::DSharp),
        Key(PitchClass::E),
        Key(PitchClass::F),
        Key(PitchClass::FSharp),
        Key(PitchClass::G),
        Key(PitchClass::GSharp),
        Key(PitchClass::A),
        Key(PitchClass::ASharp),
        Key(PitchClass::B),
    ];

    pub fn new(tonic: PitchClass) -> Self {
        Key(tonic)
    }

    pub fn tonic(self) -> PitchClass {
        self.0
    }

    /// Look up a key by any spelling of its tonic ("Db", "C#", "C#/Db")
    pub fn from_name(name: &str) -> Option<Key> {
        PitchClass::from_name(name).map(Key)
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }

    pub fn chords(self) -> &'static KeyChords {
        &KEY_TABLE[self.0.index() as usize]
    }

    /// Chord for a label, ignoring whether its set is enabled
    pub fn chord(self, label: DegreeLabel) -> Chord {
        self.chords().chord(label)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chord lists for a key given by name; `None` outside the twelve keys
pub fn key_chords(name: &str) -> Option<&'static KeyChords> {
    Key::from_name(name).map(Key::chords)
}

const fn maj(root: PitchClass) -> Chord {
    Chord::major(root)
}

const fn min(root: PitchClass) -> Chord {
    Chord::minor(root)
}

use PitchClass::{ASharp, CSharp, DSharp, FSharp, GSharp, A, B, C, D, E, F, G};

// Indexed by tonic, chromatic from C.
//   diatonic:        I   ii  iii  IV  V   vi
//   parallel_minor:  i  ♭III  iv  v  ♭VI ♭VII
static KEY_TABLE: [KeyChords; 12] = [
    KeyChords {
        tonic: C,
        diatonic: [maj(C), min(D), min(E), maj(F), maj(G), min(A)],
        parallel_minor: [min(C), maj(DSharp), min(F), min(G), maj(GSharp), maj(ASharp)],
    },
    KeyChords {
        tonic: CSharp,
        diatonic: [maj(CSharp), min(DSharp), min(F), maj(FSharp), maj(GSharp), min(ASharp)],
        parallel_minor: [min(CSharp), maj(E), min(FSharp), min(GSharp), maj(A), maj(B)],
    },
    KeyChords {
        tonic: D,
        diatonic: [maj(D), min(E), min(FSharp), maj(G), maj(A), min(B)],
        parallel_minor: [min(D), maj(F), min(G), min(A), maj(ASharp), maj(C)],
    },
    KeyChords {
        tonic: DSharp,
        diatonic: [maj(DSharp), min(F), min(G), maj(GSharp), maj(ASharp), min(C)],
        parallel_minor: [min(DSharp), maj(FSharp), min(GSharp), min(ASharp), maj(B), maj(CSharp)],
    },
    KeyChords {
        tonic: E,
        diatonic: [maj(E), min(FSharp), min(GSharp), maj(A), maj(B), min(CSharp)],
        parallel_minor: [min(E), maj(G), min(A), min(B), maj(C), maj(D)],
    },
    KeyChords {
        tonic: F,
        diatonic: [maj(F), min(G), min(A), maj(ASharp), maj(C), min(D)],
        parallel_minor: [min(F), maj(GSharp), min(ASharp), min(C), maj(CSharp), maj(DSharp)],
    },
    KeyChords {
        tonic: FSharp,
        diatonic: [maj(FSharp), min(GSharp), min(ASharp), maj(B), maj(CSharp), min(DSharp)],
        parallel_minor: [min(FSharp), maj(A), min(B), min(CSharp), maj(D), maj(E)],
    },
    KeyChords {
        tonic: G,
        diatonic: [maj(G), min(A), min(B), maj(C), maj(D), min(E)],
        parallel_minor: [min(G), maj(ASharp), min(C), min(D), maj(DSharp), maj(F)],
    },
    KeyChords {
        tonic: GSharp,
        diatonic: [maj(GSharp), min(ASharp), min(C), maj(CSharp), maj(DSharp), min(F)],
        parallel_minor: [min(GSharp), maj(B), min(CSharp), min(DSharp), maj(E), maj(FSharp)],
    },
    KeyChords {
        tonic: A,
        diatonic: [maj(A), min(B), min(CSharp), maj(D), maj(E), min(FSharp)],
        parallel_minor: [min(A), maj(C), min(D), min(E), maj(F), maj(G)],
    },
    KeyChords {
        tonic: ASharp,
        diatonic: [maj(ASharp), min(C), min(D), maj(DSharp), maj(F), min(G)],
        parallel_minor: [min(ASharp), maj(CSharp), min(DSharp), min(F), maj(FSharp), maj(GSharp)],
    },
    KeyChords {
        tonic: B,
        diatonic: [maj(B), min(CSharp), min(DSharp), maj(E), maj(FSharp), min(GSharp)],
        parallel_minor: [min(B), maj(D), min(E), min(FSharp), maj(G), maj(A)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Quality;

    #[test]
    fn test_table_indexed_by_tonic() {
        for key in Key::ALL {
            assert_eq!(key.chords().tonic, key.tonic());
            assert_eq!(key.chords().diatonic[0].root, key.tonic());
            assert_eq!(key.chords().parallel_minor[0].root, key.tonic());
        }
    }

    #[test]
    fn test_c_major_lists() {
        let c = key_chords("C").unwrap();
        let names: Vec<String> = c.diatonic.iter().map(|ch| ch.name()).collect();
        assert_eq!(names, vec!["C", "Dm", "Em", "F", "G", "Am"]);
        let borrowed: Vec<String> = c.parallel_minor.iter().map(|ch| ch.name()).collect();
        assert_eq!(borrowed, vec!["Cm", "D#/Eb", "Fm", "Gm", "G#/Ab", "A#/Bb"]);
    }

    #[test]
    fn test_unknown_key_not_found() {
        assert!(key_chords("H").is_none());
        assert!(key_chords("Cm").is_none());
        assert!(key_chords("").is_none());
    }

    #[test]
    fn test_enharmonic_key_names_share_an_entry() {
        assert_eq!(Key::from_name("Db"), Key::from_name("C#"));
        assert_eq!(Key::from_name("Gb"), Key::from_name("F#/Gb"));
        assert_eq!(Key::from_name("Cb"), Some(Key::new(PitchClass::B)));
    }

    #[test]
    fn test_every_entry_agrees_with_interval_arithmetic() {
        for key in Key::ALL {
            for &label in DegreeLabel::active(true) {
                let chord = key.chord(label);
                assert_eq!(
                    chord.root,
                    key.tonic().shifted(label.semitones_above_tonic()),
                    "root of {} in {}",
                    label,
                    key
                );
                assert_eq!(chord.quality, label.quality(), "quality of {} in {}", label, key);
            }
        }
    }

    #[test]
    fn test_flat_seven_is_four_of_whole_step_below() {
        for key in Key::ALL {
            let below = Key::new(key.tonic().shifted(-2));
            assert_eq!(key.chord(DegreeLabel::FlatSeven), below.chord(DegreeLabel::Four));
        }
    }

    #[test]
    fn test_lists_of_one_key_never_collide() {
        for key in Key::ALL {
            let chords = key.chords();
            for chord in chords.diatonic {
                assert!(!chords.parallel_minor.contains(&chord), "{} in {}", chord, key);
            }
        }
    }

    #[test]
    fn test_quality_fixed_per_degree() {
        let pattern = [
            Quality::Major,
            Quality::Minor,
            Quality::Minor,
            Quality::Major,
            Quality::Major,
            Quality::Minor,
        ];
        for key in Key::ALL {
            let qualities: Vec<Quality> = key.chords().diatonic.iter().map(|c| c.quality).collect();
            assert_eq!(qualities, pattern);
        }
    }
}
