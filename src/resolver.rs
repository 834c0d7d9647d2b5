//! # Scale-Degree Resolver
//!
//! Chord ⇄ roman-numeral lookups within a key.
//!
//! Both directions take `include_parallel_minor`. Diatonic labels and chords
//! are always active; the parallel-minor set joins only when the flag is set,
//! and is always searched after the diatonic set.

use log::debug;

use crate::degree::{DegreeLabel, DegreeSet};
use crate::pitch::Chord;
use crate::table::Key;

/// The chord a label names in a key
///
/// `None` for a parallel-minor label when parallel minor is off.
pub fn chord_for_degree(key: Key, label: DegreeLabel, include_parallel_minor: bool) -> Option<Chord> {
    if !DegreeSet::active(include_parallel_minor).contains(&label.set()) {
        debug!("{} is not active in {} without parallel minor", label, key);
        return None;
    }
    Some(key.chord(label))
}

/// The label of a chord in a key
///
/// `None` when the chord is in neither active list.
pub fn degree_for_chord(key: Key, chord: Chord, include_parallel_minor: bool) -> Option<DegreeLabel> {
    let (set, position) = locate(key, chord, include_parallel_minor)?;
    DegreeLabel::at(set, position)
}

/// Set and position of a chord in a key's active lists, diatonic first
pub(crate) fn locate(key: Key, chord: Chord, include_parallel_minor: bool) -> Option<(DegreeSet, usize)> {
    let found = DegreeSet::active(include_parallel_minor)
        .iter()
        .find_map(|&set| {
            key.chords()
                .list(set)
                .iter()
                .position(|&candidate| candidate == chord)
                .map(|position| (set, position))
        });
    if found.is_none() {
        debug!("{} has no degree in {}", chord, key);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;

    fn key(name: &str) -> Key {
        Key::from_name(name).unwrap()
    }

    fn chord(name: &str) -> Chord {
        Chord::from_name(name).unwrap()
    }

    #[test]
    fn test_five_of_c_is_g() {
        assert_eq!(chord_for_degree(key("C"), DegreeLabel::Five, false), Some(chord("G")));
        assert_eq!(degree_for_chord(key("C"), chord("G"), false), Some(DegreeLabel::Five));
    }

    #[test]
    fn test_flat_seven_of_c() {
        let bb = chord_for_degree(key("C"), DegreeLabel::FlatSeven, true).unwrap();
        assert_eq!(bb.name(), "A#/Bb");
    }

    #[test]
    fn test_parallel_minor_gated_by_flag() {
        assert_eq!(chord_for_degree(key("C"), DegreeLabel::MinorFour, false), None);
        assert_eq!(degree_for_chord(key("C"), chord("Fm"), false), None);
        assert_eq!(degree_for_chord(key("C"), chord("Fm"), true), Some(DegreeLabel::MinorFour));
    }

    #[test]
    fn test_diatonic_labels_always_active() {
        assert_eq!(chord_for_degree(key("A"), DegreeLabel::Three, true), Some(chord("C#m")));
        assert_eq!(chord_for_degree(key("A"), DegreeLabel::Three, false), Some(chord("C#m")));
    }

    #[test]
    fn test_enharmonic_chord_lookup() {
        // C# major spells its iii as E#m
        assert_eq!(degree_for_chord(key("C#"), chord("E#m"), false), Some(DegreeLabel::Three));
        assert_eq!(degree_for_chord(key("Db"), chord("Fm"), false), Some(DegreeLabel::Three));
        // Eb's borrowed ♭VI is Cb
        assert_eq!(degree_for_chord(key("Eb"), chord("Cb"), true), Some(DegreeLabel::FlatSix));
    }

    #[test]
    fn test_chord_outside_key() {
        assert_eq!(degree_for_chord(key("C"), Chord::major(PitchClass::FSharp), true), None);
    }

    #[test]
    fn test_diatonic_wins_over_parallel_minor() {
        // With parallel minor on, every diatonic chord still resolves to its diatonic label
        for k in Key::ALL {
            for &label in DegreeLabel::in_set(DegreeSet::Diatonic) {
                let c = k.chord(label);
                assert_eq!(degree_for_chord(k, c, true), Some(label));
                assert_eq!(locate(k, c, true).map(|(set, _)| set), Some(DegreeSet::Diatonic));
            }
        }
    }

    #[test]
    fn test_round_trip_all_keys() {
        for flag in [false, true] {
            for k in Key::ALL {
                for &label in DegreeLabel::active(flag) {
                    let c = chord_for_degree(k, label, flag).unwrap();
                    assert_eq!(degree_for_chord(k, c, flag), Some(label), "{} in {}", label, k);
                }
            }
        }
    }
}
