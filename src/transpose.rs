use crate::degree::DegreeLabel;
use crate::pitch::Chord;
use crate::resolver;
use crate::table::Key;

/// Transpose a chord from one key to another, keeping its scale degree
///
/// The chord is located in `source` (diatonic list first, then parallel
/// minor) and the chord at the same position of `target` is returned. V of C
/// (G) becomes V of D (A). Returns `None` when the chord belongs to neither
/// of `source`'s lists.
pub fn transpose_chord(chord: Chord, source: Key, target: Key) -> Option<Chord> {
    let (set, position) = resolver::locate(source, chord, true)?;
    DegreeLabel::at(set, position).map(|label| target.chord(label))
}

/// Semitones to move from one key's tonic up to another's (0-11)
pub fn key_distance(source: Key, target: Key) -> i32 {
    (target.tonic().index() - source.tonic().index()).rem_euclid(12)
}
