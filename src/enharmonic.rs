//! # Enharmonic Normalizer
//!
//! Maps the many spellings of a note or chord onto one canonical display
//! name, so that `Db`, `C#` and `C#/Db` compare equal.
//!
//! ## Accepted Spellings
//! - Naturals: `C D E F G A B`
//! - Sharps and flats: `C#`, `Db`, ... (Unicode `♯`/`♭` are accepted too)
//! - Theoretical spellings with a natural-letter partner: `E#` = F, `B#` = C,
//!   `Fb` = E, `Cb` = B (these show up in keys like C# major, whose iii is `E#m`)
//! - The canonical dual names themselves: `C#/Db`, `C#m/Dbm`
//! - Minor chords: any of the above followed by `m`
//!
//! ## Entry Points
//! - [`normalize()`] - canonical display name, or the input unchanged if unknown
//! - [`chords_equal()`] - the one way to compare two chord or note names

use crate::pitch::{Chord, PitchClass};

/// Single spelling (no dual name, no quality) to pitch class
fn spelling_to_pitch(spelling: &str) -> Option<PitchClass> {
    let pitch = match spelling {
        "C" | "B#" => PitchClass::C,
        "C#" | "Db" => PitchClass::CSharp,
        "D" => PitchClass::D,
        "D#" | "Eb" => PitchClass::DSharp,
        "E" | "Fb" => PitchClass::E,
        "F" | "E#" => PitchClass::F,
        "F#" | "Gb" => PitchClass::FSharp,
        "G" => PitchClass::G,
        "G#" | "Ab" => PitchClass::GSharp,
        "A" => PitchClass::A,
        "A#" | "Bb" => PitchClass::ASharp,
        "B" | "Cb" => PitchClass::B,
        _ => return None,
    };
    Some(pitch)
}

fn ascii_accidentals(name: &str) -> String {
    name.trim().replace('♯', "#").replace('♭', "b")
}

/// Parse a note spelling, single ("Db") or dual ("C#/Db")
///
/// A dual name is accepted only when both halves denote the same pitch class.
pub fn parse_note(name: &str) -> Option<PitchClass> {
    let name = ascii_accidentals(name);
    let mut pitch = None;
    for part in name.split('/') {
        let p = spelling_to_pitch(part)?;
        if pitch.is_some_and(|existing| existing != p) {
            return None;
        }
        pitch = Some(p);
    }
    pitch
}

/// Parse a chord spelling: a note spelling, optionally minor
///
/// Minor dual names carry the `m` on every half ("C#m/Dbm").
pub fn parse_chord(name: &str) -> Option<Chord> {
    let name = ascii_accidentals(name);
    if let Some(root) = parse_note(&name) {
        return Some(Chord::major(root));
    }

    let mut root = None;
    for part in name.split('/') {
        let p = spelling_to_pitch(part.strip_suffix('m')?)?;
        if root.is_some_and(|existing| existing != p) {
            return None;
        }
        root = Some(p);
    }
    root.map(Chord::minor)
}

/// Canonical display name for a chord or note spelling
///
/// Unknown names pass through unchanged.
///
/// # Examples
/// ```
/// use scale_genius::normalize;
///
/// assert_eq!(normalize("Db"), "C#/Db");
/// assert_eq!(normalize("Gbm"), "F#m/Gbm");
/// assert_eq!(normalize("E#m"), "Fm");
/// assert_eq!(normalize("H"), "H");
/// ```
pub fn normalize(name: &str) -> String {
    match parse_chord(name) {
        Some(chord) => chord.name(),
        None => name.to_string(),
    }
}

/// Enharmonic comparison of two chord or note names
pub fn chords_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
