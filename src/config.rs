//! # Quiz Settings
//!
//! Settings come from an optional YAML file, then command-line flags on top.
//! Both are read into `RawSettings` (every field optional) and merged over
//! the defaults, validating as they go.
//!
//! ```yaml
//! mode: transposition
//! key: C
//! target-key: random
//! include-parallel-minor: true
//! timer: 30
//! ```
//!
//! ## Defaults
//! - mode: `number-to-chord`
//! - key: `C`, target-key: `D`
//! - include-parallel-minor: `false`
//! - timer: `untimed` (a timed game runs 15, 30, or 60 seconds)
//! - questions: unlimited

use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::error::QuizError;
use crate::pitch::PitchClass;
use crate::quiz::QuizMode;
use crate::random::random_key_with;
use crate::table::Key;

/// Timed game lengths, in seconds
pub const TIMER_CHOICES: [u64; 3] = [15, 30, 60];

/// Settings as written, before validation
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawSettings {
    pub mode: Option<String>,
    pub key: Option<String>,
    pub target_key: Option<String>,
    pub include_parallel_minor: Option<bool>,
    pub timer: Option<TimerSetting>,
    pub questions: Option<u32>,
}

/// A timer as written: a number of seconds, or `untimed`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TimerSetting {
    Seconds(u64),
    Named(String),
}

impl TimerSetting {
    /// Read a command-line value, `30` or `untimed`
    pub fn from_arg(arg: &str) -> TimerSetting {
        match arg.trim().parse() {
            Ok(seconds) => TimerSetting::Seconds(seconds),
            Err(_) => TimerSetting::Named(arg.trim().to_string()),
        }
    }

    fn validate(&self) -> Result<TimerMode, QuizError> {
        match self {
            TimerSetting::Seconds(seconds) if TIMER_CHOICES.contains(seconds) => {
                Ok(TimerMode::Seconds(*seconds))
            }
            TimerSetting::Seconds(seconds) => Err(QuizError::Config(format!(
                "timer must be one of 15, 30, 60 seconds (got {})",
                seconds
            ))),
            TimerSetting::Named(name) if name.eq_ignore_ascii_case("untimed") => {
                Ok(TimerMode::Untimed)
            }
            TimerSetting::Named(name) => Err(QuizError::Config(format!(
                "timer must be untimed or one of 15, 30, 60 seconds (got {})",
                name
            ))),
        }
    }
}

/// A fixed key, or a fresh random key for every question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySelection {
    Fixed(Key),
    Random,
}

impl KeySelection {
    pub fn from_name(name: &str) -> Option<KeySelection> {
        if name.trim().eq_ignore_ascii_case("random") {
            return Some(KeySelection::Random);
        }
        Key::from_name(name).map(KeySelection::Fixed)
    }

    pub fn pick<R: Rng>(self, rng: &mut R) -> Key {
        match self {
            KeySelection::Fixed(key) => key,
            KeySelection::Random => random_key_with(rng),
        }
    }
}

impl fmt::Display for KeySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelection::Fixed(key) => write!(f, "{}", key),
            KeySelection::Random => f.write_str("Random"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Untimed,
    Seconds(u64),
}

impl TimerMode {
    /// "untimed" or the number of seconds
    pub fn name(self) -> String {
        match self {
            TimerMode::Untimed => "untimed".to_string(),
            TimerMode::Seconds(seconds) => seconds.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub mode: QuizMode,
    pub key: KeySelection,
    pub target_key: KeySelection,
    pub include_parallel_minor: bool,
    pub timer: TimerMode,
    /// Stop after this many questions
    pub questions: Option<u32>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            mode: QuizMode::NumberToChord,
            key: KeySelection::Fixed(Key::new(PitchClass::C)),
            target_key: KeySelection::Fixed(Key::new(PitchClass::D)),
            include_parallel_minor: false,
            timer: TimerMode::Untimed,
            questions: None,
        }
    }
}

impl QuizSettings {
    /// Parse YAML settings over the defaults
    pub fn from_yaml(content: &str) -> Result<Self, QuizError> {
        let raw: RawSettings = serde_yaml::from_str(content)?;
        Self::default().merge(raw)
    }

    /// Read and parse a YAML settings file
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply the values present in `raw` on top of these settings
    pub fn merge(mut self, raw: RawSettings) -> Result<Self, QuizError> {
        if let Some(mode) = &raw.mode {
            self.mode = QuizMode::from_name(mode)
                .ok_or_else(|| QuizError::Config(format!("Unknown quiz mode: {}", mode)))?;
        }
        if let Some(key) = &raw.key {
            self.key = KeySelection::from_name(key)
                .ok_or_else(|| QuizError::Config(format!("Unknown key: {}", key)))?;
        }
        if let Some(key) = &raw.target_key {
            self.target_key = KeySelection::from_name(key)
                .ok_or_else(|| QuizError::Config(format!("Unknown target key: {}", key)))?;
        }
        if let Some(include) = raw.include_parallel_minor {
            self.include_parallel_minor = include;
        }
        if let Some(timer) = &raw.timer {
            self.timer = timer.validate()?;
        }
        if let Some(questions) = raw.questions {
            if questions == 0 {
                return Err(QuizError::Config("questions must be at least 1".to_string()));
            }
            self.questions = Some(questions);
        }
        Ok(self)
    }

    /// Key column of a session record: "C", "Random", or "C→D".
    ///
    /// In transposition the pair last played is recorded when there was one,
    /// so a random source or target shows up as the key it resolved to.
    pub fn key_label(&self, played: Option<(Key, Key)>) -> String {
        match (self.mode, played) {
            (QuizMode::Transposition, Some((source, target))) => format!("{}→{}", source, target),
            (QuizMode::Transposition, None) => format!("{}→{}", self.key, self.target_key),
            _ => self.key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let settings = QuizSettings::from_yaml("{}").unwrap();
        assert_eq!(settings, QuizSettings::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
mode: transposition
key: Bb
target-key: random
include-parallel-minor: true
timer: 30
questions: 20
"#;
        let settings = QuizSettings::from_yaml(yaml).unwrap();
        assert_eq!(
            settings,
            QuizSettings {
                mode: QuizMode::Transposition,
                key: KeySelection::Fixed(Key::new(PitchClass::ASharp)),
                target_key: KeySelection::Random,
                include_parallel_minor: true,
                timer: TimerMode::Seconds(30),
                questions: Some(20),
            }
        );
        assert_eq!(settings.key_label(None), "A#/Bb→Random");
        assert_eq!(
            settings.key_label(Some((Key::new(PitchClass::ASharp), Key::new(PitchClass::E)))),
            "A#/Bb→E"
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = QuizSettings::from_yaml("timer: 45").unwrap_err();
        assert!(err.to_string().contains("timer must be one of"));

        let err = QuizSettings::from_yaml("timer: forever").unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));

        let err = QuizSettings::from_yaml("key: H").unwrap_err();
        assert_eq!(err.to_string(), "Invalid settings: Unknown key: H");

        let err = QuizSettings::from_yaml("mode: speed-round").unwrap_err();
        assert_eq!(err.to_string(), "Invalid settings: Unknown quiz mode: speed-round");

        assert!(QuizSettings::from_yaml("questions: 0").is_err());
        assert!(matches!(
            QuizSettings::from_yaml("include-parallel-minor: maybe"),
            Err(QuizError::Yaml(_))
        ));
        assert!(matches!(QuizSettings::from_yaml("mode: ["), Err(QuizError::Yaml(_))));
    }

    #[test]
    fn test_untimed_timer() {
        let settings = QuizSettings::from_yaml("timer: untimed").unwrap();
        assert_eq!(settings.timer, TimerMode::Untimed);

        // A later layer can switch a timed file back off
        let timed = QuizSettings::from_yaml("timer: 60").unwrap();
        let merged = timed
            .merge(RawSettings {
                timer: Some(TimerSetting::from_arg("untimed")),
                ..RawSettings::default()
            })
            .unwrap();
        assert_eq!(merged.timer, TimerMode::Untimed);

        // What a record writes, settings read back
        let written = format!("timer: {}", TimerMode::Untimed.name());
        assert_eq!(QuizSettings::from_yaml(&written).unwrap().timer, TimerMode::Untimed);
    }

    #[test]
    fn test_timer_from_arg() {
        assert_eq!(TimerSetting::from_arg("30"), TimerSetting::Seconds(30));
        assert_eq!(TimerSetting::from_arg(" untimed "), TimerSetting::Named("untimed".to_string()));
        assert!(TimerSetting::from_arg("45").validate().is_err());
    }

    #[test]
    fn test_merge_overrides_only_present_fields() {
        let base = QuizSettings::from_yaml("key: E\ntimer: 15").unwrap();
        let merged = base
            .merge(RawSettings {
                mode: Some("chord-to-number".to_string()),
                ..RawSettings::default()
            })
            .unwrap();
        assert_eq!(merged.mode, QuizMode::ChordToNumber);
        assert_eq!(merged.key, KeySelection::Fixed(Key::new(PitchClass::E)));
        assert_eq!(merged.timer, TimerMode::Seconds(15));
    }

    #[test]
    fn test_key_selection() {
        assert_eq!(KeySelection::from_name("RANDOM"), Some(KeySelection::Random));
        assert_eq!(
            KeySelection::from_name("Gb"),
            Some(KeySelection::Fixed(Key::new(PitchClass::FSharp)))
        );
        assert_eq!(KeySelection::from_name("Q"), None);
        assert_eq!(KeySelection::Random.to_string(), "Random");
        assert_eq!(TimerMode::Seconds(60).name(), "60");
        assert_eq!(TimerMode::Untimed.name(), "untimed");
    }
}
