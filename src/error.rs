//! # Error Types
//!
//! The theory engine itself never fails loudly: every lookup that can miss
//! returns `Option`, because "no such mapping" is an ordinary outcome (a
//! player picks an answer that does not resolve in the current key).
//!
//! `QuizError` is for the layers around the engine, where a miss has to stop
//! something: loading a settings file, resolving command-line arguments, or
//! reading answers from the terminal.
//!
//! ## Error Types
//! - `NotFound` - a key, chord, label, note, or interval name outside its closed set
//! - `Config` - settings that parse but are not valid (unsupported timer, unknown mode or key)
//! - `Yaml` - a settings file that is not valid YAML, or a record that fails to serialize
//! - `Io` - reading a settings file or terminal input failed
//!
//! ## Usage
//! ```rust
//! use scale_genius::{QuizError, Key};
//!
//! let key = Key::from_name("H").ok_or_else(|| QuizError::not_found("key", "H"));
//! assert!(matches!(key, Err(QuizError::NotFound { .. })));
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// A name fell outside its closed set, or a lookup had no answer.
    ///
    /// # Example
    /// ```
    /// # use scale_genius::QuizError;
    /// let err = QuizError::not_found("chord", "Xm");
    /// assert_eq!(err.to_string(), "Unknown chord: Xm");
    /// ```
    #[error("Unknown {what}: {value}")]
    NotFound { what: &'static str, value: String },

    /// Invalid quiz settings.
    ///
    /// # Example
    /// ```
    /// # use scale_genius::QuizError;
    /// let err = QuizError::Config("timer must be one of 15, 30, 60 seconds".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: timer must be one of 15, 30, 60 seconds");
    /// ```
    #[error("Invalid settings: {0}")]
    Config(String),

    /// YAML that could not be read or written.
    ///
    /// # Example
    /// ```
    /// # use scale_genius::QuizSettings;
    /// let err = QuizSettings::from_yaml("mode: [").unwrap_err();
    /// assert!(err.to_string().starts_with("YAML error: "));
    /// ```
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    pub fn not_found(what: &'static str, value: impl Into<String>) -> Self {
        QuizError::NotFound {
            what,
            value: value.into(),
        }
    }
}
