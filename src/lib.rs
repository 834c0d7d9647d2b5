pub mod api;
pub mod config;
pub mod degree;
pub mod enharmonic;
pub mod error;
pub mod interval;
pub mod pitch;
pub mod quiz;
pub mod random;
pub mod resolver;
pub mod session;
pub mod stats;
pub mod table;
pub mod terminal;
pub mod transpose;

pub use api::*;
pub use config::{KeySelection, QuizSettings, TimerMode};
pub use degree::{DegreeLabel, DegreeSet};
pub use enharmonic::{chords_equal, normalize};
pub use error::*;
pub use interval::{Direction, Interval};
pub use pitch::{Chord, PitchClass, Quality};
pub use quiz::{generate_question, QuizMode, Question};
pub use random::IntervalQuestion;
pub use session::{SessionRecord, Tally};
pub use table::{key_chords, Key, KeyChords};
