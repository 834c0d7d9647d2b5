//! Scale Genius CLI - practice scale degrees, borrowed chords, transposition
//! and intervals in the terminal, or look up single answers.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;

use scale_genius::config::{RawSettings, TimerSetting};
use scale_genius::terminal;
use scale_genius::{api, QuizError, QuizSettings};

/// Scale Genius - music theory practice quiz
#[derive(Parser)]
#[command(name = "scale-genius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz in the terminal
    Quiz(QuizArgs),

    /// Chord for a scale degree in a key
    Chord {
        key: String,
        label: String,
        #[arg(short, long)]
        parallel_minor: bool,
    },

    /// Scale degree of a chord in a key
    Degree {
        key: String,
        chord: String,
        #[arg(short, long)]
        parallel_minor: bool,
    },

    /// Move a chord to the same degree of another key
    Transpose { chord: String, from: String, to: String },

    /// Interval from the first note up to the second
    Interval { from: String, to: String },

    /// Note reached from a note by an interval
    Step {
        note: String,
        interval: String,
        /// up or down
        direction: String,
    },

    /// List a closed set of names
    List {
        #[arg(value_enum)]
        what: ListKind,
        #[arg(short, long)]
        parallel_minor: bool,
    },
}

#[derive(Args, Debug)]
struct QuizArgs {
    /// YAML settings file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// number-to-chord, chord-to-number, transposition, intervals, interval-transpose
    #[arg(short, long)]
    mode: Option<String>,

    /// Key name, or "random" for a new key every question
    #[arg(short, long)]
    key: Option<String>,

    /// Target key for transposition, or "random"
    #[arg(short, long)]
    target_key: Option<String>,

    /// Include the six chords borrowed from the parallel minor
    #[arg(short, long, conflicts_with = "no_parallel_minor")]
    parallel_minor: bool,

    /// Leave out the parallel minor even if the settings file includes it
    #[arg(long)]
    no_parallel_minor: bool,

    /// Timed game length in seconds (15, 30, or 60), or "untimed"
    #[arg(long)]
    timer: Option<String>,

    /// Stop after this many questions
    #[arg(short, long)]
    questions: Option<u32>,
}

impl QuizArgs {
    /// The flags that were given, as a settings layer
    fn raw_settings(&self) -> RawSettings {
        let include_parallel_minor = match (self.parallel_minor, self.no_parallel_minor) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        RawSettings {
            mode: self.mode.clone(),
            key: self.key.clone(),
            target_key: self.target_key.clone(),
            include_parallel_minor,
            timer: self.timer.as_deref().map(TimerSetting::from_arg),
            questions: self.questions,
        }
    }

    fn settings(&self) -> Result<QuizSettings, QuizError> {
        let base = match &self.config {
            Some(path) => QuizSettings::load(path)?,
            None => QuizSettings::default(),
        };
        base.merge(self.raw_settings())
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Keys,
    Labels,
    Chords,
    Notes,
    Intervals,
}

fn found(value: Option<String>, what: &'static str, input: String) -> Result<(), QuizError> {
    let value = value.ok_or_else(|| QuizError::not_found(what, input))?;
    println!("{}", value);
    Ok(())
}

fn run(command: Commands) -> Result<(), QuizError> {
    match command {
        Commands::Quiz(args) => {
            let settings = args.settings()?;
            debug!("quiz settings: {:?}", settings);

            let stdin = io::stdin();
            let record = terminal::play(
                &settings,
                &mut stdin.lock(),
                &mut io::stdout(),
                &mut rand::thread_rng(),
            )?;
            let yaml = serde_yaml::to_string(&record)?;
            println!("---\n{}", yaml);
            Ok(())
        }
        Commands::Chord {
            key,
            label,
            parallel_minor,
        } => found(
            api::chord_for_degree(&key, &label, parallel_minor),
            "degree",
            format!("{} in {}", label, key),
        ),
        Commands::Degree {
            key,
            chord,
            parallel_minor,
        } => found(
            api::degree_for_chord(&key, &chord, parallel_minor),
            "chord",
            format!("{} in {}", chord, key),
        ),
        Commands::Transpose { chord, from, to } => found(
            api::transpose_chord(&chord, &from, &to),
            "chord",
            format!("{} in {}", chord, from),
        ),
        Commands::Interval { from, to } => found(
            api::interval_between(&from, &to),
            "note",
            format!("{} or {}", from, to),
        ),
        Commands::Step {
            note,
            interval,
            direction,
        } => found(
            api::transpose_by_interval(&note, &interval, &direction),
            "step",
            format!("{} {} {}", note, interval, direction),
        ),
        Commands::List {
            what,
            parallel_minor,
        } => {
            let names = match what {
                ListKind::Keys => api::all_keys(),
                ListKind::Labels => api::all_degree_labels(parallel_minor),
                ListKind::Chords => api::all_display_chords(),
                ListKind::Notes => api::all_notes(),
                ListKind::Intervals => api::all_interval_names(),
            };
            println!("{}", names.join("  "));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
