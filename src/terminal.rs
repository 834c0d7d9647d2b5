//! # Terminal Quiz
//!
//! Plays one game over line-based input and output: a prompt per question,
//! one answer per line. A game ends on `q`/`quit`, end of input, the
//! question limit, or the countdown running out. An answer typed after the
//! countdown expired does not count.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::config::QuizSettings;
use crate::error::QuizError;
use crate::quiz::{answer_choices, generate_question};
use crate::session::{accuracy_message, generate_session_id, Countdown, SessionRecord, Tally};

pub fn play<I, O, R>(
    settings: &QuizSettings,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<SessionRecord, QuizError>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    play_with_countdown(settings, Countdown::start(settings.timer), input, output, rng)
}

/// Play against a countdown started elsewhere
pub fn play_with_countdown<I, O, R>(
    settings: &QuizSettings,
    countdown: Countdown,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<SessionRecord, QuizError>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let session_id = generate_session_id(rng);
    let mut tally = Tally::default();
    let mut played = None;

    writeln!(output, "{}", settings.mode.instruction(settings.include_parallel_minor))?;
    writeln!(
        output,
        "Choices: {}",
        answer_choices(settings.mode, settings.include_parallel_minor).join("  ")
    )?;

    loop {
        if settings.questions.is_some_and(|limit| tally.total_questions >= limit) {
            break;
        }
        if countdown.is_expired() {
            writeln!(output, "Time's up!")?;
            break;
        }

        let question = generate_question(settings, rng);
        played = question.transposition_keys().or(played);
        if let Some(left) = countdown.remaining() {
            write!(output, "[{}s] ", left.as_secs())?;
        }
        write!(output, "{}\n> ", question.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let response = line.trim();
        if response.eq_ignore_ascii_case("q") || response.eq_ignore_ascii_case("quit") {
            break;
        }
        if countdown.is_expired() {
            writeln!(output, "Time's up! That answer did not count.")?;
            break;
        }

        let correct = question.check(response);
        tally.record(correct);
        if correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect, the answer was {}", question.answer)?;
        }
    }

    let record = SessionRecord::new(session_id, settings, &tally, played);
    writeln!(
        output,
        "Game complete! Score {} of {} questions, accuracy {}%. {}",
        record.score,
        record.total_questions,
        record.accuracy,
        accuracy_message(record.accuracy)
    )?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeySelection, TimerMode};
    use crate::quiz::QuizMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::{self, Cursor, Read};
    use std::thread;
    use std::time::{Duration, Instant};

    /// Input that takes `delay` to deliver its first line
    struct SlowInput {
        inner: Cursor<String>,
        delay: Option<Duration>,
    }

    impl Read for SlowInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for SlowInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if let Some(delay) = self.delay.take() {
                thread::sleep(delay);
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt)
        }
    }

    fn millis_ago(millis: u64) -> Instant {
        Instant::now().checked_sub(Duration::from_millis(millis)).unwrap()
    }

    fn settings(mode: QuizMode, questions: Option<u32>) -> QuizSettings {
        QuizSettings {
            mode,
            key: KeySelection::Random,
            target_key: KeySelection::Random,
            include_parallel_minor: true,
            questions,
            ..QuizSettings::default()
        }
    }

    #[test]
    fn test_correct_answers_score() {
        let s = settings(QuizMode::Transposition, Some(4));

        // Replay the generator to learn the answers the game will expect
        let mut preview = StdRng::seed_from_u64(21);
        generate_session_id(&mut preview);
        let answers: Vec<String> = (0..4)
            .map(|_| generate_question(&s, &mut preview).answer.to_string())
            .collect();

        let mut input = Cursor::new(answers.join("\n"));
        let mut output: Vec<u8> = Vec::new();
        let record = play(&s, &mut input, &mut output, &mut StdRng::seed_from_u64(21)).unwrap();

        assert_eq!(record.score, 4);
        assert_eq!(record.total_questions, 4);
        assert_eq!(record.accuracy, 100.0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Transpose this chord"));
        assert!(text.contains("Outstanding!"));
    }

    #[test]
    fn test_wrong_answers_and_limit() {
        let s = settings(QuizMode::Intervals, Some(3));
        let mut input = Cursor::new("x\nx\nx\nx\nx\n");
        let mut output: Vec<u8> = Vec::new();
        let record = play(&s, &mut input, &mut output, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(record.score, 0);
        assert_eq!(record.total_questions, 3);
        assert!(String::from_utf8(output).unwrap().contains("Incorrect, the answer was"));
    }

    #[test]
    fn test_quit_and_end_of_input() {
        let s = settings(QuizMode::NumberToChord, None);
        let mut output: Vec<u8> = Vec::new();
        let record = play(&s, &mut Cursor::new("quit\n"), &mut output, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(record.total_questions, 0);
        assert_eq!(record.accuracy, 0.0);

        let record = play(&s, &mut Cursor::new(""), &mut output, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(record.total_questions, 0);
        assert_eq!(record.key, "Random");
    }

    #[test]
    fn test_expired_countdown_asks_nothing() {
        let s = QuizSettings {
            timer: TimerMode::Seconds(15),
            ..settings(QuizMode::NumberToChord, None)
        };
        let countdown = Countdown::start_at(s.timer, millis_ago(20_000));
        let mut output: Vec<u8> = Vec::new();
        let record = play_with_countdown(
            &s,
            countdown,
            &mut Cursor::new("I\nii\n"),
            &mut output,
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        assert_eq!(record.total_questions, 0);
        assert_eq!(record.timer_mode, "15");
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Time's up!"));
        assert!(!text.contains("> "));
    }

    #[test]
    fn test_answer_after_expiry_does_not_count() {
        let s = QuizSettings {
            timer: TimerMode::Seconds(15),
            ..settings(QuizMode::Transposition, None)
        };

        let mut preview = StdRng::seed_from_u64(8);
        generate_session_id(&mut preview);
        let question = generate_question(&s, &mut preview);

        // Half a second left when the question is asked, a second to answer
        let countdown = Countdown::start_at(s.timer, millis_ago(14_500));
        let mut input = SlowInput {
            inner: Cursor::new(format!("{}\n", question.answer)),
            delay: Some(Duration::from_secs(1)),
        };
        let mut output: Vec<u8> = Vec::new();
        let record =
            play_with_countdown(&s, countdown, &mut input, &mut output, &mut StdRng::seed_from_u64(8))
                .unwrap();

        assert_eq!(record.total_questions, 0);
        assert_eq!(record.score, 0);
        let (source, target) = question.transposition_keys().unwrap();
        assert_eq!(record.key, format!("{}→{}", source, target));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Time's up! That answer did not count."));
        assert!(!text.contains("Correct!"));
    }

    #[test]
    fn test_record_names_last_transposition() {
        let s = settings(QuizMode::Transposition, Some(2));
        let mut preview = StdRng::seed_from_u64(30);
        generate_session_id(&mut preview);
        generate_question(&s, &mut preview);
        let (source, target) = generate_question(&s, &mut preview).transposition_keys().unwrap();

        let mut output: Vec<u8> = Vec::new();
        let record =
            play(&s, &mut Cursor::new("x\nx\n"), &mut output, &mut StdRng::seed_from_u64(30)).unwrap();
        assert_eq!(record.key, format!("{}→{}", source, target));
    }
}
