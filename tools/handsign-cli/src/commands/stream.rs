//! Classify a JSONL stream of tracked frames and announce gesture changes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use handsign_common::clock::SessionClock;
use handsign_common::config::SpeechConfig;
use handsign_gesture_core::{ClassifierThresholds, FrameDetector, FrameOutcome, GestureClassifier};
use handsign_landmark_model::frame::FrameDetection;
use handsign_landmark_model::gesture::GestureLabel;
use handsign_speech::{Announcer, CommandSink, SpeechSink, StdoutSink, TracingSink};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::SpeechOutput;

pub async fn run(
    path: Option<PathBuf>,
    json: bool,
    speech: Option<SpeechOutput>,
    speech_config: SpeechConfig,
    thresholds: ClassifierThresholds,
) -> anyhow::Result<()> {
    let reader = open_input(path.as_deref()).await?;
    let mut lines = BufReader::new(reader).lines();

    let detector = FrameDetector::new(GestureClassifier::new(thresholds));
    let sink = build_sink(speech, &speech_config, json)?;
    let mut announcer = Announcer::from_config(sink, &speech_config);
    let session = SessionClock::start();

    tracing::info!(
        started = session.epoch_wall(),
        speech = announcer.is_enabled(),
        repeat_after_ms = speech_config.repeat_after_ms,
        "Streaming frames"
    );
    let mut clock = StreamClock::new(session);

    let mut counts: BTreeMap<GestureLabel, usize> = BTreeMap::new();
    let mut frames = 0usize;
    let mut skipped = 0usize;
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let frame: FrameDetection = match serde_json::from_str(trimmed) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(line = line_no, "Skipping unparseable frame: {e}");
                skipped += 1;
                continue;
            }
        };

        let outcome = detector.detect(&frame);
        frames += 1;
        *counts.entry(outcome.primary.label).or_default() += 1;

        if json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            print_outcome(&outcome);
        }

        let now_ns = clock.now_ns(frame.timestamp_ms);
        if let Err(e) = announcer.announce(outcome.primary.label, now_ns) {
            tracing::warn!("Announcement failed: {e}");
        }
    }

    let elapsed_secs = SessionClock::ns_to_secs(clock.session.elapsed_ns());
    if json {
        tracing::info!(frames, skipped, elapsed_secs, "Stream finished");
    } else {
        print_summary(frames, skipped, elapsed_secs, &counts);
    }
    Ok(())
}

enum TimeBase {
    /// Tracker timestamps; frames without one reuse the last seen value.
    Frame { last_ns: u64 },
    Session,
}

/// Timestamps for the announcer on a single time base per stream.
///
/// The first frame decides: tracker time when it carries `timestamp_ms`,
/// the session clock otherwise.
struct StreamClock {
    session: SessionClock,
    base: Option<TimeBase>,
}

impl StreamClock {
    fn new(session: SessionClock) -> Self {
        Self {
            session,
            base: None,
        }
    }

    fn now_ns(&mut self, timestamp_ms: Option<u64>) -> u64 {
        let base = self.base.get_or_insert_with(|| match timestamp_ms {
            Some(_) => TimeBase::Frame { last_ns: 0 },
            None => TimeBase::Session,
        });
        match base {
            TimeBase::Frame { last_ns } => {
                if let Some(ms) = timestamp_ms {
                    *last_ns = SessionClock::ms_to_ns(ms);
                }
                *last_ns
            }
            TimeBase::Session => self.session.elapsed_ns(),
        }
    }
}

async fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn AsyncRead + Unpin + Send>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = tokio::fs::File::open(p)
                .await
                .with_context(|| format!("Failed to open {}", p.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(tokio::io::stdin())),
    }
}

/// Pick the announcement backend: explicit choice, then the configured
/// command, then a sink that keeps JSON output on stdout clean.
fn build_sink(
    choice: Option<SpeechOutput>,
    config: &SpeechConfig,
    json: bool,
) -> anyhow::Result<Box<dyn SpeechSink>> {
    let choice = choice.unwrap_or(match (&config.command, json) {
        (Some(_), _) => SpeechOutput::Command,
        (None, true) => SpeechOutput::Log,
        (None, false) => SpeechOutput::Stdout,
    });

    let sink: Box<dyn SpeechSink> = match choice {
        SpeechOutput::Stdout => Box::new(StdoutSink),
        SpeechOutput::Log => Box::new(TracingSink),
        SpeechOutput::Command => {
            let command = config
                .command
                .as_deref()
                .context("--speech command requires speech.command in the config file")?;
            Box::new(CommandSink::from_command_line(command)?)
        }
    };
    Ok(sink)
}

fn print_outcome(outcome: &FrameOutcome) {
    let at = outcome
        .timestamp_ms
        .map(|ms| format!("{ms:>8} ms"))
        .unwrap_or_else(|| format!("{:>11}", "-"));
    let label = outcome.primary.label;
    match outcome.hands.len() {
        0 => println!("{at}  (no hands)"),
        1 => println!("{at}  {}", label.display_name()),
        n => println!("{at}  {} ({n} hands)", label.display_name()),
    }
}

fn print_summary(
    frames: usize,
    skipped: usize,
    elapsed_secs: f64,
    counts: &BTreeMap<GestureLabel, usize>,
) {
    println!();
    println!("Frames: {frames} in {elapsed_secs:.2}s");
    if skipped > 0 {
        println!("Skipped lines: {skipped}");
    }
    for (label, count) in counts {
        println!("  {:<12} {count}", label.display_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_requires_configured_command() {
        let config = SpeechConfig::default();
        assert!(build_sink(Some(SpeechOutput::Command), &config, false).is_err());
    }

    #[test]
    fn test_default_sink_selection() {
        let config = SpeechConfig::default();
        assert!(build_sink(None, &config, false).is_ok());
        assert!(build_sink(None, &config, true).is_ok());

        let config = SpeechConfig {
            command: Some(Vec::new()),
            ..Default::default()
        };
        assert!(build_sink(None, &config, false).is_err());
    }

    #[test]
    fn test_frame_timestamps_fix_the_time_base() {
        let mut clock = StreamClock::new(SessionClock::start());
        assert_eq!(clock.now_ns(Some(100)), 100_000_000);
        assert_eq!(clock.now_ns(None), 100_000_000);
        assert_eq!(clock.now_ns(Some(4_200)), 4_200_000_000);
    }

    #[test]
    fn test_untimed_first_frame_ignores_later_timestamps() {
        let mut clock = StreamClock::new(SessionClock::start());
        let first = clock.now_ns(None);
        let later = clock.now_ns(Some(3_600_000));
        assert!(later >= first);
        assert!(later < SessionClock::ms_to_ns(3_600_000));
    }
}
