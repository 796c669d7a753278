//! Speech output backends.

use std::process::{Child, Command, Stdio};

use handsign_common::error::{HandsignError, HandsignResult};

use crate::voice::{Utterance, Voice};

/// Somewhere utterances can be sent.
///
/// Callers cancel before every `speak`, so a sink only ever has one
/// utterance in flight.
pub trait SpeechSink {
    /// Voices the backend offers. May be empty until the backend is ready.
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    /// Stop whatever is currently being spoken. A no-op when idle.
    fn cancel(&mut self);

    fn speak(&mut self, utterance: &Utterance) -> HandsignResult<()>;
}

impl<S: SpeechSink + ?Sized> SpeechSink for Box<S> {
    fn voices(&self) -> Vec<Voice> {
        (**self).voices()
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }

    fn speak(&mut self, utterance: &Utterance) -> HandsignResult<()> {
        (**self).speak(utterance)
    }
}

/// Logs utterances through `tracing` instead of producing sound.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SpeechSink for TracingSink {
    fn cancel(&mut self) {}

    fn speak(&mut self, utterance: &Utterance) -> HandsignResult<()> {
        tracing::info!(
            text = %utterance.text,
            rate = utterance.settings.rate,
            lang = %utterance.settings.lang,
            voice = ?utterance.voice.as_ref().map(|v| v.name.as_str()),
            "Speaking"
        );
        Ok(())
    }
}

/// Prints utterances to stdout, one per line.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl SpeechSink for StdoutSink {
    fn cancel(&mut self) {}

    fn speak(&mut self, utterance: &Utterance) -> HandsignResult<()> {
        println!("[speech] {}", utterance.text);
        Ok(())
    }
}

/// Runs an external text-to-speech program per utterance.
///
/// The utterance text is appended as the final argument, e.g.
/// `["espeak", "-v", "en-us"]` runs `espeak -v en-us "Thumbs Up"`.
/// Cancelling kills the previous process if it is still speaking.
#[derive(Debug)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandSink {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: None,
        }
    }

    /// Build from a full command line: program followed by its arguments.
    pub fn from_command_line(command: &[String]) -> HandsignResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| HandsignError::config("speech command must not be empty"))?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Whether a previously started utterance is still running.
    pub fn is_speaking(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

impl SpeechSink for CommandSink {
    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                tracing::debug!(pid = child.id(), "Cancelling in-flight utterance");
                if let Err(e) = child.kill() {
                    tracing::warn!("Failed to stop speech process: {e}");
                }
            }
            // Reap so the process does not linger as a zombie.
            let _ = child.wait();
        }
    }

    fn speak(&mut self, utterance: &Utterance) -> HandsignResult<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| HandsignError::speech(format!("Failed to start {}: {e}", self.program)))?;

        tracing::debug!(pid = child.id(), text = %utterance.text, "Speech process started");
        self.child = Some(child);
        Ok(())
    }
}

impl Drop for CommandSink {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::UtteranceSettings;

    fn utterance(text: &str) -> Utterance {
        Utterance {
            text: text.to_string(),
            settings: UtteranceSettings::default(),
            voice: None,
        }
    }

    #[test]
    fn test_from_empty_command_line() {
        let err = CommandSink::from_command_line(&[]).unwrap_err();
        assert!(matches!(err, HandsignError::Config { .. }));
    }

    #[test]
    fn test_missing_program_is_speech_error() {
        let mut sink = CommandSink::new("handsign-no-such-tts-program", Vec::new());
        let err = sink.speak(&utterance("Victory")).unwrap_err();
        assert!(matches!(err, HandsignError::Speech { .. }));
        assert!(!sink.is_speaking());
    }

    #[cfg(unix)]
    #[test]
    fn test_cancel_stops_running_process() {
        // sh -c ignores the appended utterance text.
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "sleep 30".to_string(),
        ];
        let mut sink = CommandSink::from_command_line(&command).unwrap();
        sink.speak(&utterance("Open Hand")).unwrap();
        assert!(sink.is_speaking());

        sink.cancel();
        assert!(!sink.is_speaking());
    }

    #[test]
    fn test_log_and_stdout_sinks_accept_utterances() {
        assert!(TracingSink.speak(&utterance("Pointing")).is_ok());
        assert!(StdoutSink.speak(&utterance("Pointing")).is_ok());
        assert!(TracingSink.voices().is_empty());
    }

    #[test]
    fn test_boxed_sink_delegates() {
        let mut sink: Box<dyn SpeechSink> = Box::new(TracingSink);
        sink.cancel();
        assert!(sink.speak(&utterance("Victory")).is_ok());
    }
}
