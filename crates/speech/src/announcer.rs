//! Rate-limited gesture announcements.
//!
//! The classifier reports a label every frame, so the same gesture arrives
//! dozens of times per second. The announcer only reacts when the reported
//! label changes: a held gesture is spoken once. On a change it speaks when
//! the text differs from the last utterance, or when the repeat interval has
//! passed since it (so A, None, A within the interval stays silent). Any
//! in-flight utterance is cancelled before a new one starts.

use handsign_common::clock::SessionClock;
use handsign_common::config::SpeechConfig;
use handsign_common::error::HandsignResult;
use handsign_landmark_model::gesture::GestureLabel;

use crate::sink::SpeechSink;
use crate::voice::{select_voice, Utterance, UtteranceSettings, Voice};

/// Caller-held announcement state wrapped around a speech sink.
pub struct Announcer<S: SpeechSink> {
    sink: S,
    settings: UtteranceSettings,
    enabled: bool,
    repeat_after_ns: u64,
    voices: Vec<Voice>,
    last_seen: Option<GestureLabel>,
    last_text: Option<&'static str>,
    last_spoken_ns: u64,
}

impl<S: SpeechSink> Announcer<S> {
    pub fn new(sink: S) -> Self {
        Self::from_config(sink, &SpeechConfig::default())
    }

    pub fn from_config(sink: S, config: &SpeechConfig) -> Self {
        let voices = sink.voices();
        Self {
            sink,
            settings: UtteranceSettings::from(config),
            enabled: config.enabled,
            repeat_after_ns: SessionClock::ms_to_ns(config.repeat_after_ms),
            voices,
            last_seen: None,
            last_text: None,
            last_spoken_ns: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enabling re-evaluates the current gesture on the next frame.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.last_seen = None;
        if !enabled {
            self.sink.cancel();
        }
    }

    /// Forget the last announcement so the next gesture is always spoken.
    pub fn reset(&mut self) {
        self.last_seen = None;
        self.last_text = None;
        self.last_spoken_ns = 0;
    }

    pub fn last_spoken(&self) -> Option<&'static str> {
        self.last_text
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Announce `label` if it is due.
    ///
    /// `now_ns` is a monotonic timestamp. Returns the spoken text, or
    /// `None` when nothing was said. [`GestureLabel::None`] is never spoken.
    /// A failed utterance leaves the label unseen so the next frame retries.
    pub fn announce(
        &mut self,
        label: GestureLabel,
        now_ns: u64,
    ) -> HandsignResult<Option<&'static str>> {
        if self.last_seen == Some(label) {
            return Ok(None);
        }
        if !self.enabled || label.is_none() {
            self.last_seen = Some(label);
            return Ok(None);
        }

        let text = label.display_name();
        let changed = self.last_text != Some(text);
        let stale = now_ns.saturating_sub(self.last_spoken_ns) > self.repeat_after_ns;
        if self.last_text.is_some() && !changed && !stale {
            self.last_seen = Some(label);
            return Ok(None);
        }

        // Backends may publish their voices late.
        if self.voices.is_empty() {
            self.voices = self.sink.voices();
        }

        let utterance = Utterance {
            text: text.to_string(),
            settings: self.settings.clone(),
            voice: select_voice(&self.voices, &self.settings.lang).cloned(),
        };

        self.sink.cancel();
        self.sink.speak(&utterance)?;

        tracing::debug!(gesture = label.id(), now_ns, "Announced gesture");
        self.last_seen = Some(label);
        self.last_text = Some(text);
        self.last_spoken_ns = now_ns;
        Ok(Some(text))
    }
}
