//! Handsign Speech
//!
//! Announces recognized gestures aloud:
//! - **Announcer:** Caller-held state that suppresses repeated announcements
//! - **Voices:** Utterance settings and language-based voice selection
//! - **Sinks:** Where utterances go (log, stdout, or an external TTS command)
//!
//! Speech is a presentation concern. Nothing here feeds back into classification.

pub mod announcer;
pub mod sink;
pub mod voice;

pub use announcer::Announcer;
pub use sink::{CommandSink, SpeechSink, StdoutSink, TracingSink};
pub use voice::{select_voice, Utterance, UtteranceSettings, Voice};
