//! sescd-voice
//!
//! Voice dictation of segment scores. A [`controller::DialogueController`]
//! walks one segment through the four variables, turning each recognized
//! utterance into a score via [`parser::parse_score`]. The speech engine
//! itself sits behind [`capability::SpeechCapability`]; the tokio
//! [`driver`] feeds its notifications and the dialogue timers through the
//! controller one event at a time.

pub mod capability;
pub mod controller;
pub mod driver;
pub mod error;
pub mod panel;
pub mod parser;
pub mod status;

pub use capability::{SpeechCapability, SpeechEvent};
pub use controller::{DialogueController, DialogueState, DialogueTiming};
pub use error::VoiceError;
pub use status::VoiceStatus;
