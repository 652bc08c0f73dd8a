use crate::error::VoiceError;

/// A speech recognizer that listens for one utterance per `start()`.
///
/// After each utterance the recognizer reports its transcript(s) and then
/// [`SpeechEvent::Ended`], whether or not the text was useful. Errors are
/// reported as [`SpeechEvent::Error`], usually followed by `Ended`.
pub trait SpeechCapability: Send {
    fn start(&mut self) -> Result<(), VoiceError>;

    /// Stop listening without reporting a result.
    fn abort(&mut self);
}

/// Notifications from the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Transcript { text: String, is_final: bool },
    Ended,
    Error(String),
}
