use sescd_core::Segment;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("speech recognition is not supported on this device")]
    Unsupported,

    #[error("a voice session for {0} is already in progress")]
    Busy(Segment),

    #[error("failed to start speech recognition: {0}")]
    StartFailed(String),
}
