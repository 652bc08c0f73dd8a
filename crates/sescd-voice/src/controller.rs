use std::time::Duration;

use serde::{Deserialize, Serialize};
use sescd_core::{Score, Segment, Variable};
use sescd_instruments::store::ScoreStore;
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::capability::SpeechCapability;
use crate::error::VoiceError;
use crate::parser::parse_score;
use crate::status::VoiceStatus;

/// Delays between the steps of a dictation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueTiming {
    /// Pause before listening for the next variable.
    pub continue_delay: Duration,
    /// Pause after the last variable before the session closes.
    pub completion_delay: Duration,
    /// How long the error indicator stays up.
    pub error_cooldown: Duration,
}

impl Default for DialogueTiming {
    fn default() -> Self {
        Self {
            continue_delay: Duration::from_millis(500),
            completion_delay: Duration::from_millis(800),
            error_cooldown: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DialogueState {
    /// No session.
    Idle,
    /// The recognizer is listening for the current variable.
    AwaitingResult,
    /// The recognizer ended; waiting to restart for the next variable.
    BetweenVariables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Continue,
    Complete,
    Cooldown,
}

/// A delayed continuation requested by the controller. The host sleeps for
/// `after` and hands the timer back through [`DialogueController::on_timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub after: Duration,
    epoch: u64,
}

/// Result of the last final transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Recorded(Score),
    Unrecognized,
}

impl Feedback {
    pub fn message(self) -> String {
        match self {
            Feedback::Recorded(score) => format!("{score} 点を入力しました"),
            Feedback::Unrecognized => {
                "認識できませんでした。もう一度お試しください。".to_string()
            }
        }
    }
}

/// Dictation state machine for one segment at a time.
///
/// Every timer carries the epoch it was scheduled in. Starting, closing or
/// aborting a session bumps the epoch, so timers from an earlier session
/// are ignored when they fire.
pub struct DialogueController<C> {
    capability: Option<C>,
    timing: DialogueTiming,
    state: DialogueState,
    status: VoiceStatus,
    target: Option<Segment>,
    index: usize,
    transcript: String,
    feedback: Option<Feedback>,
    session_id: Option<Uuid>,
    epoch: u64,
}

impl<C: SpeechCapability> DialogueController<C> {
    pub fn new(capability: C, timing: DialogueTiming) -> Self {
        Self::with_capability(Some(capability), timing)
    }

    /// A controller for a host without speech recognition. Manual scoring
    /// still works; [`Self::begin_for_segment`] always fails.
    pub fn unsupported(timing: DialogueTiming) -> Self {
        Self::with_capability(None, timing)
    }

    fn with_capability(capability: Option<C>, timing: DialogueTiming) -> Self {
        let status = if capability.is_some() {
            VoiceStatus::Ready
        } else {
            VoiceStatus::Unsupported
        };
        Self {
            capability,
            timing,
            state: DialogueState::Idle,
            status,
            target: None,
            index: 0,
            transcript: String::new(),
            feedback: None,
            session_id: None,
            epoch: 0,
        }
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn status(&self) -> VoiceStatus {
        self.status
    }

    pub fn target(&self) -> Option<Segment> {
        self.target
    }

    pub fn variable_index(&self) -> usize {
        self.index
    }

    /// The variable being prompted for, if a session is active.
    pub fn current_variable(&self) -> Option<Variable> {
        self.target?;
        Variable::ALL.get(self.index).copied()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn is_supported(&self) -> bool {
        self.capability.is_some()
    }

    /// Start dictating the four variables of `segment`.
    pub fn begin_for_segment(&mut self, segment: Segment) -> Result<(), VoiceError> {
        if let Some(current) = self.target {
            return Err(VoiceError::Busy(current));
        }
        let Some(capability) = self.capability.as_mut() else {
            warn!(%segment, "voice input requested but speech recognition is unsupported");
            return Err(VoiceError::Unsupported);
        };

        self.epoch += 1;
        self.target = Some(segment);
        self.index = 0;
        self.transcript.clear();
        self.feedback = None;

        let session_id = Uuid::new_v4();
        self.session_id = Some(session_id);

        if let Err(e) = capability.start() {
            warn!(%session_id, %segment, error = %e, "failed to start recognition");
            self.close_out(VoiceStatus::Ready);
            return Err(e);
        }

        self.state = DialogueState::AwaitingResult;
        self.status = VoiceStatus::Listening;
        info!(%session_id, %segment, "voice session started");
        Ok(())
    }

    /// Handle an interim or final transcript. A final transcript that parses
    /// as a score is written to `store`.
    pub fn on_transcript(
        &mut self,
        text: &str,
        is_final: bool,
        store: &mut ScoreStore,
    ) -> Option<Timer> {
        if self.state != DialogueState::AwaitingResult {
            return None;
        }
        let (segment, variable) = (self.target?, self.current_variable()?);

        self.transcript = text.to_string();
        if !is_final {
            return None;
        }

        let Some(score) = parse_score(text) else {
            warn!(session_id = ?self.session_id, %segment, %variable, transcript = text, "utterance not recognized");
            self.feedback = Some(Feedback::Unrecognized);
            return None;
        };

        store.set_score(segment, variable, score);
        self.feedback = Some(Feedback::Recorded(score));
        self.index += 1;
        debug!(session_id = ?self.session_id, %segment, %variable, %score, "dictated score recorded");

        if self.index == Variable::ALL.len() {
            return Some(self.schedule(TimerKind::Complete, self.timing.completion_delay));
        }
        None
    }

    /// The recognizer stopped listening.
    pub fn on_ended(&mut self) -> Option<Timer> {
        if self.state != DialogueState::AwaitingResult {
            return None;
        }
        if self.target.is_some() && self.index < Variable::ALL.len() {
            self.state = DialogueState::BetweenVariables;
            return Some(self.schedule(TimerKind::Continue, self.timing.continue_delay));
        }
        self.close_out(VoiceStatus::Ready);
        None
    }

    /// The recognizer reported an error. The session is abandoned and the
    /// error indicator is shown until the returned cooldown timer fires.
    pub fn on_error(&mut self, message: &str) -> Timer {
        warn!(session_id = ?self.session_id, segment = ?self.target, error = message, "speech recognition error");
        self.close_out(VoiceStatus::Error);
        self.schedule(TimerKind::Cooldown, self.timing.error_cooldown)
    }

    pub fn on_timer(&mut self, timer: Timer) {
        if timer.epoch != self.epoch {
            debug!(kind = ?timer.kind, "stale timer ignored");
            return;
        }
        match timer.kind {
            TimerKind::Continue => self.resume(),
            TimerKind::Complete => {
                if self.target.is_some() {
                    self.close_out(VoiceStatus::Ready);
                }
            }
            TimerKind::Cooldown => {
                if self.status == VoiceStatus::Error {
                    self.status = VoiceStatus::Ready;
                }
            }
        }
    }

    /// Stop listening and drop the session. Pending timers are cancelled.
    pub fn abort(&mut self) {
        if let Some(capability) = self.capability.as_mut() {
            capability.abort();
        }
        if self.target.is_some() {
            info!(session_id = ?self.session_id, segment = ?self.target, "voice session aborted");
        }
        self.close_out(VoiceStatus::Ready);
    }

    fn resume(&mut self) {
        if self.state != DialogueState::BetweenVariables {
            return;
        }
        let Some(capability) = self.capability.as_mut() else {
            return;
        };
        self.transcript.clear();
        self.feedback = None;
        match capability.start() {
            Ok(()) => {
                self.state = DialogueState::AwaitingResult;
                self.status = VoiceStatus::Listening;
            }
            Err(e) => {
                warn!(session_id = ?self.session_id, error = %e, "failed to continue recognition");
                self.close_out(VoiceStatus::Ready);
            }
        }
    }

    fn close_out(&mut self, status: VoiceStatus) {
        if let (Some(session_id), Some(segment)) = (self.session_id, self.target) {
            info!(%session_id, %segment, recorded = self.index, "voice session closed");
        }
        self.epoch += 1;
        self.state = DialogueState::Idle;
        self.status = status;
        self.target = None;
        self.index = 0;
        self.session_id = None;
    }

    fn schedule(&self, kind: TimerKind, after: Duration) -> Timer {
        Timer {
            kind,
            after,
            epoch: self.epoch,
        }
    }
}
