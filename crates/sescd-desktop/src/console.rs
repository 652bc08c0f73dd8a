//! Console stand-in for a speech recognizer: each typed line is treated as
//! one final utterance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sescd_voice::driver::EventSender;
use sescd_voice::panel::{PanelSnapshot, Prompt};
use sescd_voice::{DialogueState, SpeechCapability, SpeechEvent, VoiceError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

pub struct ConsoleRecognizer {
    requests: mpsc::UnboundedSender<u64>,
    generation: Arc<AtomicU64>,
}

impl ConsoleRecognizer {
    /// Spawn the line reader and return the recognizer feeding `events`.
    pub fn spawn<R>(input: R, events: EventSender) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let (requests, rx) = mpsc::unbounded_channel();
        let generation = Arc::new(AtomicU64::new(0));
        tokio::spawn(pump(input, rx, generation.clone(), events));
        Self {
            requests,
            generation,
        }
    }
}

impl SpeechCapability for ConsoleRecognizer {
    fn start(&mut self) -> Result<(), VoiceError> {
        let generation = self.generation.load(Ordering::SeqCst);
        self.requests
            .send(generation)
            .map_err(|_| VoiceError::StartFailed("console input closed".to_string()))
    }

    fn abort(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

async fn pump<R>(
    input: R,
    mut requests: mpsc::UnboundedReceiver<u64>,
    generation: Arc<AtomicU64>,
    events: EventSender,
) where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(requested) = requests.recv().await {
        let line = lines.next_line().await;
        if requested != generation.load(Ordering::SeqCst) {
            continue;
        }
        match line {
            Ok(Some(text)) => {
                events.speech(SpeechEvent::Transcript {
                    text,
                    is_final: true,
                });
            }
            Ok(None) => {
                events.speech(SpeechEvent::Error("end of input".to_string()));
            }
            Err(e) => {
                events.speech(SpeechEvent::Error(e.to_string()));
            }
        }
        events.speech(SpeechEvent::Ended);
    }
}

pub fn render_prompt(prompt: &Prompt) -> String {
    let mut output = format!("{}\n", prompt.heading);
    for (score, criterion) in prompt.criteria.iter().enumerate() {
        output.push_str(&format!("  {score}: {criterion}\n"));
    }
    output
}

/// Lines worth printing when the panel moves from `previous` to `current`.
pub fn describe_change(previous: &PanelSnapshot, current: &PanelSnapshot) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(notice) = &current.notice
        && previous.notice.as_ref() != Some(notice)
    {
        out.push(notice.clone());
    }
    if let Some(feedback) = &current.voice.feedback
        && previous.voice.feedback.as_ref() != Some(feedback)
    {
        out.push(feedback.clone());
    }
    if let Some(prompt) = &current.voice.prompt
        && (previous.voice.prompt.as_ref() != Some(prompt)
            || previous.voice.state != current.voice.state)
        && current.voice.state == DialogueState::AwaitingResult
    {
        out.push(render_prompt(prompt));
    }
    if previous.voice.status != current.voice.status {
        out.push(format!("[{}]", current.voice.status_label));
    }
    out
}
