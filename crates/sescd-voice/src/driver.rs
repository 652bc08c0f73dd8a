//! Single-task event loop that serializes recognizer notifications, timers
//! and UI commands through the dialogue controller.

use sescd_core::{Score, Segment, Variable};
use sescd_instruments::store::ScoreStore;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::capability::{SpeechCapability, SpeechEvent};
use crate::controller::{DialogueController, Timer};
use crate::panel::PanelSnapshot;

#[derive(Debug)]
pub enum DriverEvent {
    Speech(SpeechEvent),
    Timer(Timer),
    Begin(Segment),
    Abort,
    SetScore {
        segment: Segment,
        variable: Variable,
        score: Score,
    },
    ClearScore {
        segment: Segment,
        variable: Variable,
    },
    /// Score-button click: selects `score`, or clears it if already selected.
    Toggle {
        segment: Segment,
        variable: Variable,
        score: Score,
    },
    ResetAll,
    Shutdown,
}

/// Cloneable handle for posting events to a running [`Driver`].
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<DriverEvent>);

impl EventSender {
    /// Returns `false` once the driver has shut down.
    pub fn send(&self, event: DriverEvent) -> bool {
        self.0.send(event).is_ok()
    }

    pub fn speech(&self, event: SpeechEvent) -> bool {
        self.send(DriverEvent::Speech(event))
    }
}

pub type EventReceiver = mpsc::UnboundedReceiver<DriverEvent>;

/// Create the event channel. The sender is usually cloned into the speech
/// capability before the driver is built.
pub fn channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender(tx), rx)
}

/// Owns the store and controller and applies events in arrival order.
///
/// Timers hold only a weak handle to the event channel, so the loop ends on
/// [`DriverEvent::Shutdown`] or once every [`EventSender`] is dropped. A
/// capability that keeps its own sender keeps the loop alive until
/// `Shutdown`.
pub struct Driver<C> {
    store: ScoreStore,
    controller: DialogueController<C>,
    timers: mpsc::WeakUnboundedSender<DriverEvent>,
    events: EventReceiver,
    snapshots: watch::Sender<PanelSnapshot>,
    notice: Option<String>,
}

impl<C: SpeechCapability + 'static> Driver<C> {
    pub fn new(
        store: ScoreStore,
        controller: DialogueController<C>,
        sender: EventSender,
        events: EventReceiver,
    ) -> (Self, watch::Receiver<PanelSnapshot>) {
        let (snapshots, rx) = watch::channel(PanelSnapshot::capture(&store, &controller, None));
        let driver = Self {
            store,
            controller,
            timers: sender.0.downgrade(),
            events,
            snapshots,
            notice: None,
        };
        (driver, rx)
    }

    /// Process events until [`DriverEvent::Shutdown`] or until the channel
    /// closes, publishing a snapshot after each one. Returns the store so the
    /// caller can report on it.
    pub async fn run(mut self) -> ScoreStore {
        info!("voice driver started");
        while let Some(event) = self.events.recv().await {
            if matches!(event, DriverEvent::Shutdown) {
                break;
            }
            self.handle(event);
            self.publish();
        }
        self.controller.abort();
        info!(revision = self.store.revision(), "voice driver stopped");
        self.store
    }

    fn handle(&mut self, event: DriverEvent) {
        debug!(?event, "driver event");
        match event {
            DriverEvent::Speech(SpeechEvent::Transcript { text, is_final }) => {
                if let Some(timer) = self.controller.on_transcript(&text, is_final, &mut self.store) {
                    self.spawn_timer(timer);
                }
            }
            DriverEvent::Speech(SpeechEvent::Ended) => {
                if let Some(timer) = self.controller.on_ended() {
                    self.spawn_timer(timer);
                }
            }
            DriverEvent::Speech(SpeechEvent::Error(message)) => {
                let timer = self.controller.on_error(&message);
                self.spawn_timer(timer);
            }
            DriverEvent::Timer(timer) => self.controller.on_timer(timer),
            DriverEvent::Begin(segment) => {
                self.notice = None;
                if let Err(e) = self.controller.begin_for_segment(segment) {
                    warn!(%segment, error = %e, "voice input not started");
                    self.notice = Some(e.to_string());
                }
            }
            DriverEvent::Abort => {
                self.notice = None;
                self.controller.abort();
            }
            DriverEvent::SetScore {
                segment,
                variable,
                score,
            } => self.store.set_score(segment, variable, score),
            DriverEvent::ClearScore { segment, variable } => {
                self.store.clear_score(segment, variable)
            }
            DriverEvent::Toggle {
                segment,
                variable,
                score,
            } => self.store.toggle(segment, variable, score),
            DriverEvent::ResetAll => self.store.reset_all(),
            DriverEvent::Shutdown => {}
        }
    }

    fn spawn_timer(&self, timer: Timer) {
        let timers = self.timers.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timer.after).await;
            if let Some(sender) = timers.upgrade() {
                let _ = sender.send(DriverEvent::Timer(timer));
            }
        });
    }

    fn publish(&self) {
        self.snapshots.send_replace(PanelSnapshot::capture(
            &self.store,
            &self.controller,
            self.notice.clone(),
        ));
    }
}
