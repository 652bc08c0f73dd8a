use sescd_core::Segment;
use sescd_desktop::console::{describe_change, render_prompt, ConsoleRecognizer};
use sescd_instruments::store::ScoreStore;
use sescd_voice::driver::{channel, DriverEvent};
use sescd_voice::panel::{PanelSnapshot, Prompt};
use sescd_voice::{DialogueController, DialogueTiming, SpeechCapability, SpeechEvent};

fn speech(event: Option<DriverEvent>) -> SpeechEvent {
    match event {
        Some(DriverEvent::Speech(e)) => e,
        other => panic!("expected speech event, got {other:?}"),
    }
}

#[tokio::test]
async fn each_start_reads_one_line() {
    let (sender, mut events) = channel();
    let mut recognizer = ConsoleRecognizer::spawn("  さん \n2\n".as_bytes(), sender);

    recognizer.start().unwrap();
    assert_eq!(
        speech(events.recv().await),
        SpeechEvent::Transcript {
            text: "  さん ".to_string(),
            is_final: true
        }
    );
    assert_eq!(speech(events.recv().await), SpeechEvent::Ended);

    recognizer.start().unwrap();
    assert!(matches!(
        speech(events.recv().await),
        SpeechEvent::Transcript { ref text, .. } if text == "2"
    ));
    assert_eq!(speech(events.recv().await), SpeechEvent::Ended);

    recognizer.start().unwrap();
    assert!(matches!(speech(events.recv().await), SpeechEvent::Error(_)));
    assert_eq!(speech(events.recv().await), SpeechEvent::Ended);
}

#[test]
fn prompt_lists_criteria_by_score() {
    let text = render_prompt(&Prompt::new(Segment::Rectum, sescd_core::Variable::Stenosis));
    assert!(text.starts_with("直腸 - 狭窄\n"));
    assert!(text.contains("  0: なし\n"));
    assert!(text.contains("  3: 通過不能\n"));
}

#[tokio::test]
async fn change_description_announces_prompt_and_status() {
    let (sender, _events) = channel();
    let recognizer = ConsoleRecognizer::spawn(&b""[..], sender);
    let mut controller = DialogueController::new(recognizer, DialogueTiming::default());
    let store = ScoreStore::new();

    let before = PanelSnapshot::capture(&store, &controller, None);
    controller.begin_for_segment(Segment::Ileum).unwrap();
    let after = PanelSnapshot::capture(&store, &controller, None);

    let lines = describe_change(&before, &after);
    assert!(lines.iter().any(|l| l.starts_with("回腸 - 潰瘍サイズ")));
    assert!(lines.iter().any(|l| l == "[音声認識中...]"));
    assert!(describe_change(&after, &after).is_empty());
}
