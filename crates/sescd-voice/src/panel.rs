//! Read model for the presentation layer.

use serde::{Deserialize, Serialize};
use sescd_core::{Segment, Variable};
use sescd_instruments::aggregate::AggregateResult;
use sescd_instruments::store::ScoreStore;
use ts_rs::TS;

use crate::capability::SpeechCapability;
use crate::controller::{DialogueController, DialogueState};
use crate::status::VoiceStatus;

/// One segment's row of score buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SegmentRow {
    pub segment: Segment,
    pub name: String,
    /// Selected value per variable, in [`Variable::ALL`] order.
    pub cells: Vec<Option<u8>>,
    pub subtotal: u32,
}

/// What the voice modal shows while a variable is being dictated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prompt {
    pub segment: Segment,
    pub variable: Variable,
    /// e.g. "直腸 - 潰瘍サイズ"
    pub heading: String,
    /// Criteria for scores 0 through 3.
    pub criteria: Vec<String>,
}

impl Prompt {
    pub fn new(segment: Segment, variable: Variable) -> Self {
        Self {
            segment,
            variable,
            heading: format!("{} - {}", segment.display_name(), variable.display_name()),
            criteria: variable.criteria().iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoicePanel {
    pub status: VoiceStatus,
    pub status_label: String,
    pub state: DialogueState,
    pub prompt: Option<Prompt>,
    pub transcript: String,
    pub feedback: Option<String>,
}

/// Everything the UI renders, captured after each event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PanelSnapshot {
    pub revision: u64,
    pub rows: Vec<SegmentRow>,
    pub aggregate: AggregateResult,
    pub mm_ses_cd_display: String,
    pub severity_label: String,
    pub remission_label: String,
    pub voice: VoicePanel,
    /// One-off message for the user, such as an unsupported-device alert.
    pub notice: Option<String>,
}

impl PanelSnapshot {
    pub fn capture<C: SpeechCapability>(
        store: &ScoreStore,
        controller: &DialogueController<C>,
        notice: Option<String>,
    ) -> Self {
        let aggregate = store.aggregate().clone();
        let rows = Segment::ALL
            .iter()
            .map(|&segment| SegmentRow {
                segment,
                name: segment.display_name().to_string(),
                cells: store
                    .matrix()
                    .segment(segment)
                    .cells()
                    .iter()
                    .map(|cell| cell.map(u8::from))
                    .collect(),
                subtotal: aggregate.segment(segment).ses_cd,
            })
            .collect();

        let prompt = controller
            .target()
            .zip(controller.current_variable())
            .map(|(segment, variable)| Prompt::new(segment, variable));

        Self {
            revision: store.revision(),
            rows,
            mm_ses_cd_display: aggregate.mm_ses_cd_display(),
            severity_label: aggregate.severity.label().to_string(),
            remission_label: aggregate.remission.label().to_string(),
            aggregate,
            voice: VoicePanel {
                status: controller.status(),
                status_label: controller.status().label().to_string(),
                state: controller.state(),
                prompt,
                transcript: controller.transcript().to_string(),
                feedback: controller.feedback().map(|f| f.message()),
            },
            notice,
        }
    }
}
