use serde::{Deserialize, Serialize};
use sescd_core::{ScoreMatrix, Segment};
use ts_rs::TS;

use crate::instruments::mm_ses_cd::MmSesCd;
use crate::instruments::ses_cd::SesCd;
use crate::severity::{RemissionStatus, Severity};
use crate::Instrument;

/// Per-segment values of both indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SegmentResult {
    pub segment: Segment,
    pub ses_cd: u32,
    pub mm_ses_cd: f64,
}

/// Everything derived from a [`ScoreMatrix`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateResult {
    pub segments: Vec<SegmentResult>,
    pub ses_cd_total: u32,
    pub mm_ses_cd_total: f64,
    /// Segments whose MM-SES-CD is strictly positive.
    pub affected_segments: u32,
    pub severity: Severity,
    pub severity_bar_percent: f64,
    pub remission: RemissionStatus,
}

impl AggregateResult {
    pub fn segment(&self, segment: Segment) -> &SegmentResult {
        &self.segments[segment.index()]
    }

    /// MM-SES-CD total as displayed, to one decimal place.
    pub fn mm_ses_cd_display(&self) -> String {
        format!("{:.1}", self.mm_ses_cd_total)
    }

    pub fn is_remission(&self) -> bool {
        self.remission.is_remission()
    }
}

impl Default for AggregateResult {
    fn default() -> Self {
        aggregate(&ScoreMatrix::default())
    }
}

/// Derive both indices, severity and remission from the matrix. Unset cells
/// count as 0.
pub fn aggregate(matrix: &ScoreMatrix) -> AggregateResult {
    let segments: Vec<SegmentResult> = Segment::ALL
        .iter()
        .map(|&segment| {
            let scores = matrix.segment(segment);
            SegmentResult {
                segment,
                ses_cd: SesCd::subtotal(scores),
                mm_ses_cd: MmSesCd.segment_value(segment, scores),
            }
        })
        .collect();

    let ses_cd_total: u32 = segments.iter().map(|s| s.ses_cd).sum();
    let mm_ses_cd_total: f64 = segments.iter().map(|s| s.mm_ses_cd).sum();
    let affected_segments = segments.iter().filter(|s| s.mm_ses_cd > 0.0).count() as u32;
    let severity = Severity::classify(ses_cd_total);

    AggregateResult {
        segments,
        ses_cd_total,
        mm_ses_cd_total,
        affected_segments,
        severity,
        severity_bar_percent: severity.bar_percent(ses_cd_total),
        remission: RemissionStatus::classify(mm_ses_cd_total),
    }
}
