use sescd_core::{Segment, SegmentScores};

use crate::Instrument;

/// SES-CD: Simple Endoscopic Score for Crohn's Disease.
/// 4 variables rated 0–3 in each of 5 segments, unweighted. Total 0–60.
pub struct SesCd;

impl SesCd {
    /// Integer subtotal of one segment.
    pub fn subtotal(scores: &SegmentScores) -> u32 {
        scores.sum()
    }
}

impl Instrument for SesCd {
    fn id(&self) -> &str {
        "ses_cd"
    }

    fn name(&self) -> &str {
        "SES-CD"
    }

    fn segment_value(&self, _segment: Segment, scores: &SegmentScores) -> f64 {
        f64::from(Self::subtotal(scores))
    }

    fn format_value(&self, value: f64) -> String {
        format!("{value:.0}")
    }
}
