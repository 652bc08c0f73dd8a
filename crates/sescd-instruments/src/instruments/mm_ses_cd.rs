use sescd_core::{Segment, SegmentScores, Variable};

use crate::multiplier::Multipliers;
use crate::Instrument;

/// MM-SES-CD: Modified Multiplier SES-CD.
///
/// Each variable is weighted by a segment-specific multiplier, and an
/// ulceration bonus `E` is added whenever the segment's ulcer-size rating is
/// nonzero.
pub struct MmSesCd;

impl Instrument for MmSesCd {
    fn id(&self) -> &str {
        "mm_ses_cd"
    }

    fn name(&self) -> &str {
        "MM-SES-CD"
    }

    fn segment_value(&self, segment: Segment, scores: &SegmentScores) -> f64 {
        let m = Multipliers::for_segment(segment);
        let ulcer_size = f64::from(scores.value(Variable::UlcerSize));
        let ulcerated = if ulcer_size > 0.0 { 1.0 } else { 0.0 };

        ulcer_size * m.a
            + f64::from(scores.value(Variable::UlcerSurface)) * m.b
            + f64::from(scores.value(Variable::AffectedSurface)) * m.c
            + f64::from(scores.value(Variable::Stenosis)) * m.d
            + ulcerated * m.e
    }
}
