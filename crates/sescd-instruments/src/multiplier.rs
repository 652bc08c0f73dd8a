use serde::Serialize;
use sescd_core::Segment;

/// Segment weights for MM-SES-CD. `a`..`d` weight ulcer size, ulcerated
/// surface, affected surface and stenosis; `e` is the ulceration bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Multipliers {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl Multipliers {
    pub const fn for_segment(segment: Segment) -> Self {
        match segment {
            Segment::Ileum => Self::new(1.0, 3.0, 5.0, 4.0, 4.0),
            Segment::RightColon => Self::new(3.0, 2.0, 1.0, 1.0, 4.0),
            Segment::Transverse => Self::new(1.0, 1.0, 1.0, 1.0, 4.0),
            Segment::LeftColon => Self::new(3.0, 2.0, 1.0, 2.0, 4.0),
            Segment::Rectum => Self::new(3.0, 1.0, 0.5, 2.0, 4.0),
        }
    }

    const fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }
}
