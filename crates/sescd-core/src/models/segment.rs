use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the five bowel segments scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Segment {
    Ileum,
    RightColon,
    Transverse,
    LeftColon,
    Rectum,
}

impl Segment {
    /// All segments, proximal to distal.
    pub const ALL: [Segment; 5] = [
        Segment::Ileum,
        Segment::RightColon,
        Segment::Transverse,
        Segment::LeftColon,
        Segment::Rectum,
    ];

    /// Stable key used in score files and UI data attributes.
    pub fn key(self) -> &'static str {
        match self {
            Segment::Ileum => "ileum",
            Segment::RightColon => "right-colon",
            Segment::Transverse => "transverse",
            Segment::LeftColon => "left-colon",
            Segment::Rectum => "rectum",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Segment::Ileum => "回腸",
            Segment::RightColon => "右結腸",
            Segment::Transverse => "横行結腸",
            Segment::LeftColon => "左結腸",
            Segment::Rectum => "直腸",
        }
    }

    /// Position in [`Segment::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Segment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|segment| segment.key() == s)
            .ok_or_else(|| CoreError::UnknownSegment(s.to_string()))
    }
}
