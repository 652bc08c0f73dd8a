use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An ordinal rating in `[0, 3]`.
///
/// Construction is checked, so a `Score` held anywhere in the system is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(3);

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (0..=3).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(CoreError::ScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
