use serde::{Deserialize, Serialize};

use crate::models::score::Score;
use crate::models::segment::Segment;
use crate::models::variable::Variable;

/// The four variable ratings of one segment. `None` means not yet rated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentScores([Option<Score>; 4]);

impl SegmentScores {
    pub fn get(&self, variable: Variable) -> Option<Score> {
        self.0[variable.index()]
    }

    /// Rating for arithmetic: unset counts as 0.
    pub fn value(&self, variable: Variable) -> u8 {
        self.get(variable).map_or(0, Score::value)
    }

    pub fn sum(&self) -> u32 {
        Variable::ALL.iter().map(|&v| u32::from(self.value(v))).sum()
    }

    pub fn cells(&self) -> [Option<Score>; 4] {
        self.0
    }
}

/// Segment × variable grid of optional ratings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMatrix([SegmentScores; 5]);

impl ScoreMatrix {
    pub fn get(&self, segment: Segment, variable: Variable) -> Option<Score> {
        self.0[segment.index()].get(variable)
    }

    pub fn set(&mut self, segment: Segment, variable: Variable, value: Option<Score>) {
        self.0[segment.index()].0[variable.index()] = value;
    }

    pub fn segment(&self, segment: Segment) -> &SegmentScores {
        &self.0[segment.index()]
    }

    pub fn clear(&mut self) {
        *self = ScoreMatrix::default();
    }

    /// Number of cells holding a rating (including explicit zeros).
    pub fn rated_cells(&self) -> usize {
        self.0
            .iter()
            .flat_map(|row| row.0.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}
