use sescd_core::{Score, ScoreMatrix, Segment, Variable};
use tracing::debug;

use crate::aggregate::{aggregate, AggregateResult};
use crate::error::InstrumentError;
use crate::scoring::{validate_entries, ScoreEntry};

/// Owns the score matrix and keeps its [`AggregateResult`] current.
///
/// Every mutation recomputes the aggregate before returning, so
/// [`ScoreStore::aggregate`] always reflects [`ScoreStore::matrix`].
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    matrix: ScoreMatrix,
    aggregate: AggregateResult,
    revision: u64,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, segment: Segment, variable: Variable) -> Option<Score> {
        self.matrix.get(segment, variable)
    }

    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    pub fn aggregate(&self) -> &AggregateResult {
        &self.aggregate
    }

    /// Incremented on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_score(&mut self, segment: Segment, variable: Variable, score: Score) {
        self.matrix.set(segment, variable, Some(score));
        debug!(%segment, %variable, %score, "score set");
        self.recompute();
    }

    pub fn clear_score(&mut self, segment: Segment, variable: Variable) {
        self.matrix.set(segment, variable, None);
        debug!(%segment, %variable, "score cleared");
        self.recompute();
    }

    pub fn reset_all(&mut self) {
        self.matrix.clear();
        debug!("all scores reset");
        self.recompute();
    }

    /// Score-button semantics: picking the value already selected clears the
    /// cell, anything else sets it.
    pub fn toggle(&mut self, segment: Segment, variable: Variable, score: Score) {
        if self.get(segment, variable) == Some(score) {
            self.clear_score(segment, variable);
        } else {
            self.set_score(segment, variable, score);
        }
    }

    /// Validate all entries, then write them. Nothing is written if any entry
    /// is invalid. Returns the number of cells written.
    pub fn apply_entries(&mut self, entries: &[ScoreEntry]) -> Result<usize, InstrumentError> {
        let resolved = validate_entries(entries).map_err(InstrumentError::InvalidEntries)?;
        for entry in &resolved {
            self.set_score(entry.segment, entry.variable, entry.score);
        }
        Ok(resolved.len())
    }

    fn recompute(&mut self) {
        self.aggregate = aggregate(&self.matrix);
        self.revision += 1;
        debug!(
            revision = self.revision,
            ses_cd = self.aggregate.ses_cd_total,
            mm_ses_cd = self.aggregate.mm_ses_cd_total,
            "aggregate recomputed"
        );
    }
}
