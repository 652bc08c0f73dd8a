use serde::{Deserialize, Serialize};
use sescd_core::{Score, Segment, Variable};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}

/// Every variable in both indices is rated on the same 0–3 scale.
pub const SCORE_RANGE: ScoreRange = ScoreRange { min: 0, max: 3 };

/// A rating provided from outside (score file, API) before validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub segment: String,
    pub variable: String,
    #[ts(type = "number")]
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub segment: String,
    pub variable: String,
    #[ts(type = "number")]
    pub value: i64,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// A validated entry, ready to be written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub segment: Segment,
    pub variable: Variable,
    pub score: Score,
}

impl ScoreEntry {
    pub fn resolve(&self) -> Result<ResolvedEntry, ValidationError> {
        let fail = |message: String| ValidationError {
            segment: self.segment.clone(),
            variable: self.variable.clone(),
            value: self.value,
            expected_range: SCORE_RANGE,
            message,
        };

        let segment: Segment = self
            .segment
            .parse()
            .map_err(|_| fail(format!("unknown segment '{}'", self.segment)))?;
        let variable: Variable = self
            .variable
            .parse()
            .map_err(|_| fail(format!("unknown variable '{}'", self.variable)))?;

        if !SCORE_RANGE.contains(self.value) {
            return Err(fail(format!(
                "{} {}: score {} is outside range [{}, {}]",
                segment.display_name(),
                variable.display_name(),
                self.value,
                SCORE_RANGE.min,
                SCORE_RANGE.max,
            )));
        }
        let score = Score::new(self.value).map_err(|e| fail(e.to_string()))?;

        Ok(ResolvedEntry {
            segment,
            variable,
            score,
        })
    }
}

/// Validate a batch of entries, collecting every failure.
pub fn validate_entries(entries: &[ScoreEntry]) -> Result<Vec<ResolvedEntry>, Vec<ValidationError>> {
    let mut resolved = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();
    for entry in entries {
        match entry.resolve() {
            Ok(r) => resolved.push(r),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}
