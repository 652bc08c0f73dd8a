//! sescd-instruments
//!
//! Endoscopic severity indices for Crohn's disease. Pure data and arithmetic,
//! no I/O. Defines the SES-CD and MM-SES-CD instruments, the multiplier
//! table, severity and remission classification, and the [`store::ScoreStore`]
//! that keeps an [`aggregate::AggregateResult`] in step with its matrix.

pub mod aggregate;
pub mod error;
pub mod instruments;
pub mod multiplier;
pub mod scoring;
pub mod severity;
pub mod store;

use sescd_core::{ScoreMatrix, Segment, SegmentScores, Variable};

use crate::error::InstrumentError;

/// Trait implemented by each endoscopic index.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "ses_cd").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "MM-SES-CD").
    fn name(&self) -> &str;

    /// Contribution of a single segment to the total.
    fn segment_value(&self, segment: Segment, scores: &SegmentScores) -> f64;

    /// Sum of all segment contributions.
    fn total(&self, matrix: &ScoreMatrix) -> f64 {
        Segment::ALL
            .iter()
            .map(|&segment| self.segment_value(segment, matrix.segment(segment)))
            .sum()
    }

    /// Render a value the way this instrument reports it.
    fn format_value(&self, value: f64) -> String {
        format!("{value:.1}")
    }

    /// Format the matrix as a structured markdown summary for reports.
    fn to_structured_input(&self, matrix: &ScoreMatrix) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for segment in Segment::ALL {
            let scores = matrix.segment(segment);
            output.push_str(&format!("### {} ({})\n", segment.display_name(), segment));
            for variable in Variable::ALL {
                if let Some(score) = scores.get(variable) {
                    output.push_str(&format!("- {}: {}\n", variable.display_name(), score));
                }
            }
            output.push_str(&format!(
                "- subtotal: {}\n\n",
                self.format_value(self.segment_value(segment, scores))
            ));
        }
        output.push_str(&format!(
            "**Total: {}**\n",
            self.format_value(self.total(matrix))
        ));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ses_cd::SesCd),
        Box::new(instruments::mm_ses_cd::MmSesCd),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
