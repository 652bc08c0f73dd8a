//! sescd-core
//!
//! Pure domain vocabulary for endoscopic scoring: bowel segments, scoring
//! variables, ordinal scores, and the score matrix. No scoring rules live
//! here; see `sescd-instruments`.

pub mod error;
pub mod models;

pub use models::matrix::{ScoreMatrix, SegmentScores};
pub use models::score::Score;
pub use models::segment::Segment;
pub use models::variable::Variable;
