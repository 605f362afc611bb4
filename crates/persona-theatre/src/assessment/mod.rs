//! Quiz catalog, scoring, and archetype classification for the Absurd
//! Theatre love-personality assessment.
//!
//! Everything here is pure and synchronous: the catalog is immutable after
//! startup, scoring folds a read-only answer snapshot, and classification is
//! an ordered first-match rule walk that always produces a result.

pub mod bank;
pub mod classification;
pub mod domain;
pub mod engine;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use bank::{QuestionBank, MAX_OPTION_WEIGHT};
pub use classification::{animal_tag, classify, compatibility_note};
pub use domain::{
    AnimalTag, AnswerMap, AnswerOption, ArchetypeResult, Dimension, Question, QuestionId,
    QuestionTheme, ScoreVector, WeightVector,
};
pub use engine::{AssessmentEngine, AssessmentOutcome};
pub use router::assessment_router;
pub use scoring::compute_scores;
