use serde::Serialize;

use super::bank::QuestionBank;
use super::classification::classify;
use super::domain::{AnswerMap, ArchetypeResult, ScoreVector};
use super::scoring::compute_scores;

/// Stateless facade pairing the immutable catalog with the pure scoring and
/// classification passes. Holds no per-session state, so one instance can
/// serve any number of concurrent quiz sessions.
pub struct AssessmentEngine {
    bank: QuestionBank,
}

impl AssessmentEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn standard() -> Self {
        Self::new(QuestionBank::standard())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Best-effort score snapshot for a possibly partial answer set.
    pub fn scores(&self, answers: &AnswerMap) -> ScoreVector {
        compute_scores(answers, &self.bank)
    }

    /// Score the answers and classify the result in one pass.
    pub fn evaluate(&self, answers: &AnswerMap) -> AssessmentOutcome {
        let scores = self.scores(answers);
        let archetype = classify(&scores);

        AssessmentOutcome {
            answered: self.answered(answers),
            scores,
            archetype,
        }
    }

    /// Count of entries that resolve to a real question and option; malformed
    /// references do not count as answered.
    fn answered(&self, answers: &AnswerMap) -> usize {
        answers
            .iter()
            .filter(|(id, option_index)| {
                self.bank
                    .lookup(**id)
                    .map(|question| **option_index < question.options.len())
                    .unwrap_or(false)
            })
            .count()
    }
}

/// Evaluation output: the normalized snapshot plus the archetype it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub answered: usize,
    pub scores: ScoreVector,
    pub archetype: ArchetypeResult,
}
