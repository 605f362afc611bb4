use super::bank::{QuestionBank, MAX_OPTION_WEIGHT};
use super::domain::{AnswerMap, Dimension, ScoreVector};

/// Fold recorded answers into normalized 0-100 dimension scores.
///
/// Entries pointing at an unknown question or an out-of-range option are
/// skipped, so a stale or partial answer set still yields a usable snapshot.
/// An empty answer set normalizes to the all-zero vector.
pub fn compute_scores(answers: &AnswerMap, bank: &QuestionBank) -> ScoreVector {
    let mut totals = [0u32; 6];

    for (question_id, option_index) in answers {
        let question = match bank.lookup(*question_id) {
            Some(question) => question,
            None => continue,
        };
        let option = match question.options.get(*option_index) {
            Some(option) => option,
            None => continue,
        };

        for (total, dimension) in totals.iter_mut().zip(Dimension::ALL) {
            *total += u32::from(option.weights.get(dimension));
        }
    }

    let ceiling = bank.len() as u32 * MAX_OPTION_WEIGHT;
    if ceiling == 0 {
        return ScoreVector::default();
    }

    let scaled = totals.map(|total| normalize(total, ceiling));
    ScoreVector {
        openness: scaled[0],
        stability: scaled[1],
        intimacy: scaled[2],
        autonomy: scaled[3],
        expression: scaled[4],
        trust: scaled[5],
    }
}

fn normalize(total: u32, ceiling: u32) -> u8 {
    (f64::from(total) / f64::from(ceiling) * 100.0).round() as u8
}
