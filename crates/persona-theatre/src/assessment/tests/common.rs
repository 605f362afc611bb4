use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    AnswerMap, AnswerOption, Question, QuestionId, QuestionTheme, ScoreVector, WeightVector,
};
use crate::assessment::{AssessmentEngine, QuestionBank};

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard()
}

pub(super) fn scores(
    openness: u8,
    stability: u8,
    intimacy: u8,
    autonomy: u8,
    expression: u8,
    trust: u8,
) -> ScoreVector {
    ScoreVector {
        openness,
        stability,
        intimacy,
        autonomy,
        expression,
        trust,
    }
}

pub(super) fn answers(entries: &[(u16, usize)]) -> AnswerMap {
    entries
        .iter()
        .map(|(id, option_index)| (QuestionId(*id), *option_index))
        .collect()
}

pub(super) fn solo_option_question(id: u16, weights: [u8; 6]) -> Question {
    Question {
        id: QuestionId(id),
        theme: QuestionTheme::Identity,
        prompt: "占位问题",
        options: vec![AnswerOption {
            text: "唯一选项",
            weights: WeightVector::new(weights),
        }],
    }
}

/// Two questions whose only option feeds openness alone, at the declared
/// maximum weight.
pub(super) fn single_axis_bank() -> QuestionBank {
    QuestionBank::new(vec![
        solo_option_question(1, [5, 0, 0, 0, 0, 0]),
        solo_option_question(2, [5, 0, 0, 0, 0, 0]),
    ])
}

pub(super) fn assessment_router_with_standard_engine() -> axum::Router {
    crate::assessment::assessment_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
