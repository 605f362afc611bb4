//! Integration specifications for the assessment engine and its HTTP surface.
//!
//! Scenarios run end-to-end through the public facade and router so catalog,
//! scoring, and classification are validated together without reaching into
//! private modules.

mod common {
    use std::sync::Arc;

    use serde_json::Value;

    use persona_theatre::assessment::{
        assessment_router, AnswerMap, AssessmentEngine, QuestionId,
    };

    pub(super) fn engine() -> AssessmentEngine {
        AssessmentEngine::standard()
    }

    pub(super) fn full_run(engine: &AssessmentEngine, option_index: usize) -> AnswerMap {
        engine
            .bank()
            .questions()
            .iter()
            .map(|question| (question.id, option_index))
            .collect()
    }

    pub(super) fn answers(entries: &[(u16, usize)]) -> AnswerMap {
        entries
            .iter()
            .map(|(id, option_index)| (QuestionId(*id), *option_index))
            .collect()
    }

    pub(super) fn router() -> axum::Router {
        assessment_router(Arc::new(engine()))
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use common::*;
use persona_theatre::assessment::domain::{
    AnswerOption, Question, QuestionTheme, ScoreVector, WeightVector,
};
use persona_theatre::assessment::{
    classify, compute_scores, Dimension, QuestionBank, QuestionId,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const DECLARED_TITLES: [&str; 8] = [
    "荒原独狼",
    "优雅的掠食者",
    "被写好的剧本",
    "镜厅的舞者",
    "剧场的监控者",
    "林间的逃逸者",
    "平衡的行者",
    "迷雾中的旅人",
];

#[test]
fn a_complete_run_produces_a_declared_archetype() {
    let engine = engine();

    for option_index in 0..4 {
        let outcome = engine.evaluate(&full_run(&engine, option_index));

        assert_eq!(outcome.answered, 45);
        for dimension in Dimension::ALL {
            assert!(outcome.scores.get(dimension) <= 100);
        }
        assert!(
            DECLARED_TITLES.contains(&outcome.archetype.title),
            "unexpected archetype {}",
            outcome.archetype.title
        );
    }
}

#[test]
fn evaluation_is_bit_identical_across_engines() {
    let first = engine();
    let second = engine();
    let recorded = answers(&[(1, 3), (7, 1), (19, 2), (28, 0), (40, 2), (45, 3)]);

    assert_eq!(first.evaluate(&recorded), second.evaluate(&recorded));
}

#[test]
fn swapped_catalog_normalizes_against_its_own_size() {
    let opener = |id: u16| Question {
        id: QuestionId(id),
        theme: QuestionTheme::Identity,
        prompt: "只有一个维度的问题",
        options: vec![AnswerOption {
            text: "全情投入",
            weights: WeightVector::new([5, 0, 0, 0, 0, 0]),
        }],
    };
    let bank = QuestionBank::new(vec![opener(1), opener(2)]);

    let result = compute_scores(&answers(&[(1, 0), (2, 0)]), &bank);

    assert_eq!(
        result,
        ScoreVector {
            openness: 100,
            ..ScoreVector::default()
        }
    );
}

#[test]
fn malformed_entries_leave_the_snapshot_untouched() {
    let engine = engine();
    let clean = answers(&[(3, 1), (14, 2)]);
    let mut corrupted = clean.clone();
    corrupted.insert(QuestionId(3000), 0);
    corrupted.insert(QuestionId(20), 9);

    let clean_outcome = engine.evaluate(&clean);
    let corrupted_outcome = engine.evaluate(&corrupted);

    assert_eq!(clean_outcome.scores, corrupted_outcome.scores);
    assert_eq!(clean_outcome.archetype, corrupted_outcome.archetype);
}

#[test]
fn empty_answers_classify_without_error() {
    let engine = engine();

    let outcome = engine.evaluate(&answers(&[]));

    assert_eq!(outcome.scores, ScoreVector::default());
    assert_eq!(outcome.archetype.title, "迷雾中的旅人");
    assert_eq!(classify(&outcome.scores), outcome.archetype);
}

#[tokio::test]
async fn result_route_handles_a_full_submission() {
    let engine = engine();
    let answer_object: serde_json::Map<String, Value> = engine
        .bank()
        .questions()
        .iter()
        .map(|question| (question.id.0.to_string(), json!(1)))
        .collect();

    let response = router()
        .oneshot(
            axum::http::Request::post("/api/v1/assessment/result")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({ "answers": answer_object })).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("answered"), Some(&json!(45)));

    let title = payload
        .get("archetype")
        .and_then(|archetype| archetype.get("title"))
        .and_then(Value::as_str)
        .expect("archetype title");
    assert!(DECLARED_TITLES.contains(&title));
}
