use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::classification::compatibility_note;
use super::domain::{
    AnimalTag, AnswerMap, ArchetypeResult, Question, QuestionId, QuestionTheme, ScoreVector,
};
use super::engine::AssessmentEngine;

/// Router builder exposing the catalog and the evaluation endpoint.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route(
            "/api/v1/assessment/questions/:question_id",
            get(question_handler),
        )
        .route("/api/v1/assessment/result", post(result_handler))
        .with_state(engine)
}

pub(crate) async fn questions_handler(State(engine): State<Arc<AssessmentEngine>>) -> Response {
    let catalog: Vec<QuestionView> = engine
        .bank()
        .questions()
        .iter()
        .map(QuestionView::from)
        .collect();

    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn question_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Path(question_id): Path<u16>,
) -> Response {
    match engine.bank().lookup(QuestionId(question_id)) {
        Some(question) => {
            (StatusCode::OK, axum::Json(QuestionView::from(question))).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown question {question_id}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    let outcome = engine.evaluate(&request.answers);
    let response = AssessmentResponse {
        answered: outcome.answered,
        total_questions: engine.bank().len(),
        scores: outcome.scores,
        archetype: ArchetypeView::from(&outcome.archetype),
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}

/// Catalog entry as served to the presentation layer. Contribution weights
/// stay server-side.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: u16,
    pub theme: QuestionTheme,
    pub theme_label: &'static str,
    pub accent_color: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.0,
            theme: question.theme,
            theme_label: question.theme.label(),
            accent_color: question.theme.accent_color(),
            prompt: question.prompt,
            options: question.options.iter().map(|option| option.text).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub answered: usize,
    pub total_questions: usize,
    pub scores: ScoreVector,
    pub archetype: ArchetypeView,
}

#[derive(Debug, Serialize)]
pub struct ArchetypeView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub animal: AnimalView,
    pub profile: &'static str,
    pub blind_spot: &'static str,
    pub soul_match: &'static str,
    pub keywords: &'static [&'static str],
    pub compatibility: u8,
    pub compatibility_note: &'static str,
    pub detail_analysis: &'static str,
}

impl From<&ArchetypeResult> for ArchetypeView {
    fn from(result: &ArchetypeResult) -> Self {
        Self {
            title: result.title,
            subtitle: result.subtitle,
            animal: AnimalView::from(result.animal),
            profile: result.profile,
            blind_spot: result.blind_spot,
            soul_match: result.soul_match,
            keywords: result.keywords,
            compatibility: result.compatibility,
            compatibility_note: compatibility_note(result.compatibility),
            detail_analysis: result.detail_analysis,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnimalView {
    pub tag: AnimalTag,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<AnimalTag> for AnimalView {
    fn from(tag: AnimalTag) -> Self {
        Self {
            tag,
            name: tag.name(),
            description: tag.description(),
        }
    }
}
