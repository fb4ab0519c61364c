use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::bank::{DomainStep, QuestionBank};
use super::domain::{DiagnosticError, Domain, QuestionId};
use super::report::{build_report, DiagnosticReport, RadarPoint};
use crate::error::AppError;

/// Radius of the radar chart returned alongside a report.
pub const RADAR_RADIUS: f64 = 100.0;

/// Router builder exposing the questionnaire and report endpoints.
pub fn diagnostic_router(bank: Arc<QuestionBank>) -> Router {
    Router::new()
        .route("/api/v1/diagnostic/questions", get(questions_handler))
        .route("/api/v1/diagnostic/report", post(report_handler))
        .with_state(bank)
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainView {
    pub domain: Domain,
    pub label: &'static str,
    pub angle: u16,
    pub step: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: &'static str,
    #[serde(flatten)]
    pub step: DomainStep,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub domains: Vec<DomainView>,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Question id to score. Missing questions are scored as neutral.
    #[serde(default)]
    pub answers: BTreeMap<u32, i64>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    #[serde(flatten)]
    pub report: DiagnosticReport,
    pub answered: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unanswered: Vec<QuestionId>,
    pub radar: Vec<RadarPoint>,
}

pub(crate) async fn questions_handler(
    State(bank): State<Arc<QuestionBank>>,
) -> Json<QuestionnaireView> {
    let domains = Domain::ordered()
        .into_iter()
        .map(|domain| DomainView {
            domain,
            label: domain.label(),
            angle: domain.angle(),
            step: domain.index() + 1,
        })
        .collect();

    let questions = bank
        .questions()
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            bank.step_for(index).map(|step| QuestionView {
                id: question.id,
                text: question.text,
                step,
            })
        })
        .collect();

    Json(QuestionnaireView { domains, questions })
}

pub(crate) async fn report_handler(
    State(bank): State<Arc<QuestionBank>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| DiagnosticError::MalformedAnswers(rejection.body_text()))?;
    let answers = bank.answer_sheet(request.answers)?;
    let unanswered = bank
        .questions()
        .iter()
        .map(|question| question.id)
        .filter(|id| answers.get(*id).is_none())
        .collect();

    let report = build_report(&answers, &bank);
    let radar = report.radar_points(RADAR_RADIUS);

    Ok(Json(ReportResponse {
        report,
        answered: answers.len(),
        unanswered,
        radar,
    }))
}
