//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Errors become `{ success: false, error }` payloads so the frontend has one
//! shape to deal with.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::logic::{self, ServiceError};
use crate::protocol::*;
use crate::state::AppState;

fn error_response(err: ServiceError) -> axum::response::Response {
  Json(ErrorOut::new(err)).into_response()
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state, body), fields(user_id = %body.user_id))]
pub async fn http_start_interview(
  State(state): State<Arc<AppState>>,
  Json(body): Json<StartIn>,
) -> axum::response::Response {
  match logic::start_interview(&state, &body.user_id, body.topic.as_deref(), body.difficulty.as_deref()).await {
    Ok((session_id, question)) => {
      info!(target: "interview", %session_id, id = %question.id, "HTTP interview started");
      Json(StartOut { success: true, session_id, question: to_out(&question) }).into_response()
    }
    Err(e) => error_response(e),
  }
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn http_next_question(
  State(state): State<Arc<AppState>>,
  Path(session_id): Path<String>,
) -> axum::response::Response {
  match logic::next_question(&state, &session_id).await {
    Ok(question) => {
      info!(target: "interview", %session_id, id = %question.id, "HTTP question served");
      Json(QuestionResponse { success: true, question: to_out(&question) }).into_response()
    }
    Err(e) => error_response(e),
  }
}

#[instrument(level = "info", skip(state, body), fields(session_id = %body.session_id, question_id = %body.question_id, answer_len = body.answer.len()))]
pub async fn http_submit_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> axum::response::Response {
  match logic::submit_answer(&state, &body.session_id, &body.question_id, &body.answer).await {
    Ok(outcome) => {
      info!(target: "interview", session_id = %body.session_id, score = outcome.result.score,
        "HTTP answer evaluated");
      Json(AnswerResponse { success: true, result: result_out(outcome) }).into_response()
    }
    Err(e) => error_response(e),
  }
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn http_end_interview(
  State(state): State<Arc<AppState>>,
  Path(session_id): Path<String>,
) -> axum::response::Response {
  match logic::end_interview(&state, &session_id).await {
    Ok(summary) => {
      info!(target: "interview", %session_id, overall = summary.overall_score, "HTTP interview ended");
      Json(SummaryResponse { success: true, summary }).into_response()
    }
    Err(e) => error_response(e),
  }
}

#[instrument(level = "info", skip(state), fields(%user_id))]
pub async fn http_user_history(
  State(state): State<Arc<AppState>>,
  Path(user_id): Path<String>,
) -> impl IntoResponse {
  let (interviews, stats) = logic::user_history(&state, &user_id).await;
  Json(history_out(interviews, stats))
}
