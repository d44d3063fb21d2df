//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{EvaluationResult, GeneratedQuestion, InterviewSummary};
use crate::logic::{HistoryStats, SubmitOutcome};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
  Ping,
  StartInterview {
    #[serde(rename = "userId")]
    user_id: String,
    topic: Option<String>,
    difficulty: Option<String>,
  },
  NextQuestion {
    #[serde(rename = "sessionId")]
    session_id: String,
  },
  SubmitAnswer {
    #[serde(rename = "sessionId")]
    session_id: String,
    #[serde(rename = "questionId")]
    question_id: String,
    answer: String,
  },
  EndInterview {
    #[serde(rename = "sessionId")]
    session_id: String,
  },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
  Pong,
  InterviewStarted {
    #[serde(rename = "sessionId")]
    session_id: String,
    question: QuestionOut,
  },
  Question {
    question: QuestionOut,
  },
  AnswerResult {
    result: AnswerResultOut,
  },
  Summary {
    summary: InterviewSummary,
  },
  Error {
    message: String,
  },
}

/// DTO used by both WS and HTTP for question delivery. Keyword lists are
/// deliberately absent: they would reveal the scoring rubric.
#[derive(Debug, Serialize)]
pub struct QuestionOut {
  pub id: String,
  pub text: String,
  pub topic: String,
  pub difficulty: String,
}

pub fn to_out(q: &GeneratedQuestion) -> QuestionOut {
  QuestionOut {
    id: q.id.clone(),
    text: q.text.clone(),
    topic: q.topic.to_string(),
    difficulty: q.difficulty.to_string(),
  }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct StartIn {
  #[serde(rename = "userId")]
  pub user_id: String,
  pub topic: Option<String>,
  pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct StartOut {
  pub success: bool,
  #[serde(rename = "sessionId")]
  pub session_id: String,
  pub question: QuestionOut,
}

#[derive(Serialize)]
pub struct QuestionResponse {
  pub success: bool,
  pub question: QuestionOut,
}

#[derive(Deserialize)]
pub struct AnswerIn {
  #[serde(rename = "sessionId")]
  pub session_id: String,
  #[serde(rename = "questionId")]
  pub question_id: String,
  pub answer: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResultOut {
  pub score: u8,
  pub feedback: String,
  pub keywords_matched: Vec<String>,
  pub keywords_missed: Vec<String>,
  pub next_difficulty: String,
  pub questions_answered: usize,
}

pub fn result_out(outcome: SubmitOutcome) -> AnswerResultOut {
  let SubmitOutcome { result, next_difficulty, questions_answered } = outcome;
  let EvaluationResult { score, feedback, keywords_matched, keywords_missed } = result;
  AnswerResultOut {
    score,
    feedback,
    keywords_matched,
    keywords_missed,
    next_difficulty: next_difficulty.to_string(),
    questions_answered,
  }
}

#[derive(Serialize)]
pub struct AnswerResponse {
  pub success: bool,
  pub result: AnswerResultOut,
}

#[derive(Serialize)]
pub struct SummaryResponse {
  pub success: bool,
  pub summary: InterviewSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOut {
  pub success: bool,
  pub interviews: Vec<InterviewSummary>,
  pub total_interviews: usize,
  pub average_score: u8,
  pub best_score: u8,
}

pub fn history_out(interviews: Vec<InterviewSummary>, stats: HistoryStats) -> HistoryOut {
  HistoryOut {
    success: true,
    interviews,
    total_interviews: stats.total_interviews,
    average_score: stats.average_score,
    best_score: stats.best_score,
  }
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub success: bool,
  pub error: String,
}

impl ErrorOut {
  pub fn new(error: impl ToString) -> Self {
    ErrorOut { success: false, error: error.to_string() }
  }
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_messages_parse_from_tagged_json() {
    let msg: ClientWsMessage = serde_json::from_str(
      r#"{"type":"start_interview","userId":"u1","topic":"dsa","difficulty":"easy"}"#,
    )
    .unwrap();
    assert!(matches!(msg, ClientWsMessage::StartInterview { ref user_id, .. } if user_id == "u1"));

    let msg: ClientWsMessage = serde_json::from_str(
      r#"{"type":"submit_answer","sessionId":"s","questionId":"q","answer":"a"}"#,
    )
    .unwrap();
    assert!(matches!(msg, ClientWsMessage::SubmitAnswer { .. }));
  }

  #[test]
  fn server_messages_serialize_with_type_tag() {
    let json = serde_json::to_string(&ServerWsMessage::Pong).unwrap();
    assert_eq!(json, r#"{"type":"pong"}"#);

    let json = serde_json::to_string(&ServerWsMessage::Error { message: "nope".into() }).unwrap();
    assert!(json.contains(r#""type":"error""#));
  }

  #[test]
  fn question_out_hides_the_rubric() {
    let json = serde_json::to_string(&QuestionOut {
      id: "q1".into(),
      text: "What is a stack?".into(),
      topic: "dsa".into(),
      difficulty: "easy".into(),
    })
    .unwrap();
    assert!(!json.contains("must_have"));
    assert!(!json.contains("bonus"));
  }
}
