//! Interview workflows shared by the HTTP and WebSocket handlers: start,
//! next question, answer submission with adaptive difficulty, and the
//! end-of-interview summary.

use std::str::FromStr;

use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
  AnswerRecord, Difficulty, EngineError, EvaluationResult, GeneratedQuestion, InterviewSession,
  InterviewSummary, PerformanceByDifficulty, Topic,
};
use crate::evaluator;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error(transparent)]
  Engine(#[from] EngineError),
  #[error("failed to generate question for this topic")]
  NoQuestionAvailable,
  #[error("session not found")]
  SessionNotFound,
  #[error("question not found")]
  QuestionNotFound,
}

/// Result of submitting one answer, including where the ladder goes next.
#[derive(Clone, Debug)]
pub struct SubmitOutcome {
  pub result: EvaluationResult,
  pub next_difficulty: Difficulty,
  pub questions_answered: usize,
}

/// Aggregate stats over a user's finished interviews.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryStats {
  pub total_interviews: usize,
  pub average_score: u8,
  pub best_score: u8,
}

/// Create a session and serve its first question. Topic and difficulty fall
/// back to the configured defaults when absent.
#[instrument(level = "info", skip(state), fields(%user_id))]
pub async fn start_interview(
  state: &AppState,
  user_id: &str,
  topic: Option<&str>,
  difficulty: Option<&str>,
) -> Result<(String, GeneratedQuestion), ServiceError> {
  let topic = match topic {
    Some(s) => Topic::from_str(s)?,
    None => state.config.session.default_topic,
  };
  let difficulty = match difficulty {
    Some(s) => Difficulty::from_str(s)?,
    None => state.config.session.default_difficulty,
  };

  let session_id = Uuid::new_v4().to_string();
  let first = state
    .engine
    .lock()
    .await
    .generate(&session_id, topic, difficulty)
    .ok_or(ServiceError::NoQuestionAvailable)?;

  let session = InterviewSession {
    user_id: user_id.to_string(),
    topic,
    current_difficulty: difficulty,
    questions: vec![first.clone()],
    answers: Vec::new(),
    started_at: std::time::Instant::now(),
  };
  state.sessions.write().await.insert(session_id.clone(), session);
  info!(target: "interview", %session_id, %topic, %difficulty, "Interview started");
  Ok((session_id, first))
}

/// Serve another question at the session's current (adaptive) difficulty.
#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn next_question(
  state: &AppState,
  session_id: &str,
) -> Result<GeneratedQuestion, ServiceError> {
  let (topic, difficulty) = {
    let sessions = state.sessions.read().await;
    let session = sessions.get(session_id).ok_or(ServiceError::SessionNotFound)?;
    (session.topic, session.current_difficulty)
  };

  let question = state
    .engine
    .lock()
    .await
    .generate(session_id, topic, difficulty)
    .ok_or(ServiceError::NoQuestionAvailable)?;

  let mut sessions = state.sessions.write().await;
  let session = sessions.get_mut(session_id).ok_or(ServiceError::SessionNotFound)?;
  session.questions.push(question.clone());
  Ok(question)
}

/// Score an answer against a previously served question, record it, and move
/// the difficulty ladder.
#[instrument(level = "info", skip(state, answer), fields(%session_id, %question_id, answer_len = answer.len()))]
pub async fn submit_answer(
  state: &AppState,
  session_id: &str,
  question_id: &str,
  answer: &str,
) -> Result<SubmitOutcome, ServiceError> {
  let mut sessions = state.sessions.write().await;
  let session = sessions.get_mut(session_id).ok_or(ServiceError::SessionNotFound)?;

  let question = session
    .questions
    .iter()
    .find(|q| q.id == question_id)
    .ok_or(ServiceError::QuestionNotFound)?
    .clone();

  let result = evaluator::evaluate(answer, &question);
  session.answers.push(AnswerRecord {
    question_id: question_id.to_string(),
    question_text: question.text.clone(),
    answer: answer.to_string(),
    score: result.score,
    difficulty: question.difficulty,
  });
  session.current_difficulty = session.current_difficulty.next(result.score);

  info!(target: "interview", %session_id, score = result.score,
    next_difficulty = %session.current_difficulty, "Answer scored");
  Ok(SubmitOutcome {
    next_difficulty: session.current_difficulty,
    questions_answered: session.answers.len(),
    result,
  })
}

/// Finish a session: derive the summary, free the engine's uniqueness state,
/// and append the summary to the user's history.
#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn end_interview(
  state: &AppState,
  session_id: &str,
) -> Result<InterviewSummary, ServiceError> {
  let session = state
    .sessions
    .write()
    .await
    .remove(session_id)
    .ok_or(ServiceError::SessionNotFound)?;
  state.engine.lock().await.clear(session_id);

  let summary = summarize(&session);
  info!(target: "interview", %session_id, overall = summary.overall_score,
    questions = summary.total_questions, "Interview ended");
  state
    .history
    .write()
    .await
    .entry(session.user_id.clone())
    .or_default()
    .push(summary.clone());
  Ok(summary)
}

/// A user's finished interviews plus aggregate stats. Unknown users get an
/// empty list, not an error.
pub async fn user_history(state: &AppState, user_id: &str) -> (Vec<InterviewSummary>, HistoryStats) {
  let history = state.history.read().await;
  let summaries = history.get(user_id).cloned().unwrap_or_default();
  let stats = history_stats(&summaries);
  (summaries, stats)
}

fn history_stats(summaries: &[InterviewSummary]) -> HistoryStats {
  if summaries.is_empty() {
    return HistoryStats::default();
  }
  let total: u32 = summaries.iter().map(|s| s.overall_score as u32).sum();
  HistoryStats {
    total_interviews: summaries.len(),
    average_score: (total as f64 / summaries.len() as f64).round() as u8,
    best_score: summaries.iter().map(|s| s.overall_score).max().unwrap_or(0),
  }
}

fn summarize(session: &InterviewSession) -> InterviewSummary {
  let scores: Vec<u8> = session.answers.iter().map(|a| a.score).collect();
  let total_questions = scores.len();
  let overall_score = if total_questions > 0 {
    let sum: u32 = scores.iter().map(|s| *s as u32).sum();
    (sum as f64 / total_questions as f64).round() as u8
  } else {
    0
  };
  let correct_answers = scores.iter().filter(|s| **s >= 70).count();
  let time_taken_secs = session.started_at.elapsed().as_secs();

  let mut performance = PerformanceByDifficulty::default();
  for a in &session.answers {
    let slot = performance.slot_mut(a.difficulty);
    slot.count += 1;
    slot.total_score += a.score as u32;
  }

  let mut strengths = Vec::new();
  let mut improvements = Vec::new();

  if overall_score >= 70 {
    strengths.push("Strong conceptual understanding".to_string());
  }
  if overall_score >= 80 {
    strengths.push("Excellent command of technical terminology".to_string());
  }
  let hard = performance.slot(Difficulty::Hard);
  if hard.count > 0 && hard.total_score as f64 / hard.count as f64 >= 60.0 {
    strengths.push("Good performance on challenging questions".to_string());
  }
  if correct_answers as f64 >= total_questions as f64 * 0.6 && total_questions > 0 {
    strengths.push("Consistent accuracy across questions".to_string());
  }
  if session.answers.len() >= 10 {
    strengths.push("Good interview stamina".to_string());
  }

  if overall_score < 50 {
    improvements.push("Review core concepts and fundamentals".to_string());
  }
  if (50..70).contains(&overall_score) {
    improvements.push("Deepen understanding of key concepts".to_string());
  }
  let easy = performance.slot(Difficulty::Easy);
  if easy.count > 0 && (easy.total_score as f64 / easy.count as f64) < 60.0 {
    improvements.push("Focus on building foundation with basic concepts".to_string());
  }
  if scores.iter().filter(|s| **s < 40).count() > 2 {
    improvements.push("Practice explaining concepts clearly".to_string());
  }
  if (correct_answers as f64) < total_questions as f64 * 0.4 {
    improvements.push("Work on technical vocabulary and key terms".to_string());
  }

  if strengths.is_empty() {
    strengths.push("Keep practicing to identify your strengths".to_string());
  }
  if improvements.is_empty() {
    improvements.push("Continue practicing to maintain your skills".to_string());
  }

  InterviewSummary {
    topic: session.topic,
    overall_score,
    correct_answers,
    total_questions,
    time_taken_secs,
    strengths,
    improvements,
    performance_by_difficulty: performance,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(score: u8, difficulty: Difficulty) -> AnswerRecord {
    AnswerRecord {
      question_id: "q".to_string(),
      question_text: "t".to_string(),
      answer: "a".to_string(),
      score,
      difficulty,
    }
  }

  fn session_with(answers: Vec<AnswerRecord>) -> InterviewSession {
    InterviewSession {
      user_id: "u1".to_string(),
      topic: Topic::Dsa,
      current_difficulty: Difficulty::Easy,
      questions: Vec::new(),
      answers,
      started_at: std::time::Instant::now(),
    }
  }

  #[test]
  fn strong_run_produces_strength_lines() {
    let s = session_with(vec![
      record(85, Difficulty::Easy),
      record(90, Difficulty::Medium),
      record(80, Difficulty::Hard),
    ]);
    let summary = summarize(&s);
    assert_eq!(summary.overall_score, 85);
    assert_eq!(summary.correct_answers, 3);
    assert!(summary.strengths.contains(&"Strong conceptual understanding".to_string()));
    assert!(summary.strengths.contains(&"Excellent command of technical terminology".to_string()));
    assert!(summary.strengths.contains(&"Good performance on challenging questions".to_string()));
    assert_eq!(summary.improvements, vec!["Continue practicing to maintain your skills"]);
  }

  #[test]
  fn weak_run_produces_improvement_lines() {
    let s = session_with(vec![
      record(20, Difficulty::Easy),
      record(30, Difficulty::Easy),
      record(35, Difficulty::Easy),
    ]);
    let summary = summarize(&s);
    assert_eq!(summary.overall_score, 28);
    assert_eq!(summary.correct_answers, 0);
    assert!(summary.improvements.contains(&"Review core concepts and fundamentals".to_string()));
    assert!(summary.improvements.contains(&"Focus on building foundation with basic concepts".to_string()));
    assert!(summary.improvements.contains(&"Practice explaining concepts clearly".to_string()));
    assert_eq!(summary.strengths, vec!["Keep practicing to identify your strengths"]);
  }

  #[test]
  fn empty_session_summary_uses_fallback_lines() {
    let summary = summarize(&session_with(Vec::new()));
    assert_eq!(summary.overall_score, 0);
    assert_eq!(summary.total_questions, 0);
    assert_eq!(summary.strengths, vec!["Keep practicing to identify your strengths"]);
    // 0 correct of 0 total: the vocabulary line does not fire (0 < 0 is false).
    assert!(summary
      .improvements
      .contains(&"Review core concepts and fundamentals".to_string()));
  }

  #[test]
  fn per_difficulty_counters_accumulate() {
    let s = session_with(vec![
      record(60, Difficulty::Medium),
      record(80, Difficulty::Medium),
      record(40, Difficulty::Easy),
    ]);
    let summary = summarize(&s);
    let perf = summary.performance_by_difficulty;
    assert_eq!(perf.medium.count, 2);
    assert_eq!(perf.medium.total_score, 140);
    assert_eq!(perf.easy.count, 1);
    assert_eq!(perf.hard.count, 0);
  }

  #[test]
  fn history_stats_round_the_average() {
    let summaries = vec![
      InterviewSummary {
        topic: Topic::Os,
        overall_score: 71,
        correct_answers: 1,
        total_questions: 1,
        time_taken_secs: 10,
        strengths: Vec::new(),
        improvements: Vec::new(),
        performance_by_difficulty: PerformanceByDifficulty::default(),
      },
      InterviewSummary {
        topic: Topic::Os,
        overall_score: 80,
        correct_answers: 1,
        total_questions: 1,
        time_taken_secs: 10,
        strengths: Vec::new(),
        improvements: Vec::new(),
        performance_by_difficulty: PerformanceByDifficulty::default(),
      },
    ];
    let stats = history_stats(&summaries);
    assert_eq!(stats.total_interviews, 2);
    assert_eq!(stats.average_score, 76);
    assert_eq!(stats.best_score, 80);
  }

  #[tokio::test]
  async fn full_interview_flow() {
    let state = AppState::default();
    let (session_id, first) = start_interview(&state, "u1", Some("dsa"), Some("easy"))
      .await
      .expect("start");
    assert_eq!(first.difficulty, Difficulty::Easy);

    // A blank answer scores 0 and keeps the ladder at easy.
    let outcome = submit_answer(&state, &session_id, &first.id, "")
      .await
      .expect("submit");
    assert_eq!(outcome.result.score, 0);
    assert_eq!(outcome.next_difficulty, Difficulty::Easy);
    assert_eq!(outcome.questions_answered, 1);

    let second = next_question(&state, &session_id).await.expect("next");
    assert_ne!(second.id, first.id);

    let summary = end_interview(&state, &session_id).await.expect("end");
    assert_eq!(summary.total_questions, 1);
    assert_eq!(summary.topic, Topic::Dsa);

    // The session is gone afterwards.
    assert!(matches!(
      next_question(&state, &session_id).await,
      Err(ServiceError::SessionNotFound)
    ));

    let (history, stats) = user_history(&state, "u1").await;
    assert_eq!(history.len(), 1);
    assert_eq!(stats.total_interviews, 1);
  }

  #[tokio::test]
  async fn unknown_topic_is_rejected_at_start() {
    let state = AppState::default();
    let err = start_interview(&state, "u1", Some("astrology"), None)
      .await
      .unwrap_err();
    assert!(matches!(err, ServiceError::Engine(EngineError::UnknownTopic(_))));
  }

  #[tokio::test]
  async fn answering_an_unserved_question_fails() {
    let state = AppState::default();
    let (session_id, _) = start_interview(&state, "u1", Some("os"), Some("medium"))
      .await
      .unwrap();
    let err = submit_answer(&state, &session_id, "not-an-id", "answer")
      .await
      .unwrap_err();
    assert!(matches!(err, ServiceError::QuestionNotFound));
  }

  #[tokio::test]
  async fn high_score_steps_the_ladder_up() {
    let state = AppState::default();
    let (session_id, first) = start_interview(&state, "u1", Some("cn"), Some("easy"))
      .await
      .unwrap();
    // Echoing every keyword guarantees a full score.
    let answer = first
      .must_have
      .iter()
      .chain(first.bonus.iter())
      .cloned()
      .collect::<Vec<_>>()
      .join(" ");
    let outcome = submit_answer(&state, &session_id, &first.id, &answer)
      .await
      .unwrap();
    assert_eq!(outcome.result.score, 100);
    assert_eq!(outcome.next_difficulty, Difficulty::Medium);

    let second = next_question(&state, &session_id).await.unwrap();
    assert_eq!(second.difficulty, Difficulty::Medium);
  }
}
