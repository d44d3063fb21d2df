//! Domain models used by the backend: topics, the difficulty ladder,
//! generated questions, evaluation results, and interview session records.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject domains questions are drawn from. Closed set: anything else is
/// rejected at the parse boundary with [`EngineError::UnknownTopic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
  Dsa,
  Os,
  Dbms,
  Cn,
  Oops,
  Python,
  Webdev,
}

impl Topic {
  pub const ALL: [Topic; 7] = [
    Topic::Dsa,
    Topic::Os,
    Topic::Dbms,
    Topic::Cn,
    Topic::Oops,
    Topic::Python,
    Topic::Webdev,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Topic::Dsa => "dsa",
      Topic::Os => "os",
      Topic::Dbms => "dbms",
      Topic::Cn => "cn",
      Topic::Oops => "oops",
      Topic::Python => "python",
      Topic::Webdev => "webdev",
    }
  }
}

impl fmt::Display for Topic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Topic {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "dsa" => Ok(Topic::Dsa),
      "os" => Ok(Topic::Os),
      "dbms" => Ok(Topic::Dbms),
      "cn" => Ok(Topic::Cn),
      "oops" => Ok(Topic::Oops),
      "python" => Ok(Topic::Python),
      "webdev" => Ok(Topic::Webdev),
      other => Err(EngineError::UnknownTopic(other.to_string())),
    }
  }
}

/// Linear difficulty ladder. Adaptive transitions move at most one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }

  /// Adaptive transition: score >= 70 steps up (capped at hard), score < 40
  /// steps down (capped at easy), anything in between stays put.
  pub fn next(self, last_score: u8) -> Difficulty {
    if last_score >= 70 && self != Difficulty::Hard {
      if self == Difficulty::Easy {
        Difficulty::Medium
      } else {
        Difficulty::Hard
      }
    } else if last_score < 40 && self != Difficulty::Easy {
      if self == Difficulty::Hard {
        Difficulty::Medium
      } else {
        Difficulty::Easy
      }
    } else {
      self
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Difficulty {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "easy" => Ok(Difficulty::Easy),
      "medium" => Ok(Difficulty::Medium),
      "hard" => Ok(Difficulty::Hard),
      other => Err(EngineError::UnknownDifficulty(other.to_string())),
    }
  }
}

/// Errors surfaced by the question engine at its parse boundary.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("unknown topic: {0}")]
  UnknownTopic(String),
  #[error("unknown difficulty: {0}")]
  UnknownDifficulty(String),
}

/// A question synthesized from a catalog template. The keyword lists stay
/// server-side; only id/text/topic/difficulty go out on the wire.
#[derive(Clone, Debug, Serialize)]
pub struct GeneratedQuestion {
  pub id: String,
  pub topic: Topic,
  /// Difficulty actually used; may differ from the requested one if the
  /// requested list was empty and a fallback kicked in.
  pub difficulty: Difficulty,
  pub text: String,
  pub must_have: Vec<String>,
  pub bonus: Vec<String>,
}

/// Outcome of scoring one free-text answer against a question.
#[derive(Clone, Debug, Serialize)]
pub struct EvaluationResult {
  /// In [0, 100]; must-have keywords are worth 70, bonus keywords 30.
  pub score: u8,
  pub feedback: String,
  /// Matched must-haves first (template order, original casing), then
  /// matched bonuses.
  pub keywords_matched: Vec<String>,
  /// All missed must-haves, then at most the first 3 missed bonuses.
  pub keywords_missed: Vec<String>,
}

/// One answered question inside a running interview.
#[derive(Clone, Debug)]
pub struct AnswerRecord {
  pub question_id: String,
  pub question_text: String,
  pub answer: String,
  pub score: u8,
  pub difficulty: Difficulty,
}

/// A running interview, stored in memory until `end` is called.
#[derive(Clone, Debug)]
pub struct InterviewSession {
  pub user_id: String,
  pub topic: Topic,
  pub current_difficulty: Difficulty,
  /// Every question served so far, newest last. Answers are matched against
  /// this list by question id.
  pub questions: Vec<GeneratedQuestion>,
  pub answers: Vec<AnswerRecord>,
  pub started_at: Instant,
}

#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyPerformance {
  pub count: usize,
  pub total_score: u32,
}

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct PerformanceByDifficulty {
  pub easy: DifficultyPerformance,
  pub medium: DifficultyPerformance,
  pub hard: DifficultyPerformance,
}

impl PerformanceByDifficulty {
  pub fn slot_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyPerformance {
    match difficulty {
      Difficulty::Easy => &mut self.easy,
      Difficulty::Medium => &mut self.medium,
      Difficulty::Hard => &mut self.hard,
    }
  }

  pub fn slot(&self, difficulty: Difficulty) -> &DifficultyPerformance {
    match difficulty {
      Difficulty::Easy => &self.easy,
      Difficulty::Medium => &self.medium,
      Difficulty::Hard => &self.hard,
    }
  }
}

/// Finished-interview record, also what the history store keeps per user.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
  pub topic: Topic,
  pub overall_score: u8,
  pub correct_answers: usize,
  pub total_questions: usize,
  pub time_taken_secs: u64,
  pub strengths: Vec<String>,
  pub improvements: Vec<String>,
  pub performance_by_difficulty: PerformanceByDifficulty,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn adaptive_ladder_steps_one_at_a_time() {
    assert_eq!(Difficulty::Easy.next(75), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.next(75), Difficulty::Hard);
    assert_eq!(Difficulty::Hard.next(75), Difficulty::Hard);
    assert_eq!(Difficulty::Hard.next(30), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.next(30), Difficulty::Easy);
    assert_eq!(Difficulty::Easy.next(30), Difficulty::Easy);
    assert_eq!(Difficulty::Medium.next(55), Difficulty::Medium);
  }

  #[test]
  fn ladder_boundaries_are_inclusive() {
    assert_eq!(Difficulty::Easy.next(70), Difficulty::Medium);
    assert_eq!(Difficulty::Easy.next(69), Difficulty::Easy);
    assert_eq!(Difficulty::Hard.next(40), Difficulty::Hard);
    assert_eq!(Difficulty::Hard.next(39), Difficulty::Medium);
  }

  #[test]
  fn topic_round_trips_through_strings() {
    for topic in Topic::ALL {
      assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
    }
    assert!(matches!(
      "philosophy".parse::<Topic>(),
      Err(EngineError::UnknownTopic(t)) if t == "philosophy"
    ));
  }
}
