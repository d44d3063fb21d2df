//! Keyword-based answer scoring.
//!
//! Matching is case-insensitive substring containment. Must-have keywords
//! carry 70 points pro rata, bonus keywords 30. A question with an empty
//! keyword list gets the neutral half of that component (35 or 15) so a
//! degenerate rubric cannot zero out or inflate the score.

use crate::domain::{EvaluationResult, GeneratedQuestion};

const EXCELLENT: &str = "Excellent answer! You covered the key concepts thoroughly.";
const GOOD: &str = "Good answer! You understood the main concepts well.";
const DECENT: &str = "Decent attempt. Try to include more specific technical terms.";
const NEEDS_REVIEW: &str = "This topic needs more review. Focus on the core concepts.";

/// Score one free-text answer against a question's keyword rubric.
pub fn evaluate(answer: &str, question: &GeneratedQuestion) -> EvaluationResult {
  let normalized = answer.to_lowercase();
  let contains = |keyword: &str| normalized.contains(&keyword.to_lowercase());

  let must_matched: Vec<&String> = question.must_have.iter().filter(|k| contains(k)).collect();
  let bonus_matched: Vec<&String> = question.bonus.iter().filter(|k| contains(k)).collect();

  let must_score = if question.must_have.is_empty() {
    35.0
  } else {
    must_matched.len() as f64 / question.must_have.len() as f64 * 70.0
  };
  let bonus_score = if question.bonus.is_empty() {
    15.0
  } else {
    bonus_matched.len() as f64 / question.bonus.len() as f64 * 30.0
  };
  let score = (must_score + bonus_score).round() as u8;

  let feedback = if score >= 80 {
    EXCELLENT
  } else if score >= 60 {
    GOOD
  } else if score >= 40 {
    DECENT
  } else {
    NEEDS_REVIEW
  };

  let keywords_matched = must_matched
    .iter()
    .chain(bonus_matched.iter())
    .map(|k| (*k).clone())
    .collect();
  // All missed must-haves, then at most three missed bonuses.
  let keywords_missed = question
    .must_have
    .iter()
    .filter(|k| !contains(k))
    .chain(question.bonus.iter().filter(|k| !contains(k)).take(3))
    .cloned()
    .collect();

  EvaluationResult {
    score,
    feedback: feedback.to_string(),
    keywords_matched,
    keywords_missed,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, Topic};

  fn question(must_have: &[&str], bonus: &[&str]) -> GeneratedQuestion {
    GeneratedQuestion {
      id: "q1".to_string(),
      topic: Topic::Dsa,
      difficulty: Difficulty::Easy,
      text: "What is the time complexity of binary search?".to_string(),
      must_have: must_have.iter().map(|s| s.to_string()).collect(),
      bonus: bonus.iter().map(|s| s.to_string()).collect(),
    }
  }

  #[test]
  fn full_coverage_scores_high() {
    let q = question(&["o(log n)", "logarithmic", "sorted", "divide"], &["example"]);
    let answer = "Binary search runs in O(log n), i.e. logarithmic time, because it \
      operates on a sorted array and uses divide and conquer. For example, searching 1M items \
      takes ~20 steps.";
    let result = evaluate(answer, &q);
    assert_eq!(result.score, 100);
    assert_eq!(result.feedback, EXCELLENT);
    assert_eq!(result.keywords_matched.len(), 5);
    assert!(result.keywords_missed.is_empty());
  }

  #[test]
  fn empty_answer_scores_zero_with_review_feedback() {
    let q = question(&["lifo", "push", "pop"], &["example"]);
    let result = evaluate("", &q);
    assert_eq!(result.score, 0);
    assert_eq!(result.feedback, NEEDS_REVIEW);
    assert!(result.keywords_matched.is_empty());
  }

  #[test]
  fn partial_match_partitions_matched_and_missed() {
    let q = question(&["heap", "priority", "complete tree"], &["sift", "array"]);
    let result = evaluate("A heap keeps the highest priority element at the root.", &q);
    assert_eq!(result.keywords_matched, vec!["heap", "priority"]);
    assert_eq!(result.keywords_missed, vec!["complete tree", "sift", "array"]);
    // 2/3 of 70 + 0/2 of 30 = 46.67 -> 47.
    assert_eq!(result.score, 47);
    assert_eq!(result.feedback, DECENT);
  }

  #[test]
  fn matching_is_case_insensitive() {
    let q = question(&["TCP", "handshake"], &[]);
    let result = evaluate("tcp uses a three-way HANDSHAKE", &q);
    assert_eq!(result.score, 70 + 15);
    assert_eq!(result.keywords_matched, vec!["TCP", "handshake"]);
  }

  #[test]
  fn missed_bonus_is_capped_at_three() {
    let q = question(&["a"], &["b1", "b2", "b3", "b4", "b5"]);
    let result = evaluate("a", &q);
    assert_eq!(result.keywords_missed, vec!["b1", "b2", "b3"]);
  }

  #[test]
  fn empty_keyword_lists_get_neutral_half_credit() {
    let q = question(&[], &[]);
    let result = evaluate("anything at all", &q);
    assert_eq!(result.score, 50);
    assert_eq!(result.feedback, DECENT);
  }

  #[test]
  fn feedback_tier_boundaries() {
    // 10 must-haves, no bonus: each match is worth 7 points + neutral 15.
    let keys: Vec<&str> = vec!["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9"];
    let q = question(&keys, &[]);
    // 5 matches: 35 + 15 = 50 -> decent.
    assert_eq!(evaluate("k0 k1 k2 k3 k4", &q).feedback, DECENT);
    // 7 matches: 49 + 15 = 64 -> good.
    assert_eq!(evaluate("k0 k1 k2 k3 k4 k5 k6", &q).feedback, GOOD);
    // 10 matches: 70 + 15 = 85 -> excellent.
    assert_eq!(evaluate("k0 k1 k2 k3 k4 k5 k6 k7 k8 k9", &q).feedback, EXCELLENT);
    // 3 matches: 21 + 15 = 36 -> needs review.
    assert_eq!(evaluate("k0 k1 k2", &q).feedback, NEEDS_REVIEW);
  }
}
