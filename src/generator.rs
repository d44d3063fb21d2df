//! Question synthesis with per-session uniqueness tracking.
//!
//! The engine picks a template uniformly from the catalog, fills each
//! placeholder with a uniformly chosen candidate value, resolves the keyword
//! lists, and retries until the rendered question has not been served to the
//! session yet. After [`MAX_UNIQUE_ATTEMPTS`] tries it serves a duplicate
//! rather than failing the interview.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::{self, Template};
use crate::domain::{Difficulty, GeneratedQuestion, Topic};
use crate::util::fill_template;

/// Retry budget for the uniqueness loop.
pub const MAX_UNIQUE_ATTEMPTS: usize = 100;

/// Owns the rng and the per-session sets of served question signatures.
/// A signature is `topic|difficulty|text`; two renderings that differ in any
/// of the three count as distinct questions.
pub struct QuestionEngine<R: Rng = StdRng> {
  rng: R,
  sessions: HashMap<String, HashSet<String>>,
}

impl QuestionEngine<StdRng> {
  pub fn new() -> Self {
    Self::from_rng(StdRng::from_entropy())
  }
}

impl Default for QuestionEngine<StdRng> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: Rng> QuestionEngine<R> {
  pub fn from_rng(rng: R) -> Self {
    QuestionEngine { rng, sessions: HashMap::new() }
  }

  /// Generate a question for the session, preferring `requested` difficulty.
  /// Returns `None` only when the topic has no templates at any difficulty.
  pub fn generate(
    &mut self,
    session_id: &str,
    topic: Topic,
    requested: Difficulty,
  ) -> Option<GeneratedQuestion> {
    self.generate_from(session_id, topic, requested, |d| catalog::templates(topic, d))
  }

  /// Drop a session's signature set. Idempotent.
  pub fn clear(&mut self, session_id: &str) {
    self.sessions.remove(session_id);
  }

  /// How many distinct questions the session has been served.
  pub fn count(&self, session_id: &str) -> usize {
    self.sessions.get(session_id).map_or(0, |set| set.len())
  }

  fn generate_from(
    &mut self,
    session_id: &str,
    topic: Topic,
    requested: Difficulty,
    fetch: impl Fn(Difficulty) -> &'static [Template],
  ) -> Option<GeneratedQuestion> {
    let mut difficulty = requested;
    let mut templates = fetch(difficulty);
    if templates.is_empty() {
      for candidate in fallback_order(requested) {
        let list = fetch(candidate);
        if !list.is_empty() {
          warn!(target: "interview", %topic, requested = %requested, used = %candidate,
            "no templates at requested difficulty, falling back");
          difficulty = candidate;
          templates = list;
          break;
        }
      }
      if templates.is_empty() {
        return None;
      }
    }

    let used = self.sessions.entry(session_id.to_string()).or_default();
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
      let question = synthesize(&mut self.rng, templates, topic, difficulty);
      let signature = signature_of(&question);
      if !used.contains(&signature) {
        used.insert(signature);
        debug!(target: "interview", session_id, id = %question.id, %difficulty, "question generated");
        return Some(question);
      }
    }

    // Template space exhausted for this session; serve a repeat.
    warn!(target: "interview", session_id, %topic, %difficulty,
      "uniqueness budget exhausted, serving duplicate");
    Some(synthesize(&mut self.rng, templates, topic, difficulty))
  }
}

/// Which difficulties to try, in order, when the requested list is empty.
fn fallback_order(requested: Difficulty) -> [Difficulty; 2] {
  match requested {
    Difficulty::Easy => [Difficulty::Medium, Difficulty::Hard],
    Difficulty::Medium => [Difficulty::Easy, Difficulty::Hard],
    Difficulty::Hard => [Difficulty::Medium, Difficulty::Easy],
  }
}

fn signature_of(q: &GeneratedQuestion) -> String {
  format!("{}|{}|{}", q.topic, q.difficulty, q.text)
}

fn synthesize<R: Rng>(
  rng: &mut R,
  templates: &'static [Template],
  topic: Topic,
  difficulty: Difficulty,
) -> GeneratedQuestion {
  // Lists are checked non-empty by the caller.
  let tpl = templates.choose(rng).unwrap_or(&templates[0]);
  let chosen: Vec<(&'static str, &'static str)> = tpl
    .variables
    .iter()
    .map(|var| {
      let value = var.options.choose(rng).copied().unwrap_or(var.options[0]);
      (var.name, value)
    })
    .collect();
  let text = fill_template(tpl.pattern, &chosen);
  let must_have = tpl
    .must_have
    .resolve(&chosen)
    .iter()
    .map(|s| s.to_string())
    .collect();
  let bonus = tpl.bonus.iter().map(|s| s.to_string()).collect();
  GeneratedQuestion {
    id: Uuid::new_v4().to_string(),
    topic,
    difficulty,
    text,
    must_have,
    bonus,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn seeded() -> QuestionEngine<StdRng> {
    QuestionEngine::from_rng(StdRng::seed_from_u64(7))
  }

  #[test]
  fn generated_text_has_no_unfilled_placeholders() {
    let mut engine = seeded();
    for _ in 0..50 {
      let q = engine
        .generate("s1", Topic::Dsa, Difficulty::Easy)
        .expect("catalog has dsa/easy templates");
      assert!(!q.text.contains('{'), "unfilled placeholder in: {}", q.text);
      assert!(!q.must_have.is_empty());
      assert!(!q.bonus.is_empty());
    }
  }

  #[test]
  fn questions_are_unique_within_a_session() {
    let mut engine = seeded();
    let mut seen = HashSet::new();
    for _ in 0..20 {
      let q = engine
        .generate("s1", Topic::Os, Difficulty::Medium)
        .expect("catalog has os/medium templates");
      assert!(seen.insert(q.text.clone()), "duplicate within session: {}", q.text);
    }
    assert_eq!(engine.count("s1"), 20);
  }

  #[test]
  fn sessions_do_not_share_uniqueness_state() {
    let mut engine = seeded();
    engine.generate("a", Topic::Cn, Difficulty::Easy).unwrap();
    assert_eq!(engine.count("a"), 1);
    assert_eq!(engine.count("b"), 0);
  }

  #[test]
  fn clear_is_idempotent_and_resets_the_count() {
    let mut engine = seeded();
    engine.generate("s1", Topic::Python, Difficulty::Hard).unwrap();
    assert_eq!(engine.count("s1"), 1);
    engine.clear("s1");
    engine.clear("s1");
    assert_eq!(engine.count("s1"), 0);
  }

  #[test]
  fn empty_difficulty_falls_back_in_fixed_order() {
    static ONLY_HARD: &[Template] = &[Template {
      pattern: "What is {x}?",
      variables: &[crate::catalog::Variable { name: "x", options: &["recursion"] }],
      must_have: crate::catalog::MustHave::Fixed(&["base case"]),
      bonus: &["stack"],
    }];
    let mut engine = seeded();
    let q = engine
      .generate_from("s1", Topic::Dsa, Difficulty::Easy, |d| {
        if d == Difficulty::Hard { ONLY_HARD } else { &[] }
      })
      .expect("hard list is non-empty");
    assert_eq!(q.difficulty, Difficulty::Hard);
    assert_eq!(q.text, "What is recursion?");
  }

  #[test]
  fn no_templates_anywhere_yields_none() {
    let mut engine = seeded();
    let q = engine.generate_from("s1", Topic::Dsa, Difficulty::Medium, |_| &[]);
    assert!(q.is_none());
  }

  #[test]
  fn exhausted_template_space_serves_a_duplicate() {
    static SINGLE: &[Template] = &[Template {
      pattern: "Define {x}.",
      variables: &[crate::catalog::Variable { name: "x", options: &["a stack"] }],
      must_have: crate::catalog::MustHave::Fixed(&["lifo"]),
      bonus: &["push pop"],
    }];
    let mut engine = seeded();
    let first = engine
      .generate_from("s1", Topic::Dsa, Difficulty::Easy, |_| SINGLE)
      .unwrap();
    let second = engine
      .generate_from("s1", Topic::Dsa, Difficulty::Easy, |_| SINGLE)
      .unwrap();
    assert_eq!(first.text, second.text);
    assert_ne!(first.id, second.id);
    assert_eq!(engine.count("s1"), 1);
  }
}
