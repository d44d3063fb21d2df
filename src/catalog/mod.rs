//! The static question template catalog.
//!
//! Topics resolve to per-difficulty template lists. Each template carries a
//! text pattern with `{placeholder}`s, the candidate values for each
//! placeholder, a must-have keyword derivation, and a fixed bonus keyword
//! list. All data lives in `&'static` tables, one file per topic; nothing
//! here is mutated after process start.

mod cn;
mod dbms;
mod dsa;
mod oops;
mod os;
mod python;
mod webdev;

use crate::domain::{Difficulty, Topic};

pub type KeywordSet = &'static [&'static str];

/// One placeholder and its ordered candidate fill values.
pub struct Variable {
  pub name: &'static str,
  pub options: KeywordSet,
}

/// How a template derives its must-have keywords from the selected values.
///
/// `ByVar` and `ByPair` are lookup tables keyed by the selected value (or by
/// the pair of values for two-placeholder comparisons); combinations the
/// table does not cover fall back to a generic, non-empty set.
pub enum MustHave {
  Fixed(KeywordSet),
  ByVar {
    var: &'static str,
    table: &'static [(&'static str, KeywordSet)],
    fallback: KeywordSet,
  },
  ByPair {
    vars: (&'static str, &'static str),
    table: &'static [((&'static str, &'static str), KeywordSet)],
    fallback: KeywordSet,
  },
}

impl MustHave {
  /// Resolve against the `(placeholder, selected value)` pairs chosen during
  /// synthesis. Always returns a non-empty set (the fallbacks guarantee it).
  pub fn resolve(&self, chosen: &[(&'static str, &'static str)]) -> KeywordSet {
    let value_of = |name: &str| {
      chosen
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
    };
    match self {
      MustHave::Fixed(set) => set,
      MustHave::ByVar { var, table, fallback } => value_of(var)
        .and_then(|v| table.iter().find(|(k, _)| *k == v))
        .map(|(_, set)| *set)
        .unwrap_or(fallback),
      MustHave::ByPair { vars: (a, b), table, fallback } => {
        match (value_of(a), value_of(b)) {
          (Some(va), Some(vb)) => table
            .iter()
            .find(|((ka, kb), _)| *ka == va && *kb == vb)
            .map(|(_, set)| *set)
            .unwrap_or(fallback),
          _ => fallback,
        }
      }
    }
  }
}

/// A parameterized question pattern plus keyword derivation rules.
pub struct Template {
  pub pattern: &'static str,
  pub variables: &'static [Variable],
  pub must_have: MustHave,
  pub bonus: KeywordSet,
}

/// Catalog lookup. Every (topic, difficulty) pair currently has a non-empty
/// list; callers still handle the empty case for the fallback path.
pub fn templates(topic: Topic, difficulty: Difficulty) -> &'static [Template] {
  let (easy, medium, hard) = match topic {
    Topic::Dsa => (dsa::EASY, dsa::MEDIUM, dsa::HARD),
    Topic::Os => (os::EASY, os::MEDIUM, os::HARD),
    Topic::Dbms => (dbms::EASY, dbms::MEDIUM, dbms::HARD),
    Topic::Cn => (cn::EASY, cn::MEDIUM, cn::HARD),
    Topic::Oops => (oops::EASY, oops::MEDIUM, oops::HARD),
    Topic::Python => (python::EASY, python::MEDIUM, python::HARD),
    Topic::Webdev => (webdev::EASY, webdev::MEDIUM, webdev::HARD),
  };
  match difficulty {
    Difficulty::Easy => easy,
    Difficulty::Medium => medium,
    Difficulty::Hard => hard,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn all_templates() -> Vec<(Topic, Difficulty, &'static Template)> {
    let mut out = Vec::new();
    for topic in Topic::ALL {
      for difficulty in Difficulty::ALL {
        for tpl in templates(topic, difficulty) {
          out.push((topic, difficulty, tpl));
        }
      }
    }
    out
  }

  /// Extract `{name}` placeholder tokens from a pattern.
  fn placeholders(pattern: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
      let tail = &rest[open + 1..];
      let close = tail.find('}').expect("unbalanced brace in pattern");
      out.push(&tail[..close]);
      rest = &tail[close + 1..];
    }
    out
  }

  #[test]
  fn every_topic_and_difficulty_has_templates() {
    for topic in Topic::ALL {
      for difficulty in Difficulty::ALL {
        assert!(
          !templates(topic, difficulty).is_empty(),
          "no templates for {topic}/{difficulty}"
        );
      }
    }
  }

  #[test]
  fn every_placeholder_has_a_variable_with_options() {
    for (topic, difficulty, tpl) in all_templates() {
      for name in placeholders(tpl.pattern) {
        let var = tpl
          .variables
          .iter()
          .find(|v| v.name == name)
          .unwrap_or_else(|| {
            panic!("{topic}/{difficulty}: placeholder {{{name}}} has no variable entry")
          });
        assert!(
          !var.options.is_empty(),
          "{topic}/{difficulty}: variable {name} has no candidate values"
        );
      }
    }
  }

  #[test]
  fn must_have_tables_are_well_formed() {
    for (topic, difficulty, tpl) in all_templates() {
      match &tpl.must_have {
        MustHave::Fixed(set) => {
          assert!(!set.is_empty(), "{topic}/{difficulty}: empty fixed must-have set");
        }
        MustHave::ByVar { var, table, fallback } => {
          assert!(!fallback.is_empty(), "{topic}/{difficulty}: empty fallback");
          let options = tpl
            .variables
            .iter()
            .find(|v| v.name == *var)
            .unwrap_or_else(|| panic!("{topic}/{difficulty}: must-have keyed by unknown var {var}"))
            .options;
          for (key, set) in *table {
            assert!(!set.is_empty(), "{topic}/{difficulty}: empty set for {key}");
            assert!(
              options.contains(key),
              "{topic}/{difficulty}: table key {key:?} is not a candidate value of {var}"
            );
          }
        }
        MustHave::ByPair { vars: (a, b), table, fallback } => {
          assert!(!fallback.is_empty(), "{topic}/{difficulty}: empty fallback");
          for name in [a, b] {
            assert!(
              tpl.variables.iter().any(|v| v.name == *name),
              "{topic}/{difficulty}: must-have keyed by unknown var {name}"
            );
          }
          for ((ka, kb), set) in *table {
            assert!(!set.is_empty(), "{topic}/{difficulty}: empty set for {ka}/{kb}");
          }
        }
      }
    }
  }

  #[test]
  fn resolve_prefers_table_hit_and_falls_back_otherwise() {
    let mh = MustHave::ByVar {
      var: "algorithm",
      table: &[("binary search", &["o(log n)", "sorted"])],
      fallback: &["complexity"],
    };
    assert_eq!(
      mh.resolve(&[("algorithm", "binary search")]),
      &["o(log n)", "sorted"]
    );
    assert_eq!(mh.resolve(&[("algorithm", "bogosort")]), &["complexity"]);
    assert_eq!(mh.resolve(&[]), &["complexity"]);
  }
}
