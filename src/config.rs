//! Loading service configuration (session defaults) from TOML.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Difficulty, Topic};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub session: SessionConfig,
}

/// Defaults applied when a start request leaves topic or difficulty out.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionConfig {
  #[serde(default = "default_topic")]
  pub default_topic: Topic,
  #[serde(default = "default_difficulty")]
  pub default_difficulty: Difficulty,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      default_topic: default_topic(),
      default_difficulty: default_difficulty(),
    }
  }
}

fn default_topic() -> Topic {
  Topic::Dsa
}

fn default_difficulty() -> Difficulty {
  Difficulty::Easy
}

/// Attempt to load `AppConfig` from PREPMATE_CONFIG_PATH. On any parsing/IO
/// error, returns None and the caller falls back to defaults.
pub fn load_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("PREPMATE_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "prepmate_backend", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "prepmate_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "prepmate_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_dsa_easy() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.session.default_topic, Topic::Dsa);
    assert_eq!(cfg.session.default_difficulty, Difficulty::Easy);
  }

  #[test]
  fn partial_toml_fills_in_defaults() {
    let cfg: AppConfig = toml::from_str("[session]\ndefault_topic = \"cn\"\n").unwrap();
    assert_eq!(cfg.session.default_topic, Topic::Cn);
    assert_eq!(cfg.session.default_difficulty, Difficulty::Easy);
  }

  #[test]
  fn empty_toml_is_fully_defaulted() {
    let cfg: AppConfig = toml::from_str("").unwrap();
    assert_eq!(cfg.session.default_difficulty, Difficulty::Easy);
  }
}
