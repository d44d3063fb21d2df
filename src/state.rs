//! Application state: the question engine, the interview session store, and
//! the per-user history of finished interviews.
//!
//! All stores are in-memory. Sessions live until `end_interview` removes them;
//! history accumulates per user id for the lifetime of the process.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument};

use crate::config::{load_config_from_env, AppConfig};
use crate::domain::{Difficulty, InterviewSession, InterviewSummary, Topic};
use crate::generator::QuestionEngine;

#[derive(Clone)]
pub struct AppState {
  /// The engine owns the rng and the per-session uniqueness sets, so all
  /// generation goes through one lock.
  pub engine: Arc<Mutex<QuestionEngine>>,
  pub sessions: Arc<RwLock<HashMap<String, InterviewSession>>>,
  pub history: Arc<RwLock<HashMap<String, Vec<InterviewSummary>>>>,
  pub config: AppConfig,
}

impl AppState {
  /// Build state from env: load config and report the catalog inventory.
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Self {
    let config = load_config_from_env().unwrap_or_default();

    for topic in Topic::ALL {
      let counts: Vec<usize> = Difficulty::ALL
        .iter()
        .map(|d| crate::catalog::templates(topic, *d).len())
        .collect();
      info!(target: "interview", %topic, easy = counts[0], medium = counts[1], hard = counts[2],
        "Startup template inventory");
    }
    info!(target: "prepmate_backend",
      default_topic = %config.session.default_topic,
      default_difficulty = %config.session.default_difficulty,
      "Session defaults");

    Self {
      engine: Arc::new(Mutex::new(QuestionEngine::new())),
      sessions: Arc::new(RwLock::new(HashMap::new())),
      history: Arc::new(RwLock::new(HashMap::new())),
      config,
    }
  }

  /// Read-only snapshot of a session by id.
  pub async fn get_session(&self, session_id: &str) -> Option<InterviewSession> {
    self.sessions.read().await.get(session_id).cloned()
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}
