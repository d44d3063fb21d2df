//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::logic::{self, ServiceError};
use crate::protocol::{result_out, to_out, ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "prepmate_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "prepmate_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target = "prepmate_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "prepmate_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => {
        let _ = socket.send(Message::Pong(payload)).await;
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "prepmate_backend", "WebSocket disconnected");
}

fn error_message(e: ServiceError) -> ServerWsMessage {
  ServerWsMessage::Error { message: e.to_string() }
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::StartInterview { user_id, topic, difficulty } => {
      match logic::start_interview(state, &user_id, topic.as_deref(), difficulty.as_deref()).await {
        Ok((session_id, question)) => {
          tracing::info!(target: "interview", %session_id, id = %question.id, "WS interview started");
          ServerWsMessage::InterviewStarted { session_id, question: to_out(&question) }
        }
        Err(e) => error_message(e),
      }
    }

    ClientWsMessage::NextQuestion { session_id } => {
      match logic::next_question(state, &session_id).await {
        Ok(question) => {
          tracing::info!(target: "interview", %session_id, id = %question.id, "WS question served");
          ServerWsMessage::Question { question: to_out(&question) }
        }
        Err(e) => error_message(e),
      }
    }

    ClientWsMessage::SubmitAnswer { session_id, question_id, answer } => {
      match logic::submit_answer(state, &session_id, &question_id, &answer).await {
        Ok(outcome) => {
          tracing::info!(target: "interview", %session_id, score = outcome.result.score,
            "WS answer evaluated");
          ServerWsMessage::AnswerResult { result: result_out(outcome) }
        }
        Err(e) => error_message(e),
      }
    }

    ClientWsMessage::EndInterview { session_id } => {
      match logic::end_interview(state, &session_id).await {
        Ok(summary) => {
          tracing::info!(target: "interview", %session_id, overall = summary.overall_score,
            "WS interview ended");
          ServerWsMessage::Summary { summary }
        }
        Err(e) => error_message(e),
      }
    }
  }
}
