use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tictactoe_common::games::tictactoe::{parse_position, Mark, MoveError, MoveReport, ResetOptions};
use tictactoe_common::{log, log_error};

use crate::game_session::{GameSession, SessionSnapshot, SharedGameSession};

#[derive(Clone)]
pub struct WebServerState {
    pub session: SharedGameSession,
}

impl WebServerState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub game_state: SessionSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl From<MoveReport<SessionSnapshot>> for ApiResponse {
    fn from(report: MoveReport<SessionSnapshot>) -> Self {
        Self {
            success: report.accepted,
            game_state: report.state,
            message: report.reason,
            error: report.error_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub game_active: bool,
    pub current_player: Mark,
}

pub fn make_app(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/make_move", post(make_move))
        .route("/reset_game", post(reset_game))
        .route("/get_game_state", get(get_game_state))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(addr: SocketAddr, state: WebServerState) -> Result<(), String> {
    let app = make_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind web server address {}: {}", addr, e))?;

    log!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log!("Shutdown signal received"),
        Err(e) => {
            log_error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

async fn make_move(State(state): State<WebServerState>, body: Bytes) -> Json<ApiResponse> {
    let position = parse_move_request(&body);
    log!("Received move request: {:?}", position);

    let mut session = state.session.lock().await;
    let report = match position {
        Ok(position) => session.apply_move(position),
        Err(error) => session.reject(&error),
    };

    if let Some(reason) = &report.reason {
        log!("Move rejected: {}", reason);
    }

    Json(report.into())
}

async fn reset_game(State(state): State<WebServerState>, body: Bytes) -> Json<ApiResponse> {
    let options = parse_reset_request(&body);
    log!(
        "Received reset request: difficulty {}, human {}",
        options.difficulty, options.human_mark
    );

    let mut session = state.session.lock().await;
    let snapshot = session.reset(options);

    Json(ApiResponse {
        success: true,
        game_state: snapshot,
        message: None,
        error: None,
    })
}

async fn get_game_state(State(state): State<WebServerState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(session.snapshot())
}

async fn health_check(State(state): State<WebServerState>) -> Json<HealthResponse> {
    let session = state.session.lock().await;
    Json(HealthResponse {
        status: "healthy",
        game_active: session.is_active(),
        current_player: session.current_player(),
    })
}

/// Accepts `{"position": 4}` or `{"position": "4"}`; anything else is an
/// invalid position.
pub fn parse_move_request(body: &[u8]) -> Result<usize, MoveError> {
    let request: Value = serde_json::from_slice(body)
        .map_err(|_| MoveError::InvalidPosition("malformed request body".to_string()))?;

    let raw = request
        .get("position")
        .ok_or_else(|| MoveError::InvalidPosition("missing position".to_string()))?;

    let number = match raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    match number {
        Some(number) => parse_position(number),
        None => Err(MoveError::InvalidPosition(raw.to_string())),
    }
}

/// Missing or malformed fields fall back to medium difficulty and a human `X`.
pub fn parse_reset_request(body: &[u8]) -> ResetOptions {
    let request: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let difficulty = request.get("difficulty").and_then(Value::as_str);
    let human_symbol = request.get("human_symbol").and_then(Value::as_str);
    ResetOptions::from_raw(difficulty, human_symbol)
}
