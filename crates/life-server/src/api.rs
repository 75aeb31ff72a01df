//! API handlers for the server.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use life_board::{parse_seed, render, Board, BoardSnapshot, Simulation};
use life_core::{ServerConfig, Size};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/board/tick", post(tick_board))
        .route("/api/board/parse", post(parse_board))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct TickRequest {
    generation: u64,
    size: Size,
    cells: Vec<String>,
    runs: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickResponse {
    generation: u64,
    size: Size,
    cells: Vec<String>,
    board_string: String,
}

impl From<&Board> for TickResponse {
    fn from(board: &Board) -> Self {
        let snapshot = BoardSnapshot::from(board);
        Self {
            generation: snapshot.generation,
            size: snapshot.size,
            cells: snapshot.cells,
            board_string: render(board),
        }
    }
}

/// Advance a board by `runs` generations
#[instrument(skip_all)]
pub async fn tick_board(
    State(state): State<AppState>,
    Json(req): Json<TickRequest>,
) -> Result<Json<TickResponse>, ApiError> {
    info!(
        generation = req.generation,
        size = %req.size,
        runs = req.runs,
        "Tick requested"
    );

    if req.runs > state.config.max_runs {
        warn!(runs = req.runs, max_runs = state.config.max_runs, "Rejected tick request");
        return Err(ApiError::BadRequest(format!(
            "runs must be at most {}, got {}",
            state.config.max_runs, req.runs
        )));
    }

    if req.generation.checked_add(u64::from(req.runs)).is_none() {
        warn!(generation = req.generation, runs = req.runs, "Rejected tick request");
        return Err(ApiError::BadRequest(format!(
            "generation {} cannot advance by {} runs",
            req.generation, req.runs
        )));
    }

    let board = Board::try_from(BoardSnapshot {
        generation: req.generation,
        size: req.size,
        cells: req.cells,
    })?;

    let mut simulation = Simulation::new(board);
    simulation.run(req.runs);
    let board = simulation.into_board();

    info!(
        generation = board.generation(),
        live_cells = board.live_cells(),
        "Tick completed"
    );

    Ok(Json(TickResponse::from(&board)))
}

/// Parse seed text into its JSON form
#[instrument(skip_all)]
pub async fn parse_board(body: String) -> Result<Json<BoardSnapshot>, ApiError> {
    let board = parse_seed(&body)?;
    Ok(Json(BoardSnapshot::from(&board)))
}

// Error handling
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}

impl From<life_core::Error> for ApiError {
    fn from(err: life_core::Error) -> Self {
        match err {
            life_core::Error::InvalidDimensions(_)
            | life_core::Error::Parse(_)
            | life_core::Error::Validation(_) => {
                warn!("Rejected input: {}", err);
                ApiError::BadRequest(err.to_string())
            }
            other => {
                error!("Core error: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(ServerConfig {
            max_runs: 100,
            ..Default::default()
        }))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn blinker(runs: u32) -> Value {
        json!({
            "generation": 0,
            "size": { "rows": 5, "cols": 5 },
            "cells": [".....", "..*..", "..*..", "..*..", "....."],
            "runs": runs,
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "healthy");
    }

    #[tokio::test]
    async fn test_tick_once() {
        let (status, body) = send(post_json("/api/board/tick", blinker(1))).await;
        assert_eq!(status, StatusCode::OK);

        let response: TickResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.generation, 1);
        assert_eq!(response.size, Size::new(5, 5));
        assert_eq!(response.cells, vec![".....", ".....", ".***.", ".....", "....."]);
        assert_eq!(
            response.board_string,
            "Generation 1\n5 5\n.....\n.....\n.***.\n.....\n.....\n"
        );
    }

    #[tokio::test]
    async fn test_tick_matches_manual_runs() {
        let seed = parse_seed("Generation 0\n5 5\n.....\n..*..\n..*..\n..*..\n.....\n").unwrap();
        let manual = seed.tick().tick().tick();

        let (status, body) = send(post_json("/api/board/tick", blinker(3))).await;
        assert_eq!(status, StatusCode::OK);

        let response: TickResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.generation, 3);
        assert_eq!(response.board_string, render(&manual));
    }

    #[tokio::test]
    async fn test_response_field_names() {
        let (_, body) = send(post_json("/api/board/tick", blinker(0))).await;
        let value: Value = serde_json::from_slice(&body).unwrap();

        assert!(value.get("boardString").is_some());
        assert_eq!(value["generation"], 0);
        assert_eq!(value["size"]["rows"], 5);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_bad_request() {
        let body = json!({
            "generation": 0,
            "size": { "rows": 3, "cols": 3 },
            "cells": ["...", "..."],
            "runs": 1,
        });
        let (status, _) = send(post_json("/api/board/tick", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_too_many_runs_is_bad_request() {
        let (status, _) = send(post_json("/api/board/tick", blinker(101))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generation_overflow_is_bad_request() {
        let mut body = blinker(2);
        body["generation"] = json!(u64::MAX - 1);
        let (status, _) = send(post_json("/api/board/tick", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = blinker(1);
        body["generation"] = json!(u64::MAX - 1);
        let (status, body) = send(post_json("/api/board/tick", body)).await;
        assert_eq!(status, StatusCode::OK);
        let response: TickResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.generation, u64::MAX);
    }

    #[tokio::test]
    async fn test_parse_endpoint() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/board/parse")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("Generation 2\n2 2\n*.\n.*\n"))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let snapshot: BoardSnapshot = serde_json::from_slice(&body).unwrap();
        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.cells, vec!["*.", ".*"]);
    }

    #[tokio::test]
    async fn test_parse_endpoint_rejects_malformed_seed() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/board/parse")
            .body(Body::from("Gen 2\n"))
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
