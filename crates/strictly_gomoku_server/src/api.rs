//! REST routes for one shared game.
//!
//! | method | path | success |
//! |---|---|---|
//! | `GET` | `/api/gomoku/status` | `200` + [`StatusDto`] |
//! | `POST` | `/api/gomoku/place-stone` | `201` + [`StatusDto`] |
//! | `POST` | `/api/gomoku/restart` | `201` + [`StatusDto`] |
//!
//! Rejected moves answer `422` with an [`ErrorBody`](crate::ErrorBody).

use crate::error::ApiError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use strictly_gomoku::{Coordinate, Game, Status};
use tracing::{debug, info, instrument};

/// Shared handle to the served game.
///
/// All handlers lock the same mutex, so moves are applied one at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    game: Arc<Mutex<Game>>,
}

impl AppState {
    /// Wraps a game for sharing between handlers.
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// Runs `f` with exclusive access to the game.
    ///
    /// The lock is released before returning, so callers never hold it
    /// across an `.await`.
    fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> T) -> Result<T, ApiError> {
        let mut game = self.game.lock().map_err(|_| ApiError::Poisoned)?;
        Ok(f(&mut game))
    }
}

/// Body of a place-stone request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceStoneRequest {
    /// Zero-based row.
    pub row: i32,
    /// Zero-based column.
    pub column: i32,
}

impl From<PlaceStoneRequest> for Coordinate {
    fn from(req: PlaceStoneRequest) -> Self {
        Coordinate::new(req.row, req.column)
    }
}

/// Game status as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    /// True once the game reached a win or a draw.
    pub has_game_ended: bool,
    /// Phase name, e.g. `"BlackToMove"`.
    pub current_state: String,
    /// Board rows using `_`, `X` and `O`.
    pub board_layout: Vec<String>,
}

impl From<Status> for StatusDto {
    fn from(status: Status) -> Self {
        Self {
            has_game_ended: *status.has_ended(),
            current_state: status.phase().to_string(),
            board_layout: status.board_rows().clone(),
        }
    }
}

/// Builds the router serving `game`.
pub fn router(game: Game) -> Router {
    Router::new()
        .route("/api/gomoku/status", get(get_status))
        .route("/api/gomoku/place-stone", post(place_stone))
        .route("/api/gomoku/restart", post(restart))
        .with_state(AppState::new(game))
}

#[instrument(skip(state))]
async fn get_status(State(state): State<AppState>) -> Result<Json<StatusDto>, ApiError> {
    let status = state.with_game(|game| game.status())?;
    debug!(phase = %status.phase(), "Status requested");
    Ok(Json(status.into()))
}

#[instrument(skip(state), fields(row = req.row, column = req.column))]
async fn place_stone(
    State(state): State<AppState>,
    Json(req): Json<PlaceStoneRequest>,
) -> Result<(StatusCode, Json<StatusDto>), ApiError> {
    let status = state.with_game(|game| game.submit_move(req.into()))??;
    info!(phase = %status.phase(), "Stone placed");
    Ok((StatusCode::CREATED, Json(status.into())))
}

#[instrument(skip(state))]
async fn restart(State(state): State<AppState>) -> Result<(StatusCode, Json<StatusDto>), ApiError> {
    let status = state.with_game(|game| game.restart())?;
    info!(phase = %status.phase(), "Game restarted via API");
    Ok((StatusCode::CREATED, Json(status.into())))
}
