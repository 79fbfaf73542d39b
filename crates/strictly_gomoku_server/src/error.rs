//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strictly_gomoku::{GomokuError, GomokuErrorKind};
use tracing::{error, warn};

/// Error returned by API handlers.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// The game rejected the request.
    #[display("{}", _0)]
    Game(GomokuError),

    /// A previous request panicked while holding the game lock.
    #[display("Game state is unavailable")]
    #[from(ignore)]
    Poisoned,
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind, absent for internal failures.
    pub kind: Option<GomokuErrorKind>,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Game(err) => {
                warn!(kind = %err.kind(), %message, "Request rejected");
                let body = ErrorBody {
                    kind: Some(err.kind()),
                    message,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Poisoned => {
                error!("Game lock poisoned");
                let body = ErrorBody {
                    kind: None,
                    message,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
