//! Strictly Gomoku server library - REST host for a single game
//!
//! Exposes the engine's three operations (submit a move, read status,
//! restart) over HTTP with JSON bodies.
//!
//! # Example
//!
//! ```no_run
//! use strictly_gomoku_server::{ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(config.game().build()?);
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;

pub use api::{AppState, PlaceStoneRequest, StatusDto, router};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
