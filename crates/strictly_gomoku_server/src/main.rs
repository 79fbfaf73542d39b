//! Strictly Gomoku - CLI entry point

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_gomoku_server::{ServerConfig, router};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            rows,
            columns,
            win_length,
        } => {
            let config = ServerConfig::load(config.as_deref())?
                .with_overrides(host, port, rows, columns, win_length);
            run_server(config).await
        }
        Command::Show { config } => show(ServerConfig::load(config.as_deref())?),
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
async fn run_server(config: ServerConfig) -> Result<()> {
    let game = config.game().build()?;
    info!(
        rows = game.board().rows(),
        columns = game.board().columns(),
        win_length = game.board().win_length(),
        phase = %game.phase(),
        "Starting Strictly Gomoku server"
    );

    let app = router(game);
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/api/gomoku/status", config.host(), config.port());

    axum::serve(listener, app).await?;
    Ok(())
}

/// Print the starting board
fn show(config: ServerConfig) -> Result<()> {
    let game = config.game().build()?;
    print!("{}", game.board());
    println!("{}", game.phase());
    Ok(())
}
