//! Command-line interface for strictly_gomoku.

use clap::{Parser, Subcommand};

/// Strictly Gomoku - (m,n,k) five-in-a-row rules engine
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Gomoku rules engine with a REST interface", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Board rows (overrides config)
        #[arg(long)]
        rows: Option<i32>,

        /// Board columns (overrides config)
        #[arg(long)]
        columns: Option<i32>,

        /// Stones in a row needed to win (overrides config)
        #[arg(long)]
        win_length: Option<i32>,
    },

    /// Print the configured starting board and phase
    Show {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
