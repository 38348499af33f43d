//! ttt-oracle CLI - perfect-play analysis for Tic-Tac-Toe
//!
//! This CLI provides a unified interface for:
//! - Solving positions (optimal move and minimax value)
//! - Exporting the full optimal policy as JSON
//! - Inspecting the reachable state space

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-oracle")]
#[command(version, about = "Perfect-play analysis for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move and value for a position
    Solve(ttt_oracle::cli::solve::SolveArgs),

    /// Enumerate the reachable state space and report statistics
    Tree(ttt_oracle::cli::tree::TreeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => ttt_oracle::cli::solve::execute(args),
        Commands::Tree(args) => ttt_oracle::cli::tree::execute(args),
    }
}
