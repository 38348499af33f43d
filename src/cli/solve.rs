//! Optimal-move analysis for positions
//!
//! This module computes and reports the minimax-optimal move for a single
//! position, and can export the full optimal policy for every reachable
//! position.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::{Action, Board};
use crate::solver;

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board given as 9 cells in row-major order ('X', 'O', '.'), e.g. "XX.OO...."
    #[arg(long)]
    state: Option<String>,

    /// Show every minimax-equivalent move instead of just the first
    #[arg(long)]
    all: bool,

    /// Export the optimal policy for every reachable position to a JSON file
    #[arg(long)]
    export: Option<PathBuf>,
}

/// Compute and report optimal moves
pub fn execute(args: SolveArgs) -> Result<()> {
    if let Some(s) = &args.state {
        let board = Board::from_string(s)?;
        println!("=== Optimal Analysis for Custom Position ===\n");
        analyze_position(&board, "Custom position", args.all);
    } else {
        println!("=== Optimal Policy Analysis ===");
        println!("Showing optimal moves for key positions:\n");

        let empty = Board::new();
        analyze_position(&empty, "Empty board", args.all);

        let center = Board::from_string("....X....")?;
        analyze_position(&center, "Center taken by X", args.all);

        let corner = Board::from_string("X........")?;
        analyze_position(&corner, "Corner taken by X", args.all);
    }

    if let Some(path) = &args.export {
        export_policy(path)?;
        println!("\nOptimal policy exported to: {}", path.display());
    }

    Ok(())
}

/// Report the optimal move(s) for a single position
fn analyze_position(board: &Board, description: &str, all: bool) {
    println!("{description}:");
    println!("{board}");

    if board.is_terminal() {
        println!("  (position is terminal)\n");
        return;
    }

    let to_move = board.current_player();
    let outcome = solver::evaluate(board);
    println!("To move: {to_move:?}, minimax value: {}", outcome.value);

    if all {
        println!("Optimal moves (all minimax-equivalent):");
        for action in solver::optimal_moves(board) {
            println!("  - {action}");
        }
        println!();
    } else {
        let best = outcome.best.expect("non-terminal position has a move");
        println!("Optimal move: {best}\n");
    }
}

#[derive(Serialize)]
struct PolicyExport {
    description: &'static str,
    total_states: usize,
    policy: HashMap<String, PolicyEntry>,
}

#[derive(Serialize)]
struct PolicyEntry {
    value: i32,
    best_moves: Vec<Action>,
}

/// Export the optimal policy for every reachable non-terminal position to a
/// JSON file
fn export_policy(path: &PathBuf) -> Result<()> {
    println!("\nComputing optimal policy for all reachable positions...");

    let mut policy = HashMap::new();
    for board in Board::reachable_states() {
        if board.is_terminal() {
            continue;
        }

        policy.insert(
            board.encode(),
            PolicyEntry {
                value: solver::evaluate(&board).value,
                best_moves: solver::optimal_moves(&board),
            },
        );
    }

    println!("  Total policy entries: {}", policy.len());

    let export = PolicyExport {
        description: "Optimal (minimax) policy for Tic-Tac-Toe",
        total_states: policy.len(),
        policy,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    Ok(())
}
