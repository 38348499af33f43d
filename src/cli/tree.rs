//! Reachable state-space statistics

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::{Board, Player};
use crate::cli::output::{format_number, print_kv, print_section};

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Emit the statistics as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TreeStats {
    total: usize,
    in_progress: usize,
    terminal: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Enumerate the reachable state space and report statistics
pub fn execute(args: TreeArgs) -> Result<()> {
    let states = Board::reachable_states();

    let mut stats = TreeStats {
        total: states.len(),
        in_progress: 0,
        terminal: 0,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };

    for board in &states {
        if !board.is_terminal() {
            stats.in_progress += 1;
            continue;
        }

        stats.terminal += 1;
        match board.winner() {
            Some(Player::X) => stats.x_wins += 1,
            Some(Player::O) => stats.o_wins += 1,
            None => stats.draws += 1,
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_section("Tic-Tac-Toe state space");
    print_kv("Reachable positions", &format_number(stats.total));
    print_kv("In progress", &format_number(stats.in_progress));
    print_kv("Terminal", &format_number(stats.terminal));
    print_kv("X wins", &format_number(stats.x_wins));
    print_kv("O wins", &format_number(stats.o_wins));
    print_kv("Draws", &format_number(stats.draws));

    Ok(())
}
