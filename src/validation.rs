//! Board reachability checks and state-space enumeration

use std::collections::HashSet;

use crate::board::{Board, Player};
use crate::lines::WINNING_LINES;

impl Board {
    /// Check whether the position could arise from alternating legal play
    /// with X moving first.
    pub fn is_valid(&self) -> bool {
        let (x_count, o_count) = self.counts();

        // X opens, so X is always equal to O or ahead by exactly one
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // A winner must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        // Multiple winning lines must have been completed by a single move,
        // so they share a cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all complete lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.mark();
        let complete: Vec<&[(usize, usize); 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(row, col)| self.get(row, col) == target))
            .collect();

        if complete.len() < 2 {
            return true;
        }

        (0..3).any(|row| (0..3).any(|col| complete.iter().all(|line| line.contains(&(row, col)))))
    }

    /// Enumerate every position reachable by legal play from the empty
    /// board, terminal positions included.
    pub fn reachable_states() -> Vec<Board> {
        let mut states = Vec::new();
        let mut stack = vec![Board::new()];
        let mut seen = HashSet::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board.encode()) {
                continue;
            }

            if !board.is_terminal() {
                for action in board.available_actions() {
                    if let Ok(next) = board.apply(action) {
                        stack.push(next);
                    }
                }
            }

            states.push(board);
        }

        states
    }
}
