//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use crate::board::{Action, Cell, Player};

/// The 8 winning lines on the 3x3 board: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The owner of the first complete line, if any.
    ///
    /// In a position reachable by legal play at most one player can hold a
    /// complete line, so the scan order does not affect the result.
    pub fn winner(cells: &[[Cell; 3]; 3]) -> Option<Player> {
        for line in &WINNING_LINES {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            let mark = cells[r0][c0];
            if mark != Cell::Empty && mark == cells[r1][c1] && mark == cells[r2][c2] {
                return mark.player();
            }
        }
        None
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| cells[row][col] == target))
    }

    /// Find all actions that would immediately win for the player
    pub fn winning_moves(cells: &[[Cell; 3]; 3], player: Player) -> HashSet<Action> {
        let mut moves = HashSet::new();
        for line in &WINNING_LINES {
            if let Some(action) = Self::winning_move_in_line(cells, player, line) {
                moves.insert(action);
            }
        }
        moves
    }

    /// Check if a player has an immediate winning move available (2 in a line with 1 empty)
    pub fn has_immediate_win(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    /// Find the winning action in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Cell; 3]; 3],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Action> {
        let target = player.mark();
        let mut count = 0;
        let mut empty = None;

        for &(row, col) in line {
            match cells[row][col] {
                Cell::Empty => {
                    if empty.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty = Some(Action::new(row, col));
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty } else { None }
    }
}
