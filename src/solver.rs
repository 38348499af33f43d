//! Exhaustive minimax search for perfect play.
//!
//! X maximizes the terminal utility (+1 for an X win) and O minimizes it
//! (-1 for an O win); a draw is worth 0. The game tree is small enough
//! (at most 9! playouts) that full-depth recursion needs no memoization;
//! the only shortcut is cutting a branch as soon as it reaches the extremal
//! value for the side to move, which no later sibling can improve upon.

use crate::board::{Action, Board, Player};

/// Result of evaluating a position: the minimax value and a move achieving
/// it (`None` at terminal positions, where no move exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i32,
    pub best: Option<Action>,
}

/// Returns the optimal action for the current player, or `None` when the
/// game is over.
///
/// Among equally good actions the first one in row-major enumeration order
/// is kept.
///
/// # Examples
///
/// ```
/// use ttt_oracle::{Action, Board, solver};
///
/// // X completes the top row rather than letting O finish the middle one
/// let board = Board::from_string("XX.OO....").unwrap();
/// assert_eq!(solver::optimal_move(&board), Some(Action::new(0, 2)));
/// ```
pub fn optimal_move(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    evaluate(board).best
}

/// Full-depth minimax evaluation of a position from the perspective of the
/// player to move.
pub fn evaluate(board: &Board) -> SearchOutcome {
    match board.current_player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// All minimax-equivalent best actions, in row-major order.
///
/// Empty exactly when the position is terminal.
pub fn optimal_moves(board: &Board) -> Vec<Action> {
    if board.is_terminal() {
        return Vec::new();
    }

    let scored: Vec<(Action, i32)> = board
        .available_actions()
        .into_iter()
        .map(|action| {
            let next = board
                .apply(action)
                .expect("available actions are always legal");
            (action, evaluate(&next).value)
        })
        .collect();

    let best_value = match board.current_player() {
        Player::X => scored.iter().map(|&(_, value)| value).max(),
        Player::O => scored.iter().map(|&(_, value)| value).min(),
    }
    .unwrap_or(0);

    scored
        .into_iter()
        .filter(|&(_, value)| value == best_value)
        .map(|(action, _)| action)
        .collect()
}

fn max_value(board: &Board) -> SearchOutcome {
    if board.is_terminal() {
        return SearchOutcome {
            value: board.utility(),
            best: None,
        };
    }

    let mut value = i32::MIN;
    let mut best = None;

    for action in board.available_actions() {
        let next = board
            .apply(action)
            .expect("available actions are always legal");
        let reply = min_value(&next);

        if reply.value > value {
            value = reply.value;
            best = Some(action);
            if value == 1 {
                // A guaranteed win cannot be improved upon
                break;
            }
        }
    }

    SearchOutcome { value, best }
}

fn min_value(board: &Board) -> SearchOutcome {
    if board.is_terminal() {
        return SearchOutcome {
            value: board.utility(),
            best: None,
        };
    }

    let mut value = i32::MAX;
    let mut best = None;

    for action in board.available_actions() {
        let next = board
            .apply(action)
            .expect("available actions are always legal");
        let reply = max_value(&next);

        if reply.value < value {
            value = reply.value;
            best = Some(action);
            if value == -1 {
                // A guaranteed win cannot be improved upon
                break;
            }
        }
    }

    SearchOutcome { value, best }
}
