//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe rules with an immutable board value type
//! - Exhaustive minimax search for the game-theoretically optimal move
//! - Board parsing, encoding, and reachability validation
//! - Game records with move history
//!
//! The engine is pure: every transition produces a new [`Board`] value, the
//! player to move is derived from the mark counts, and the search has no
//! shared state, so independent callers need no synchronization.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod solver;
pub mod validation;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use solver::{SearchOutcome, evaluate, optimal_move, optimal_moves};
