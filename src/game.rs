//! Game records with move history

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// A pure value type: the current position is replayed from the initial
/// board and the move list, and the outcome is derived when the final move
/// lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            initial: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the game already has an outcome, or
    /// [`Error::InvalidAction`] if the action is not playable.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.current_player();
        let next = current.apply(action)?;

        self.moves.push(Move { action, player });

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if any move in the history is invalid for the state
    /// it was recorded against. This indicates corrupted game data.
    fn replay_until(&self, end: usize) -> Result<Board> {
        let mut state = self.initial;
        for m in self.moves.iter().take(end) {
            state = state.apply(m.action)?;
        }
        Ok(state)
    }

    /// Get the current board state
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded history is not replayable.
    pub fn current_state(&self) -> Result<Board> {
        self.replay_until(self.moves.len())
    }

    /// Get the sequence of board states, from the initial board to the
    /// current one
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded history is not replayable.
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);

        for i in 1..=self.moves.len() {
            states.push(self.replay_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
