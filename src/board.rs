//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, or `None` for an empty cell
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places on the board
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target: row and column on the 3x3 grid, each in `0..3`.
///
/// An action is only meaningful relative to a specific [`Board`]; whether it
/// is playable depends on the cell being empty there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 Tic-Tac-Toe board.
///
/// This is an immutable value type: every transition ([`Board::apply`])
/// returns a new board and leaves the original untouched. The type implements
/// `Copy` since it is only 9 bytes.
///
/// Whose turn it is is never stored; it is derived from the mark counts (X
/// moves first, so X is to move whenever the counts are equal). See
/// [`Board::current_player`].
///
/// # Examples
///
/// ```
/// use ttt_oracle::{Action, Board, Cell, Player};
///
/// let board = Board::new();
/// assert_eq!(board.current_player(), Player::X);
///
/// let board = board.apply(Action::new(1, 1)).unwrap();
/// assert_eq!(board.get(1, 1), Cell::X);
/// assert_eq!(board.current_player(), Player::O);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Construct a board directly from cells, without reachability checks.
    ///
    /// Useful for setting up analysis positions; combine with
    /// [`Board::is_valid`] to classify the result.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    /// The raw cell grid, row-major
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Get the cell at the given coordinates.
    ///
    /// Panics if `row` or `col` is out of range; use [`Board::apply`] for
    /// fallible coordinate handling.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if the cell at the given coordinates is empty.
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    pub(crate) fn counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for &cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => x_count += 1,
                Cell::O => o_count += 1,
                Cell::Empty => {}
            }
        }
        (x_count, o_count)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let (x_count, o_count) = self.counts();
        x_count + o_count
    }

    /// The player to move, derived from the mark counts.
    ///
    /// X moves first, so X is to move whenever the counts are equal
    /// (including on the empty board) and O whenever X is ahead by one.
    pub fn current_player(&self) -> Player {
        let (x_count, o_count) = self.counts();
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }

    /// All actions targeting an empty cell, in row-major order.
    ///
    /// The order is deterministic but not contractual; callers needing set
    /// semantics can rely on there being no duplicates. Empty on a full
    /// board.
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    actions.push(Action::new(row, col));
                }
            }
        }
        actions
    }

    /// Apply an action for the current player and return the resulting board.
    ///
    /// The target cell is set to the mark of [`Board::current_player`]. The
    /// original board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`](crate::Error::InvalidAction) if the
    /// coordinates are out of range or the target cell is occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> crate::Result<Board> {
        if action.row >= 3 || action.col >= 3 {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }

        if !self.is_empty(action.row, action.col) {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.current_player().mark();
        Ok(next)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The winner, if any line holds three identical marks
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (full board, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Game-theoretic value of a finished game: +1 for an X win, -1 for an
    /// O win, 0 for a draw.
    ///
    /// Only meaningful when [`Board::is_terminal`] holds. The function is
    /// total and returns 0 on an unfinished board, but callers must not rely
    /// on that value.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Create a board from a string of 9 cells in row-major order.
    ///
    /// Whitespace is filtered out; `.` marks an empty cell and `X`/`O` mark
    /// the players (lowercase accepted).
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 non-whitespace characters are
    /// present, if any character is not a valid cell, or if the piece counts
    /// could not arise from alternating play with X first.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Encode the board as a 9-character row-major string.
    ///
    /// Round-trips through [`Board::from_string`]; the player to move needs
    /// no encoding since it is derived from the cells.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&c| c.to_char())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for &cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.current_player(), Player::X);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_apply() {
        let board = Board::new();

        // Valid move
        let next = board.apply(Action::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Cell::X);
        assert_eq!(next.current_player(), Player::O);

        // The original board is unchanged
        assert_eq!(board.get(1, 1), Cell::Empty);

        // Move on an occupied cell
        let result = next.apply(Action::new(1, 1));
        assert!(matches!(
            result,
            Err(crate::Error::InvalidAction { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_apply_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.apply(Action::new(3, 0)),
            Err(crate::Error::InvalidAction { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.apply(Action::new(0, 7)),
            Err(crate::Error::InvalidAction { row: 0, col: 7 })
        ));
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        assert_eq!(board.current_player(), Player::X);

        board = board.apply(Action::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Player::O);

        board = board.apply(Action::new(0, 1)).unwrap();
        assert_eq!(board.current_player(), Player::X);

        board = board.apply(Action::new(0, 2)).unwrap();
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_available_actions() {
        let mut board = Board::new();
        assert_eq!(board.available_actions().len(), 9);

        board = board.apply(Action::new(1, 1)).unwrap();
        let actions = board.available_actions();
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&Action::new(1, 1)));
        assert!(actions.contains(&Action::new(0, 0)));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = Board::new();
        // X wins on the top row
        board = board.apply(Action::new(0, 0)).unwrap(); // X
        board = board.apply(Action::new(1, 0)).unwrap(); // O
        board = board.apply(Action::new(0, 1)).unwrap(); // X
        board = board.apply(Action::new(1, 1)).unwrap(); // O
        board = board.apply(Action::new(0, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = Board::new();
        // O wins on the middle column
        board = board.apply(Action::new(0, 0)).unwrap(); // X
        board = board.apply(Action::new(0, 1)).unwrap(); // O
        board = board.apply(Action::new(0, 2)).unwrap(); // X
        board = board.apply(Action::new(1, 1)).unwrap(); // O
        board = board.apply(Action::new(1, 2)).unwrap(); // X
        board = board.apply(Action::new(2, 1)).unwrap(); // O

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = Board::new();
        // X wins on the main diagonal
        board = board.apply(Action::new(0, 0)).unwrap(); // X
        board = board.apply(Action::new(0, 1)).unwrap(); // O
        board = board.apply(Action::new(1, 1)).unwrap(); // X
        board = board.apply(Action::new(0, 2)).unwrap(); // O
        board = board.apply(Action::new(2, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // Classic draw game
        board = board.apply(Action::new(0, 0)).unwrap(); // X
        board = board.apply(Action::new(0, 1)).unwrap(); // O
        board = board.apply(Action::new(0, 2)).unwrap(); // X
        board = board.apply(Action::new(1, 1)).unwrap(); // O
        board = board.apply(Action::new(1, 0)).unwrap(); // X
        board = board.apply(Action::new(2, 0)).unwrap(); // O
        board = board.apply(Action::new(1, 2)).unwrap(); // X
        board = board.apply(Action::new(2, 2)).unwrap(); // O
        board = board.apply(Action::new(2, 1)).unwrap(); // X

        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_initial_state_not_terminal() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0, 0), Cell::X);
        assert_eq!(board.get(0, 1), Cell::O);
        assert_eq!(board.get(0, 2), Cell::X);
        // Turn is derived from piece counts
        assert_eq!(board.current_player(), Player::O);

        // Too short
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));

        // Invalid character
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_from_string_rejects_impossible_counts() {
        // O cannot have moved first
        assert!(matches!(
            Board::from_string("O........"),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            })
        ));

        // X cannot be ahead by two
        assert!(matches!(
            Board::from_string("XX.X.O..."),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 1
            })
        ));
    }

    #[test]
    fn test_from_string_filters_whitespace() {
        let board = Board::from_string("XOX\n.O.\nX..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);

        let empty = Board::new();
        assert_eq!(empty.encode(), ".........");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }

    #[test]
    fn test_occupied_count() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.occupied_count(), 5);
        assert_eq!(Board::new().occupied_count(), 0);
    }
}
