//! Core domain types for the mill game.

use super::action::Move;
use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Black moves first and is scored as player 1.
    #[display("black")]
    Black,
    /// White moves second; the automated opponent always plays White.
    #[display("white")]
    White,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }
}

/// A node on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty node.
    Empty,
    /// Node occupied by a side's piece.
    Occupied(Side),
}

/// Number of pieces each side owns for the whole game.
pub const PIECES_PER_SIDE: usize = 3;

/// The 9-node mill board.
///
/// `Board` is `Copy`; search code branches by value, so each recursive
/// call owns an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

/// Failure to parse a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LayoutError {
    /// Layout did not contain exactly 9 cells.
    #[display("Board layout must have 9 cells, got {}", _0)]
    WrongLength(usize),
    /// Layout contained a character other than `B`, `W`, or `.`.
    #[display("Unknown board cell '{}'", _0)]
    UnknownCell(char),
}

impl std::error::Error for LayoutError {}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Parses a 9-cell layout such as `"B.W.B.W.."`.
    ///
    /// `B` is Black, `W` is White, `.` or `_` is empty. Whitespace and
    /// `|` separators are ignored so multi-line layouts work too.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let cells: Vec<char> = layout
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(LayoutError::WrongLength(cells.len()));
        }

        let mut board = Self::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            let square = match cell.to_ascii_uppercase() {
                'B' => Square::Occupied(Side::Black),
                'W' => Square::Occupied(Side::White),
                '.' | '_' => Square::Empty,
                other => return Err(LayoutError::UnknownCell(other)),
            };
            board.set(pos, square);
        }
        Ok(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if `side` has a piece on `pos`.
    pub fn is_owned_by(&self, pos: Position, side: Side) -> bool {
        self.get(pos) == Square::Occupied(side)
    }

    /// Returns the positions occupied by `side`, in index order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_owned_by(pos, side))
    }

    /// Counts the pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of the board with `mv` applied for `side`.
    ///
    /// Does not validate the move; callers check legality first.
    pub fn with_move(&self, mv: Move, side: Side) -> Self {
        let mut next = *self;
        next.set(mv.from, Square::Empty);
        next.set(mv.to, Square::Occupied(side));
        next
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty nodes show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(side) => side.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact 9-character layout, the inverse of [`Board::from_layout`].
    pub fn layout(&self) -> String {
        self.squares
            .iter()
            .map(|sq| match sq {
                Square::Empty => '.',
                Square::Occupied(side) => side.symbol(),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Who plays White.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentMode {
    /// Both sides are driven by callers.
    #[display("human")]
    Human,
    /// White is played by the search engine.
    #[default]
    #[display("ai")]
    Ai,
}

/// Why a game ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinReason {
    /// The winner completed a line through the center.
    #[display("line")]
    Line,
    /// The loser had to move but had no legal move.
    #[display("blockade")]
    Blockade,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the side to move.
    InProgress,
    /// Game ended with a winner.
    Won {
        /// The winning side.
        winner: Side,
        /// How the game was decided.
        reason: WinReason,
    },
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Board the game started from.
    initial_board: Board,
    /// Side to move.
    current_player: Side,
    /// Game status.
    status: GameStatus,
    /// Who plays White.
    opponent_type: OpponentMode,
}

impl GameState {
    /// Creates a game starting from `board` with Black to move.
    pub fn new(board: Board, opponent_type: OpponentMode) -> Self {
        Self {
            board,
            initial_board: board,
            current_player: Side::Black,
            status: GameStatus::InProgress,
            opponent_type,
        }
    }

    /// Returns true once a winner is known.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Checks if `side` is driven by the search engine.
    pub fn is_automated(&self, side: Side) -> bool {
        self.opponent_type == OpponentMode::Ai && side == Side::White
    }

    /// Moves a piece (unchecked - use `GameController::submit_move` for validation).
    pub(super) fn apply_move(&mut self, mv: Move, side: Side) {
        self.board = self.board.with_move(mv, side);
    }

    /// Passes the turn to the other side.
    pub(super) fn flip_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(super) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Wins per side, kept across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Black's wins.
    #[serde(rename = "player1")]
    pub black: u32,
    /// White's wins.
    #[serde(rename = "player2")]
    pub white: u32,
}

impl ScoreTally {
    /// Adds one win for `side`.
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Black => self.black += 1,
            Side::White => self.white += 1,
        }
    }

    /// Returns the wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trip() {
        let board = Board::from_layout("B.W|.B.|W.W").unwrap();
        assert_eq!(board.layout(), "B.W.B.W.W");
        assert_eq!(board.count(Side::Black), 2);
        assert_eq!(board.count(Side::White), 3);
    }

    #[test]
    fn test_layout_rejects_bad_input() {
        assert_eq!(Board::from_layout("B.W"), Err(LayoutError::WrongLength(3)));
        assert_eq!(
            Board::from_layout("B.W.X.W.."),
            Err(LayoutError::UnknownCell('X'))
        );
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::from_layout("B........").unwrap();
        let next = board.with_move(Move::new(Position::TopLeft, Position::Center), Side::Black);
        assert!(board.is_owned_by(Position::TopLeft, Side::Black));
        assert!(next.is_empty(Position::TopLeft));
        assert!(next.is_owned_by(Position::Center, Side::Black));
    }

    #[test]
    fn test_display_numbers_empty_nodes() {
        let board = Board::from_layout("B...W....").unwrap();
        assert_eq!(board.display(), "B|2|3\n-+-+-\n4|W|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_score_tally_serializes_as_players() {
        let mut tally = ScoreTally::default();
        tally.record_win(Side::White);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json, serde_json::json!({"player1": 0, "player2": 1}));
        assert_eq!(tally.wins(Side::White), 1);
    }
}
