//! Game state: a board, a win length, and the turn/outcome rules.
//!
//! Neither the side to move nor the outcome is stored. Both are derived from
//! the board on every query: the side to move from the parity of the piece
//! count, the outcome from a full line scan.

use crate::board::{Board, Color};
use crate::constants::DEFAULT_WIN_LENGTH;
use crate::error::{ConfigError, MoveError};
use crate::rules::board_winner;

/// Where a game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Won(Color),
    Drawn,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    win_length: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty default board, default win length.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Wrap an existing board with the default win length.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }

    /// Wrap an existing board with a custom win length.
    pub fn with_win_length(board: Board, win_length: usize) -> Result<Self, ConfigError> {
        if win_length == 0 {
            return Err(ConfigError::Validation(
                "win_length must be >= 1".to_string(),
            ));
        }
        Ok(Self { board, win_length })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Color to move: [`Color::FIRST`] on an even piece count.
    pub fn turn_color(&self) -> Color {
        if self.board.piece_count() % 2 == 0 {
            Color::FIRST
        } else {
            Color::FIRST.other()
        }
    }

    /// Color of the side not on move.
    pub fn opponent_color(&self) -> Color {
        self.turn_color().other()
    }

    /// Winning color, if any line holds a winning run.
    pub fn winner(&self) -> Option<Color> {
        board_winner(&self.board, self.win_length)
    }

    /// Full board and no winner.
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && self.winner().is_none()
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(color) => Status::Won(color),
            None if self.board.is_full() => Status::Drawn,
            None => Status::Active,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// True while the board has room, regardless of outcome.
    pub fn has_moves_left(&self) -> bool {
        !self.board.is_full()
    }

    /// Columns a move may be played in. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Play `column` for the side to move and return the resulting status.
    pub fn apply_move(&mut self, column: usize) -> Result<Status, MoveError> {
        let color = self.turn_color();
        self.apply_move_as(column, color)
    }

    /// Play `column` for an explicit `color`.
    ///
    /// Used to ask "what if the opponent played here". Playing out of turn
    /// breaks the parity that [`GameState::turn_color`] relies on, so this is
    /// meant for throwaway clones.
    pub fn apply_move_as(&mut self, column: usize, color: Color) -> Result<Status, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.board.drop_piece(column, color)?;
        Ok(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: &[&str]) -> GameState {
        GameState::from_board(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn_color(), Color::Red);
        assert_eq!(state.opponent_color(), Color::Green);
        assert_eq!(state.status(), Status::Active);
        assert_eq!(state.legal_columns(), (0..7).collect::<Vec<_>>());
        assert_eq!(state.win_length(), 4);
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = GameState::new();
        let mut expected = Color::Red;
        for column in [3, 3, 2, 4, 0, 6] {
            assert_eq!(state.turn_color(), expected);
            state.apply_move(column).unwrap();
            expected = expected.other();
        }
        assert_eq!(state.board().piece_count(), 6);
        assert_eq!(state.turn_color(), Color::Red);
    }

    #[test]
    fn test_apply_move_places_turn_color() {
        let mut state = GameState::new();
        state.apply_move(3).unwrap();
        assert_eq!(state.board().get(5, 3), Some(Some(Color::Red)));
        state.apply_move(3).unwrap();
        assert_eq!(state.board().get(4, 3), Some(Some(Color::Green)));
    }

    #[test]
    fn test_apply_move_as_overrides_color() {
        let mut state = state(&["----"]);
        assert_eq!(state.apply_move_as(0, Color::Green), Ok(Status::Active));
        assert_eq!(state.board().get(0, 0), Some(Some(Color::Green)));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new();
        for column in 0..3 {
            state.apply_move(column).unwrap();
            state.apply_move(column).unwrap();
        }
        assert_eq!(state.apply_move(3), Ok(Status::Won(Color::Red)));
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Color::Red));
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut state = state(&["gggg-"]);
        let before = state.clone();
        assert_eq!(state.apply_move(4), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw() {
        let mut state = state(&["rg-"]);
        assert_eq!(state.apply_move(2), Ok(Status::Drawn));
        assert!(state.is_draw());
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_is_illegal() {
        let mut state = state(&["r-", "g-"]);
        assert_eq!(state.apply_move(0), Err(MoveError::IllegalMove(0)));
        assert_eq!(
            state.apply_move(2),
            Err(MoveError::ColumnOutOfRange {
                column: 2,
                columns: 2
            })
        );
    }

    #[test]
    fn test_has_moves_left() {
        assert!(state(&["-"]).has_moves_left());
        assert!(!state(&["g"]).has_moves_left());
    }

    #[test]
    fn test_custom_win_length() {
        let board = Board::new(3, 3);
        let mut state = GameState::with_win_length(board, 3).unwrap();
        for column in [0, 0, 1, 1] {
            state.apply_move(column).unwrap();
        }
        assert_eq!(state.apply_move(2), Ok(Status::Won(Color::Red)));
    }

    #[test]
    fn test_zero_win_length_rejected() {
        assert!(GameState::with_win_length(Board::default(), 0).is_err());
    }
}
