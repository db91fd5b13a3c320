//! Error types shared across the crate.

use thiserror::Error;

/// Malformed input to [`crate::board::Board::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    InvalidSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// Errors raised when addressing or filling a column of a [`crate::board::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("column {column} out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors raised when applying a move to a [`crate::game::GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("column {column} out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("illegal move: column {0} is full")]
    IllegalMove(usize),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::ColumnFull(column) => MoveError::IllegalMove(column),
            BoardError::ColumnOutOfRange { column, columns } => {
                MoveError::ColumnOutOfRange { column, columns }
            }
        }
    }
}

/// Errors a [`crate::player::Player`] can report instead of a column.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("input closed before a column was chosen")]
    EndOfInput,

    #[error("simulation hit an illegal move: {0}")]
    Simulation(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a [`crate::play::Match`].
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{player} failed to choose a move: {source}")]
    Player {
        player: String,
        source: PlayerError,
    },

    #[error("{player} chose column {column}: {source}")]
    Move {
        player: String,
        column: usize,
        source: MoveError,
    },
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::Ragged {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    }

    #[test]
    fn test_column_full_becomes_illegal_move() {
        let err: MoveError = BoardError::ColumnFull(2).into();
        assert_eq!(err, MoveError::IllegalMove(2));
        assert_eq!(err.to_string(), "illegal move: column 2 is full");
    }

    #[test]
    fn test_out_of_range_is_preserved() {
        let err: MoveError = BoardError::ColumnOutOfRange {
            column: 9,
            columns: 7,
        }
        .into();
        assert_eq!(
            err,
            MoveError::ColumnOutOfRange {
                column: 9,
                columns: 7
            }
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("win_length must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: win_length must be >= 1"
        );
    }
}
