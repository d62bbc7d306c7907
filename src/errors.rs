//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by FEN parsing, move-notation
//! parsing, and the command protocol. Variants fall into two families that
//! callers must be able to tell apart:
//! - malformed input (the text itself cannot be understood), and
//! - illegal moves (well-formed text naming a move the position does not allow).
//!
//! A search running out of time is not an error and never produces one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// FEN structure is wrong: field count, rank count, rank widths, or a field value.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A board-layout character is neither a digit nor a known piece letter.
    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),

    /// A coordinate such as `e4` could not be interpreted.
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// Move text has the wrong length or shape.
    #[error("malformed move '{0}'")]
    MalformedMove(String),

    /// Move text is well-formed but not a legal move in the position.
    #[error("illegal move '{0}'")]
    IllegalMove(String),

    /// The command protocol received a request it does not understand.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A protocol request is missing a required argument.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// A protocol argument (depth, movetime) is not a valid number.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChessError {
    /// True for every variant caused by text that could not be parsed.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, ChessError::IllegalMove(_))
    }

    /// Stable machine-readable tag used on `ERROR:` protocol lines.
    pub fn tag(&self) -> &'static str {
        match self {
            ChessError::IllegalMove(_) => "ILLEGAL_MOVE",
            ChessError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            ChessError::InvalidFen(_)
            | ChessError::InvalidPieceChar(_)
            | ChessError::InvalidSquare(_)
            | ChessError::MalformedMove(_)
            | ChessError::MissingArgument(_)
            | ChessError::InvalidArgument(_) => "MALFORMED",
        }
    }
}

pub type ChessResult<T> = Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::ChessError;

    #[test]
    fn illegal_moves_are_distinguished_from_malformed_input() {
        let illegal = ChessError::IllegalMove("e2e5".to_owned());
        let malformed = ChessError::MalformedMove("e2".to_owned());

        assert!(!illegal.is_malformed_input());
        assert!(malformed.is_malformed_input());
        assert_ne!(illegal.tag(), malformed.tag());
    }
}
