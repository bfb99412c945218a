//! Error types for parsing squares, sides and moves from text.

/// A string that is not an algebraic square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{found}\"")]
pub struct SquareParseError {
    /// The rejected input.
    pub found: String,
}

/// A string that is not a side to move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid side: \"{found}\", expected w or b")]
pub struct ColorParseError {
    /// The rejected input.
    pub found: String,
}

/// Errors from parsing a move in `<piece><from>[x<captured>]<to>[=<promotion>]` notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The input ended before the move was complete.
    #[error("move \"{input}\" is truncated")]
    Truncated {
        /// The whole move string.
        input: String,
    },
    /// A piece letter was expected but something else was found.
    #[error("invalid piece letter '{character}' in move \"{input}\"")]
    InvalidPiece {
        /// The offending character.
        character: char,
        /// The whole move string.
        input: String,
    },
    /// One of the two squares did not parse.
    #[error("invalid square in move \"{input}\"")]
    InvalidSquare {
        /// The whole move string.
        input: String,
        /// The underlying square error.
        #[source]
        source: SquareParseError,
    },
    /// Characters remained after a complete move.
    #[error("unexpected trailing characters in move \"{input}\"")]
    TrailingInput {
        /// The whole move string.
        input: String,
    },
}
