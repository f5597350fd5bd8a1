//! Error types for the reading engine.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur when drawing cards. All of them are caller misuse:
/// a request is rejected, never truncated or padded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadingError {
    /// A negative number of cards was requested.
    #[error("invalid card count: {0}")]
    InvalidArgument(i64),

    /// More distinct cards were requested than the deck holds.
    #[error("cannot draw {requested} distinct cards from a deck of {available}")]
    InvalidDrawSize {
        /// Cards requested.
        requested: usize,
        /// Cards in the deck.
        available: usize,
    },

    /// The deck is too small for the spread (or empty, for a draw with
    /// replacement).
    #[error("spread needs at least {required} cards, deck has {available}")]
    InsufficientDeckSize {
        /// Minimum deck size for the request.
        required: usize,
        /// Cards in the deck.
        available: usize,
    },
}
