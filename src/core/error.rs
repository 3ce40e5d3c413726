//! Engine error taxonomy.
//!
//! Every error is recoverable: a rejected call leaves the game state exactly
//! as it was. An empty deck is not an error; draws report it as a value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tiles::Tile;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// Neither pip matches an open end of the board.
    NoMatch,
    /// The acting seat is not the one whose turn it is.
    NotYourTurn,
    /// The tile is not in the acting seat's hand.
    TileNotInHand,
    /// No round is being played (awaiting start or game over).
    NotInPlay,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::NoMatch => "tile does not match an open end",
            IllegalMoveReason::NotYourTurn => "not your turn",
            IllegalMoveReason::TileNotInHand => "tile is not in hand",
            IllegalMoveReason::NotInPlay => "no round in play",
        };
        f.write_str(text)
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The attempted action breaks the rules; state is unchanged.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// Missing or invalid start options.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `start_game` called while a game is already running.
    #[error("a game is already in progress")]
    GameAlreadyStarted,

    /// `next_round` called before the current round ended.
    #[error("the current round has not ended")]
    RoundInProgress,

    /// `next_round` called after a seat reached the score goal.
    #[error("the match is over; reset to play again")]
    MatchOver,

    /// A pip value outside 0..=6.
    #[error("tile out of range: {low}-{high}")]
    InvalidTile {
        /// First pip as given.
        low: u8,
        /// Second pip as given.
        high: u8,
    },

    /// A seat index other than 0 or 1.
    #[error("no seat {0} at a two-seat table")]
    InvalidSeat(u8),

    /// A tile listed twice when building a deck.
    #[error("duplicate tile {0}")]
    DuplicateTile(Tile),
}

impl EngineError {
    /// Shorthand for an illegal move.
    #[must_use]
    pub const fn illegal(reason: IllegalMoveReason) -> Self {
        EngineError::IllegalMove(reason)
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
