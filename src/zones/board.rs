//! The line of play.
//!
//! The board is a single linear chain (no spinners, no branches). Each
//! placed tile remembers how it was laid, so the values exposed at the two
//! extremities are known without re-deriving orientation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult, IllegalMoveReason};
use crate::tiles::Tile;

/// One extremity of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    /// Start of the chain.
    Left,
    /// End of the chain.
    Right,
}

/// A tile as it lies on the board, with its oriented pips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The tile itself.
    pub tile: Tile,
    /// Pip facing the left end of the chain.
    pub left: u8,
    /// Pip facing the right end of the chain.
    pub right: u8,
}

/// Played tiles in chain order.
///
/// Backed by `im::Vector` so board snapshots clone in O(1) and tiles can be
/// added at either end.
///
/// ```
/// use rust_dominoes::tiles::Tile;
/// use rust_dominoes::zones::{Board, End};
///
/// let mut board = Board::new();
/// assert_eq!(board.open_ends(), None);
///
/// board.place(Tile::new(2, 5).unwrap()).unwrap();
/// assert_eq!(board.open_ends(), Some((2, 5)));
///
/// // [5|3] matches the right end and is flipped to expose 3
/// assert_eq!(board.place(Tile::new(3, 5).unwrap()), Ok(End::Right));
/// assert_eq!(board.open_ends(), Some((2, 3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    chain: Vector<Placement>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposed values at (left, right), or `None` for an empty board.
    ///
    /// A single tile exposes both of its pips.
    #[must_use]
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        let first = self.chain.front()?;
        let last = self.chain.back()?;
        Some((first.left, last.right))
    }

    /// Which end `tile` would be laid on, checking the right end first.
    ///
    /// Any tile fits an empty board (reported as `Right`).
    #[must_use]
    pub fn fitting_end(&self, tile: Tile) -> Option<End> {
        match self.open_ends() {
            None => Some(End::Right),
            Some((_, right)) if tile.has(right) => Some(End::Right),
            Some((left, _)) if tile.has(left) => Some(End::Left),
            Some(_) => None,
        }
    }

    /// Lay a tile on the first end it matches.
    ///
    /// The tile is flipped as needed so the matching pip touches the chain.
    /// A tile matching neither end is rejected and the board is unchanged.
    pub fn place(&mut self, tile: Tile) -> EngineResult<End> {
        let end = self
            .fitting_end(tile)
            .ok_or(EngineError::illegal(IllegalMoveReason::NoMatch))?;

        match (end, self.open_ends()) {
            (_, None) => self.chain.push_back(Placement {
                tile,
                left: tile.low(),
                right: tile.high(),
            }),
            (End::Right, Some((_, right))) => self.chain.push_back(Placement {
                tile,
                left: right,
                right: tile.other_side(right).unwrap_or(right),
            }),
            (End::Left, Some((left, _))) => self.chain.push_front(Placement {
                tile,
                left: tile.other_side(left).unwrap_or(left),
                right: left,
            }),
        }

        Ok(end)
    }

    /// Number of tiles played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Nothing played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Placements from left to right.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.chain.iter()
    }

    /// Played tiles from left to right.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.chain.iter().map(|p| p.tile)
    }
}
