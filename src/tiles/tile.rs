//! Domino tiles.
//!
//! A `Tile` is an unordered pair of pip values in `0..=MAX_PIP`. It is stored
//! normalized (low pip first), so the derived `Eq` and `Hash` compare tiles
//! by value: `[5|3]` and `[3|5]` are the same tile.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// A domino tile.
///
/// ## Example
///
/// ```
/// use rust_dominoes::tiles::Tile;
///
/// let a = Tile::new(5, 3).unwrap();
/// let b = Tile::new(3, 5).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.pips(), (3, 5));
/// assert!(Tile::new(7, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    low: u8,
    high: u8,
}

impl Tile {
    /// Create a tile from two pip values in either order.
    pub fn new(a: u8, b: u8) -> EngineResult<Self> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(EngineError::InvalidTile { low: a, high: b });
        }
        Ok(Self::normalized(a, b))
    }

    /// Build a tile from pips already known to be in range.
    pub(crate) const fn normalized(a: u8, b: u8) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller pip value.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// The larger pip value.
    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Both pip values, low first.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.low, self.high)
    }

    /// Both pips equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.low == self.high
    }

    /// Sum of both pips.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.low as u32 + self.high as u32
    }

    /// Does either pip equal `value`?
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.low == value || self.high == value
    }

    /// The pip opposite `value`, if the tile carries `value`.
    #[must_use]
    pub const fn other_side(self, value: u8) -> Option<u8> {
        if self.low == value {
            Some(self.high)
        } else if self.high == value {
            Some(self.low)
        } else {
            None
        }
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = EngineError;

    fn try_from((a, b): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::new(a, b)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        tile.pips()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}
