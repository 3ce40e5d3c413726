//! A seat's hand of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::Tile;

/// Tiles held by one seat, in the order they were received.
///
/// Removal matches by value: `remove([5|3])` removes the first tile whose
/// pips are {3, 5}, whichever way round it was written. A standard set never
/// holds two equal tiles, so "first" is also "only".
///
/// ```
/// use rust_dominoes::tiles::Tile;
/// use rust_dominoes::zones::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(Tile::new(3, 5).unwrap());
///
/// assert!(hand.remove(Tile::new(5, 3).unwrap()));
/// assert!(hand.is_empty());
/// assert!(!hand.remove(Tile::new(5, 3).unwrap()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// SmallVec keeps a dealt hand (7) plus a draw inline.
    tiles: SmallVec<[Tile; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the end of the hand.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove the first tile equal to `tile`.
    ///
    /// Returns false (and changes nothing) if no such tile is held.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Is an equal tile held?
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Sum of pips over every tile (0 for an empty hand).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// No tiles held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in hand order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Tiles as a slice.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
