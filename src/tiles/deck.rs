//! The boneyard: a double-six set of 28 tiles.
//!
//! The deck is drawn from the end of its tile list (the "top"). Drawing from
//! an empty deck returns `None` and leaves the deck untouched.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, MAX_PIP};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;

/// Tiles in a double-six set.
pub const DECK_SIZE: usize = 28;

/// A collection of undealt tiles, top = end of vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Every tile of the set once, in canonical order ([0|0], [0|1], … [6|6]).
    #[must_use]
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(DECK_SIZE);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                tiles.push(Tile::normalized(i, j));
            }
        }
        Self { tiles }
    }

    /// A full, shuffled set ready to deal from.
    #[must_use]
    pub fn initialize(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Build a deck in exactly the given order (last tile drawn first).
    ///
    /// Rejects repeated tiles; a set never holds the same tile twice.
    pub fn from_tiles(tiles: Vec<Tile>) -> EngineResult<Self> {
        let mut seen = FxHashSet::default();
        for &tile in &tiles {
            if !seen.insert(tile) {
                return Err(EngineError::DuplicateTile(tile));
            }
        }
        Ok(Self { tiles })
    }

    /// Shuffle the remaining tiles in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Take the top tile, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// No tiles left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<Tile> = deck.tiles().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);

        for tile in deck.tiles() {
            assert!(tile.low() <= tile.high());
            assert!(tile.high() <= MAX_PIP);
        }
        assert_eq!(deck.tiles().iter().filter(|t| t.is_double()).count(), 7);
    }

    #[test]
    fn test_initialize_is_shuffled_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::initialize(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::standard());

        let mut sorted = deck.tiles().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, Deck::standard().tiles());
    }

    #[test]
    fn test_initialize_is_deterministic() {
        let a = Deck::initialize(&mut GameRng::new(11));
        let b = Deck::initialize(&mut GameRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_from_top_until_empty() {
        let mut deck = Deck::from_tiles(vec![Tile::normalized(0, 1), Tile::normalized(2, 3)]).unwrap();

        assert_eq!(deck.draw(), Some(Tile::normalized(2, 3)));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.draw(), Some(Tile::normalized(0, 1)));
        assert!(deck.is_empty());

        assert_eq!(deck.draw(), None);
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        let err = Deck::from_tiles(vec![Tile::normalized(1, 2), Tile::normalized(2, 1)]).unwrap_err();
        assert_eq!(err, EngineError::DuplicateTile(Tile::normalized(1, 2)));
    }
}
