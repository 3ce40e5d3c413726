//! Tiles and the deck they are dealt from.
//!
//! - `Tile`: unordered pip pair compared by value
//! - `Deck`: the 28-tile double-six boneyard

mod deck;
mod tile;

pub use deck::{Deck, DECK_SIZE};
pub use tile::{Tile, MAX_PIP};
