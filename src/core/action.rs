//! Action representation.
//!
//! A seat does one of three things on its turn: lay a tile, draw from the
//! deck, or pass. Every applied action is kept in the round history as an
//! `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::Tile;

/// A single game action.
///
/// ```
/// use rust_dominoes::core::Action;
/// use rust_dominoes::tiles::Tile;
///
/// let play = Action::Play(Tile::new(3, 5).unwrap());
/// assert_eq!(play.tile(), Some(Tile::new(5, 3).unwrap()));
/// assert_eq!(Action::Pass.tile(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Lay a tile from hand on the board.
    Play(Tile),
    /// Take the top tile of the deck.
    Draw,
    /// End the turn without playing.
    Pass,
}

impl Action {
    /// The tile played, for `Play` actions.
    #[must_use]
    pub fn tile(self) -> Option<Tile> {
        match self {
            Action::Play(tile) => Some(tile),
            Action::Draw | Action::Pass => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(tile) => write!(f, "play {tile}"),
            Action::Draw => f.write_str("draw"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Rendering a move log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1 each round).
    pub turn: u32,

    /// Sequence number within the turn (a draw followed by a play).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let tile = Tile::new(6, 1).unwrap();
        assert_eq!(Action::Play(tile).to_string(), "play [1|6]");
        assert_eq!(Action::Draw.to_string(), "draw");
        assert_eq!(Action::Pass.to_string(), "pass");
    }

    #[test]
    fn test_action_equality_by_tile_value() {
        let a = Action::Play(Tile::new(1, 4).unwrap());
        let b = Action::Play(Tile::new(4, 1).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, Action::Draw);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::SECOND, Action::Draw, 2, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
