//! Values handed back by engine steps.

use serde::{Deserialize, Serialize};

use crate::tiles::Tile;

/// Permission to run one deferred CPU turn.
///
/// Carries the state generation it was issued for. Resetting the game,
/// dealing a new round, or running the turn makes the ticket stale, and a
/// stale ticket is ignored by [`TurnEngine::run_cpu_turn`].
///
/// [`TurnEngine::run_cpu_turn`]: super::TurnEngine::run_cpu_turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CpuTurnTicket {
    pub(super) generation: u64,
}

impl CpuTurnTicket {
    /// The generation this ticket was issued for.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// What the CPU did with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuMove {
    /// Laid this tile.
    Played(Tile),
    /// Had no legal tile; drew this one and passed.
    Drew(Tile),
    /// Had no legal tile and the deck was empty.
    Passed,
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// This tile moved from the deck to the hand.
    Drew(Tile),
    /// Nothing left to draw; nothing changed.
    DeckEmpty,
}
