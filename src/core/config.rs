//! Match configuration.
//!
//! Hosts configure a match at start by providing a `MatchConfig`:
//! - `GameMode`: who sits in the second seat
//! - score goal, deal size, points per round
//! - CPU pacing and an optional shuffle seed
//!
//! `MatchConfig::validate` is run by the engine before any state changes.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::player::{PlayerId, SEAT_COUNT};
use crate::tiles::DECK_SIZE;

/// Default number of tiles dealt to each seat.
pub const DEFAULT_DEAL_COUNT: usize = 7;

/// Default points awarded for winning a round.
pub const DEFAULT_ROUND_POINTS: u32 = 10;

/// Default cumulative score that ends a match.
pub const DEFAULT_SCORE_GOAL: u32 = 100;

/// Who occupies the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans alternate at the same table.
    HumanVsHuman,
    /// The second seat is played by the CPU.
    HumanVsCpu,
}

impl GameMode {
    /// Is the given seat driven by the CPU in this mode?
    #[must_use]
    pub fn is_cpu(self, player: PlayerId) -> bool {
        self == GameMode::HumanVsCpu && player == PlayerId::SECOND
    }

    /// Display name for a seat in this mode.
    #[must_use]
    pub fn seat_name(self, player: PlayerId) -> &'static str {
        match (self, player == PlayerId::FIRST) {
            (_, true) => "Player",
            (GameMode::HumanVsCpu, false) => "CPU",
            (GameMode::HumanVsHuman, false) => "Player 2",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::HumanVsHuman => f.write_str("human-vs-human"),
            GameMode::HumanVsCpu => f.write_str("human-vs-cpu"),
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "human-vs-human" | "1v1" => Ok(GameMode::HumanVsHuman),
            "human-vs-cpu" | "1vPC" => Ok(GameMode::HumanVsCpu),
            "" => Err(EngineError::InvalidConfiguration("no game mode selected".into())),
            other => Err(EngineError::InvalidConfiguration(format!("unknown game mode '{other}'"))),
        }
    }
}

/// When the CPU takes its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuPacing {
    /// The CPU moves inside the call that handed it the turn.
    #[default]
    Immediate,
    /// The engine parks in `CpuTurn` and hands out a ticket the host runs
    /// later (for example after a short UI delay).
    Deferred,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat arrangement. `None` means nothing was selected yet.
    pub mode: Option<GameMode>,

    /// Cumulative score that ends the match. Must be positive.
    pub score_goal: u32,

    /// Tiles dealt to each seat (7 standard, 5 in reduced variants).
    pub deal_count: usize,

    /// Points awarded to the winner of a round.
    pub round_points: u32,

    /// Seat that moves first in every round.
    pub first_turn: PlayerId,

    /// CPU scheduling.
    pub cpu_pacing: CpuPacing,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: None,
            score_goal: DEFAULT_SCORE_GOAL,
            deal_count: DEFAULT_DEAL_COUNT,
            round_points: DEFAULT_ROUND_POINTS,
            first_turn: PlayerId::FIRST,
            cpu_pacing: CpuPacing::Immediate,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a config for the given mode with default options.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    /// Set the score goal.
    #[must_use]
    pub fn with_score_goal(mut self, goal: u32) -> Self {
        self.score_goal = goal;
        self
    }

    /// Set the number of tiles dealt to each seat.
    #[must_use]
    pub fn with_deal_count(mut self, count: usize) -> Self {
        self.deal_count = count;
        self
    }

    /// Set the points awarded per round win.
    #[must_use]
    pub fn with_round_points(mut self, points: u32) -> Self {
        self.round_points = points;
        self
    }

    /// Set the seat that moves first.
    #[must_use]
    pub fn with_first_turn(mut self, player: PlayerId) -> Self {
        self.first_turn = player;
        self
    }

    /// Set CPU pacing.
    #[must_use]
    pub fn with_cpu_pacing(mut self, pacing: CpuPacing) -> Self {
        self.cpu_pacing = pacing;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the options and return the selected mode.
    ///
    /// Both hands must fit in the deck.
    pub fn validate(&self) -> EngineResult<GameMode> {
        let mode = self
            .mode
            .ok_or_else(|| EngineError::InvalidConfiguration("no game mode selected".into()))?;

        if self.score_goal == 0 {
            return Err(EngineError::InvalidConfiguration("score goal must be positive".into()));
        }

        let max_deal = DECK_SIZE / 2;
        if self.deal_count == 0 || self.deal_count > max_deal {
            return Err(EngineError::InvalidConfiguration(format!(
                "deal count must be between 1 and {max_deal}, got {}",
                self.deal_count
            )));
        }

        if self.first_turn.index() >= SEAT_COUNT {
            return Err(EngineError::InvalidConfiguration(format!(
                "first turn must go to seat 0 or 1, got {}",
                self.first_turn.index()
            )));
        }

        Ok(mode)
    }
}
