//! Core engine types: seats, state, actions, RNG, configuration, errors.
//!
//! These are the building blocks shared by the rules, the CPU strategy,
//! and the turn engine.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{CpuPacing, GameMode, MatchConfig, DEFAULT_DEAL_COUNT, DEFAULT_ROUND_POINTS, DEFAULT_SCORE_GOAL};
pub use error::{EngineError, EngineResult, IllegalMoveReason};
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
pub use state::{GameState, Phase};
