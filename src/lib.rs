//! # rust-dominoes
//!
//! A two-player double-six dominoes engine.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: The `TurnEngine` owns the only mutable `GameState`.
//!    Every transition goes through it and is checked first; a rejected call
//!    changes nothing.
//!
//! 2. **Rendering Outside**: The engine never draws. Observers receive
//!    `&GameState` after every mutation and a `GameOutcome` when a round ends.
//!
//! 3. **Deterministic**: Shuffles come from a seeded ChaCha RNG, so a seed
//!    replays a match exactly.
//!
//! ## Architecture
//!
//! - **Tiles by value**: A tile is stored normalized, so `[6|1]` and `[1|6]`
//!   are the same tile everywhere.
//!
//! - **Persistent Data Structures**: Board and history use `im-rs`, so the
//!   snapshots handed to observers clone cheaply.
//!
//! - **Cancellable CPU turns**: With deferred pacing the CPU move waits on a
//!   ticket tagged with the state generation. Resets and new deals bump the
//!   generation, and stale tickets are ignored.
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `tiles`: Tiles and the deck
//! - `zones`: Hands and the board
//! - `rules`: Move validation, scoring, and the `RulesEngine` trait
//! - `cpu`: CPU move selection
//! - `events`: Observer interface
//! - `engine`: The turn state machine
//! - `chat`: Chat sidebar history
//! - `render`: Text rendering observer

pub mod core;
pub mod tiles;
pub mod zones;
pub mod rules;
pub mod cpu;
pub mod events;
pub mod engine;
pub mod chat;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CpuPacing, EngineError, EngineResult, GameMode, GameRng, GameState,
    IllegalMoveReason, MatchConfig, Phase, PlayerId, PlayerMap,
};

pub use crate::tiles::{Deck, Tile, DECK_SIZE, MAX_PIP};

pub use crate::zones::{Board, End, Hand, Placement};

pub use crate::rules::{DominoRules, GameOutcome, RoundResult, RulesEngine};

pub use crate::cpu::{CpuStrategy, FirstLegal};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::engine::{CpuMove, CpuTurnTicket, DrawOutcome, TurnEngine};

pub use crate::chat::{ChatLog, ChatMessage};

pub use crate::render::TextRenderer;
