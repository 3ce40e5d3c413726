//! Turn engine: the domino game state machine.
//!
//! ```
//! use rust_dominoes::core::{GameMode, MatchConfig, Phase, PlayerId};
//! use rust_dominoes::engine::TurnEngine;
//!
//! let mut engine = TurnEngine::new();
//! engine.start_game(MatchConfig::new(GameMode::HumanVsCpu).with_seed(7)).unwrap();
//! assert_eq!(engine.state().phase(), Phase::PlayerTurn(PlayerId::FIRST));
//!
//! // Passing hands the turn to the CPU, which answers at once
//! engine.end_turn(PlayerId::FIRST).unwrap();
//! assert_eq!(engine.state().phase(), Phase::PlayerTurn(PlayerId::FIRST));
//! ```

mod ticket;
mod turn;

pub use ticket::{CpuMove, CpuTurnTicket, DrawOutcome};
pub use turn::TurnEngine;
