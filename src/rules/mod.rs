//! Game rules.
//!
//! - `validator`: whether a tile may be laid on the board
//! - `scoring`: hand scores, round results, match end
//! - `engine`: the `RulesEngine` seam the turn engine calls into

pub mod engine;
pub mod scoring;
pub mod validator;

pub use engine::{DominoRules, RulesEngine};
pub use scoring::{hand_score, is_match_over, match_winner, round_result, GameOutcome, RoundResult};
pub use validator::{has_legal_move, is_legal, legal_tiles};
