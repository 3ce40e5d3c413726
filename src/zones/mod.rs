//! Where tiles live once dealt.
//!
//! - `Hand`: tiles held by one seat, removed by value
//! - `Board`: the single chain of played tiles and its two open ends
//!
//! The deck is the third location (see [`crate::tiles::Deck`]). A tile is
//! only ever in one of them.

pub mod board;
pub mod hand;

pub use board::{Board, End, Placement};
pub use hand::Hand;
