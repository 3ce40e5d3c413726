//! CPU opponent.
//!
//! Strategies are trait-based so a host can plug in its own; the engine
//! ships with `FirstLegal`.

mod policy;

pub use policy::{CpuStrategy, FirstLegal};
