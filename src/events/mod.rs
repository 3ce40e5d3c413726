//! Engine notifications.
//!
//! Rendering is kept out of the engine: a UI subscribes a `GameObserver`
//! and redraws from the `&GameState` it is handed.

mod observer;

pub use observer::{EventLog, GameEvent, GameObserver};
