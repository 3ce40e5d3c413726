//! Observer interface between the engine and a renderer.
//!
//! The engine holds a list of boxed observers and calls them synchronously:
//! `on_state_change` after every mutation, `on_game_over` once when a round
//! ends. Observers never mutate the game.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::GameState;
use crate::rules::GameOutcome;

/// Receives engine notifications.
///
/// Both methods default to doing nothing, so an observer only implements
/// what it renders.
pub trait GameObserver {
    /// Called after every state mutation.
    fn on_state_change(&mut self, _state: &GameState) {}

    /// Called once when a round reaches its terminal state.
    fn on_game_over(&mut self, _outcome: &GameOutcome) {}
}

/// A notification as recorded by [`EventLog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Snapshot of the state after a mutation.
    StateChanged(Box<GameState>),
    /// A round ended.
    GameOver(GameOutcome),
}

impl GameEvent {
    /// The state snapshot, for `StateChanged` events.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        match self {
            GameEvent::StateChanged(state) => Some(state),
            GameEvent::GameOver(_) => None,
        }
    }

    /// The outcome, for `GameOver` events.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match self {
            GameEvent::GameOver(outcome) => Some(outcome),
            GameEvent::StateChanged(_) => None,
        }
    }
}

/// Observer that records every notification.
///
/// Clones share the same log, so a host can keep one handle and give the
/// engine another.
///
/// ```
/// use rust_dominoes::core::{GameMode, MatchConfig};
/// use rust_dominoes::engine::TurnEngine;
/// use rust_dominoes::events::EventLog;
///
/// let log = EventLog::new();
/// let mut engine = TurnEngine::new();
/// engine.subscribe(Box::new(log.clone()));
///
/// engine.start_game(MatchConfig::new(GameMode::HumanVsHuman).with_seed(1)).unwrap();
/// assert!(!log.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Nothing recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Most recent state snapshot.
    #[must_use]
    pub fn last_state(&self) -> Option<GameState> {
        self.events.borrow().iter().rev().find_map(|e| e.state().cloned())
    }

    /// Every round outcome seen, oldest first.
    #[must_use]
    pub fn outcomes(&self) -> Vec<GameOutcome> {
        self.events.borrow().iter().filter_map(|e| e.outcome().cloned()).collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_state_change(&mut self, state: &GameState) {
        self.events
            .borrow_mut()
            .push(GameEvent::StateChanged(Box::new(state.clone())));
    }

    fn on_game_over(&mut self, outcome: &GameOutcome) {
        self.events.borrow_mut().push(GameEvent::GameOver(outcome.clone()));
    }
}
