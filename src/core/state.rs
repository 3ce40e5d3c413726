//! Game state: everything a renderer needs, and nothing hidden.
//!
//! ## Phase
//!
//! `AwaitingStart → PlayerTurn → CpuTurn → PlayerTurn → … → GameOver`.
//! In human-vs-human mode `PlayerTurn` alternates between the seats instead.
//!
//! ## GameState
//!
//! Deck, hands, board, phase, cumulative scores, and round history. The
//! [`TurnEngine`](crate::engine::TurnEngine) owns the only mutable copy;
//! observers receive `&GameState` after every change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::{GameMode, MatchConfig};
use super::player::{PlayerId, PlayerMap};
use crate::rules::GameOutcome;
use crate::tiles::{Deck, Tile};
use crate::zones::{Board, Hand};

/// Turn-engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game running; waiting for `start_game`.
    #[default]
    AwaitingStart,
    /// A human seat is to act.
    PlayerTurn(PlayerId),
    /// The CPU seat is to act.
    CpuTurn,
    /// The round has ended; see `GameState::outcome`.
    GameOver,
}

/// Full game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Options the current match was started with.
    pub(crate) config: MatchConfig,

    /// Current phase.
    pub(crate) phase: Phase,

    /// Undealt tiles.
    pub(crate) deck: Deck,

    /// Hands per seat.
    pub(crate) hands: PlayerMap<Hand>,

    /// Played tiles.
    pub(crate) board: Board,

    /// Cumulative match scores.
    pub(crate) scores: PlayerMap<u32>,

    /// Round number within the match (0 before the first deal).
    pub(crate) round: u32,

    /// Turn number within the round (starts at 1).
    pub(crate) turn_number: u32,

    /// Action sequence within the turn.
    pub(crate) action_sequence: u32,

    /// Actions taken this round, oldest first.
    pub(crate) history: Vector<ActionRecord>,

    /// Result of the last finished round.
    pub(crate) outcome: Option<GameOutcome>,

    /// Bumped whenever pending CPU work must be invalidated.
    pub(crate) generation: u64,
}

impl GameState {
    /// A state awaiting start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Read access ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has a game been started (and not reset)?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::AwaitingStart
    }

    /// Selected mode, once a game is started.
    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        self.is_started().then_some(self.config.mode).flatten()
    }

    /// Options the match was started with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The seat expected to act, if any.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::PlayerTurn(player) => Some(player),
            Phase::CpuTurn => Some(PlayerId::SECOND),
            Phase::AwaitingStart | Phase::GameOver => None,
        }
    }

    /// Undealt tiles.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A seat's cumulative score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Both cumulative scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Current round number (1-based once dealt).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current turn number within the round.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Actions taken this round.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    /// Result of the last finished round, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Token identifying the current stretch of play.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Mutation (engine only) ===

    /// Clear round-scoped state and deal a fresh deck.
    ///
    /// Deals `deal_count` tiles to the first seat, then to the second,
    /// each from the top of the deck.
    pub(crate) fn deal(&mut self, deck: Deck, deal_count: usize) {
        self.deck = deck;
        self.hands = PlayerMap::with_default();
        self.board = Board::new();
        self.history = Vector::new();
        self.outcome = None;
        self.round += 1;
        self.turn_number = 1;
        self.action_sequence = 0;

        for player in PlayerId::all() {
            for _ in 0..deal_count {
                if let Some(tile) = self.deck.draw() {
                    self.hands[player].add(tile);
                }
            }
        }
    }

    /// Move the top deck tile into a seat's hand.
    pub(crate) fn draw_for(&mut self, player: PlayerId) -> Option<Tile> {
        let tile = self.deck.draw()?;
        self.hands[player].add(tile);
        Some(tile)
    }

    /// Advance to the next turn.
    pub(crate) fn advance_turn(&mut self) {
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Record an action in history.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Invalidate any outstanding CPU ticket.
    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;
    use crate::tiles::DECK_SIZE;

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.phase(), Phase::AwaitingStart);
        assert!(!state.is_started());
        assert_eq!(state.mode(), None);
        assert_eq!(state.to_act(), None);
        assert!(state.deck().is_empty());
        assert!(state.board().is_empty());
        assert_eq!(state.score(PlayerId::FIRST), 0);
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn test_mode_hidden_until_started() {
        let mut state = GameState::new();
        state.config = MatchConfig::new(GameMode::HumanVsCpu);
        assert_eq!(state.mode(), None);

        state.phase = Phase::PlayerTurn(PlayerId::FIRST);
        assert_eq!(state.mode(), Some(GameMode::HumanVsCpu));
    }

    #[test]
    fn test_deal_partitions_deck() {
        let mut state = GameState::new();
        state.deal(Deck::standard(), 7);

        assert_eq!(state.deck().len(), DECK_SIZE - 14);
        assert_eq!(state.hand(PlayerId::FIRST).len(), 7);
        assert_eq!(state.hand(PlayerId::SECOND).len(), 7);
        assert_eq!(state.round(), 1);
        assert_eq!(state.turn_number(), 1);

        // Dealt from the top: the first seat gets the last seven tiles
        let standard = Deck::standard();
        let top_seven: Vec<_> = standard.tiles().iter().rev().take(7).copied().collect();
        assert_eq!(state.hand(PlayerId::FIRST).tiles(), top_seven.as_slice());
    }

    #[test]
    fn test_draw_for() {
        let mut state = GameState::new();
        state.deal(Deck::from_tiles(vec![Tile::new(1, 1).unwrap()]).unwrap(), 0);

        assert_eq!(state.draw_for(PlayerId::SECOND), Some(Tile::new(1, 1).unwrap()));
        assert_eq!(state.hand(PlayerId::SECOND).len(), 1);
        assert_eq!(state.draw_for(PlayerId::SECOND), None);
        assert_eq!(state.hand(PlayerId::SECOND).len(), 1);
    }

    #[test]
    fn test_record_and_advance() {
        let mut state = GameState::new();
        state.deal(Deck::standard(), 7);

        state.record(PlayerId::FIRST, Action::Draw);
        state.record(PlayerId::FIRST, Action::Pass);
        state.advance_turn();
        state.record(PlayerId::SECOND, Action::Pass);

        let records: Vec<_> = state.history().cloned().collect();
        assert_eq!(records[0], ActionRecord::new(PlayerId::FIRST, Action::Draw, 1, 0));
        assert_eq!(records[1], ActionRecord::new(PlayerId::FIRST, Action::Pass, 1, 1));
        assert_eq!(records[2], ActionRecord::new(PlayerId::SECOND, Action::Pass, 2, 0));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut state = GameState::new();
        state.deal(Deck::standard(), 5);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
