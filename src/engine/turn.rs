//! The turn engine.

use log::{debug, info, warn};

use super::ticket::{CpuMove, CpuTurnTicket, DrawOutcome};
use crate::core::{
    Action, CpuPacing, EngineError, EngineResult, GameRng, GameState, IllegalMoveReason, MatchConfig, Phase,
    PlayerId,
};
use crate::cpu::{CpuStrategy, FirstLegal};
use crate::events::GameObserver;
use crate::rules::{is_legal, match_winner, DominoRules, GameOutcome, RoundResult, RulesEngine};
use crate::tiles::{Deck, Tile};

/// Owns the game state and applies every transition to it.
///
/// ## Lifecycle
///
/// - `start_game` deals the first round
/// - `play_tile` / `draw_tile` / `end_turn` drive human turns
/// - the CPU seat moves by itself (`CpuPacing::Immediate`) or when the host
///   runs its ticket (`CpuPacing::Deferred`)
/// - `next_round` deals again after a round ends, keeping scores
/// - `reset_game` returns to `AwaitingStart` and zeroes scores
///
/// Every rejected call leaves the state untouched.
pub struct TurnEngine {
    state: GameState,
    rules: DominoRules,
    strategy: Box<dyn CpuStrategy>,
    observers: Vec<Box<dyn GameObserver>>,
    /// Match RNG; each round shuffles from a fork of it.
    rng: GameRng,
}

impl std::fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .field("seed", &self.rng.seed())
            .finish_non_exhaustive()
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    /// Create an engine with the first-legal-tile CPU.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(Box::new(FirstLegal))
    }

    /// Create an engine with a custom CPU strategy.
    #[must_use]
    pub fn with_strategy(strategy: Box<dyn CpuStrategy>) -> Self {
        Self {
            state: GameState::new(),
            rules: DominoRules::new(),
            strategy,
            observers: Vec::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Register an observer. It is notified from the next mutation on.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal actions for a seat right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.rules.legal_actions(&self.state, player)
    }

    // === Lifecycle ===

    /// Start a match with a shuffled deck.
    ///
    /// Only valid while awaiting start. The config is validated before
    /// anything changes.
    pub fn start_game(&mut self, config: MatchConfig) -> EngineResult<()> {
        self.begin_match(config, None)
    }

    /// Start a match whose first round is dealt from `deck` as given.
    ///
    /// Later rounds are shuffled as usual. The deck must hold at least
    /// both hands.
    pub fn start_game_with_deck(&mut self, config: MatchConfig, deck: Deck) -> EngineResult<()> {
        self.begin_match(config, Some(deck))
    }

    fn begin_match(&mut self, config: MatchConfig, deck: Option<Deck>) -> EngineResult<()> {
        if self.state.is_started() {
            return Err(EngineError::GameAlreadyStarted);
        }
        let mode = config.validate()?;
        if let Some(deck) = &deck {
            if deck.len() < config.deal_count.saturating_mul(2) {
                return Err(EngineError::InvalidConfiguration(format!(
                    "deck of {} tiles cannot deal {} to each seat",
                    deck.len(),
                    config.deal_count
                )));
            }
        }

        self.rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(
            "starting {mode} match: goal {}, deal {}, seed {}",
            config.score_goal,
            config.deal_count,
            self.rng.seed()
        );

        let generation = self.state.generation;
        self.state = GameState {
            config,
            generation,
            ..GameState::new()
        };
        self.deal_round(deck);
        Ok(())
    }

    /// Deal the next round of a match, keeping cumulative scores.
    pub fn next_round(&mut self) -> EngineResult<()> {
        match self.state.phase {
            Phase::GameOver => {}
            Phase::AwaitingStart => return Err(EngineError::illegal(IllegalMoveReason::NotInPlay)),
            Phase::PlayerTurn(_) | Phase::CpuTurn => return Err(EngineError::RoundInProgress),
        }
        if self.state.outcome.as_ref().is_some_and(GameOutcome::is_match_over) {
            return Err(EngineError::MatchOver);
        }

        self.deal_round(None);
        Ok(())
    }

    /// Drop the current game and return to `AwaitingStart`.
    ///
    /// Always allowed. Clears hands, board, deck and scores, and invalidates
    /// any outstanding CPU ticket.
    pub fn reset_game(&mut self) {
        let generation = self.state.generation + 1;
        self.state = GameState {
            generation,
            ..GameState::new()
        };
        info!("game reset");
        self.notify();
    }

    fn deal_round(&mut self, deck: Option<Deck>) {
        let deck = deck.unwrap_or_else(|| Deck::initialize(&mut self.rng.fork()));
        let deal_count = self.state.config.deal_count;

        self.state.deal(deck, deal_count);
        self.state.bump_generation();
        info!(
            "round {} dealt: {} tiles each, {} left in deck",
            self.state.round,
            deal_count,
            self.state.deck.len()
        );

        self.begin_turn(self.state.config.first_turn);
    }

    // === Human turns ===

    /// Lay `tile` from `player`'s hand.
    ///
    /// Ends the turn on success. Fails with `IllegalMove` when it is not
    /// `player`'s turn, the tile is not held, or it matches no open end.
    pub fn play_tile(&mut self, player: PlayerId, tile: Tile) -> EngineResult<()> {
        self.require_turn(player)?;
        if !self.state.hands[player].contains(tile) {
            return Err(self.reject(player, IllegalMoveReason::TileNotInHand));
        }
        if !is_legal(tile, &self.state.board) {
            return Err(self.reject(player, IllegalMoveReason::NoMatch));
        }

        let end = self.state.board.place(tile)?;
        self.state.hands[player].remove(tile);
        self.state.record(player, Action::Play(tile));
        debug!("{player} played {tile} on the {end:?} end");
        self.notify();

        self.finish_turn(player);
        Ok(())
    }

    /// Take the top deck tile into `player`'s hand.
    ///
    /// Does not end the turn. An empty deck is reported, not rejected.
    pub fn draw_tile(&mut self, player: PlayerId) -> EngineResult<DrawOutcome> {
        self.require_turn(player)?;

        let Some(tile) = self.state.draw_for(player) else {
            debug!("{player} tried to draw from an empty deck");
            return Ok(DrawOutcome::DeckEmpty);
        };
        self.state.record(player, Action::Draw);
        debug!("{player} drew, {} left in deck", self.state.deck.len());
        self.notify();

        self.check_termination();
        Ok(DrawOutcome::Drew(tile))
    }

    /// Pass the turn without playing.
    pub fn end_turn(&mut self, player: PlayerId) -> EngineResult<()> {
        self.require_turn(player)?;

        self.state.record(player, Action::Pass);
        debug!("{player} passed");

        self.finish_turn(player);
        Ok(())
    }

    /// Apply any action for `player`.
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> EngineResult<()> {
        match action {
            Action::Play(tile) => self.play_tile(player, tile),
            Action::Draw => self.draw_tile(player).map(|_| ()),
            Action::Pass => self.end_turn(player),
        }
    }

    // === CPU turns ===

    /// Ticket for the CPU turn waiting to run, if the CPU is to move.
    #[must_use]
    pub fn pending_cpu_turn(&self) -> Option<CpuTurnTicket> {
        (self.state.phase == Phase::CpuTurn).then_some(CpuTurnTicket {
            generation: self.state.generation,
        })
    }

    /// Run a deferred CPU turn.
    ///
    /// Returns `None`, leaving the state untouched, if the ticket is stale.
    pub fn run_cpu_turn(&mut self, ticket: CpuTurnTicket) -> Option<CpuMove> {
        if self.state.phase != Phase::CpuTurn || ticket.generation != self.state.generation {
            warn!(
                "discarding stale CPU turn (ticket generation {}, current {})",
                ticket.generation, self.state.generation
            );
            return None;
        }
        Some(self.cpu_turn())
    }

    fn cpu_turn(&mut self) -> CpuMove {
        let cpu = PlayerId::SECOND;

        let proposed = self.strategy.choose_move(&self.state.hands[cpu], &self.state.board);
        let legal = proposed.filter(|&t| self.state.hands[cpu].contains(t) && is_legal(t, &self.state.board));
        if let (Some(tile), None) = (proposed, legal) {
            warn!("CPU strategy proposed unplayable tile {tile}; drawing instead");
        }
        let played = legal.and_then(|tile| self.state.board.place(tile).ok().map(|_| tile));

        let cpu_move = if let Some(tile) = played {
            self.state.hands[cpu].remove(tile);
            self.state.record(cpu, Action::Play(tile));
            debug!("CPU played {tile}");
            CpuMove::Played(tile)
        } else if let Some(tile) = self.state.draw_for(cpu) {
            self.state.record(cpu, Action::Draw);
            self.state.record(cpu, Action::Pass);
            debug!("CPU drew and passed");
            CpuMove::Drew(tile)
        } else {
            self.state.record(cpu, Action::Pass);
            debug!("CPU passed on an empty deck");
            CpuMove::Passed
        };
        self.notify();

        self.finish_turn(cpu);
        cpu_move
    }

    // === Transitions ===

    fn require_turn(&self, player: PlayerId) -> EngineResult<()> {
        match self.state.phase {
            Phase::PlayerTurn(p) if p == player => Ok(()),
            Phase::PlayerTurn(_) | Phase::CpuTurn => Err(self.reject(player, IllegalMoveReason::NotYourTurn)),
            Phase::AwaitingStart | Phase::GameOver => Err(self.reject(player, IllegalMoveReason::NotInPlay)),
        }
    }

    fn reject(&self, player: PlayerId, reason: IllegalMoveReason) -> EngineError {
        warn!("rejected move by {player}: {reason}");
        EngineError::illegal(reason)
    }

    /// Hand the turn to `player`, running the CPU right away if paced so.
    fn begin_turn(&mut self, player: PlayerId) {
        let cpu_seat = self.state.config.mode.is_some_and(|mode| mode.is_cpu(player));

        if cpu_seat {
            self.state.phase = Phase::CpuTurn;
            self.state.bump_generation();
            debug!("CPU to move (generation {})", self.state.generation);
            self.notify();

            if self.state.config.cpu_pacing == CpuPacing::Immediate {
                self.cpu_turn();
            }
        } else {
            self.state.phase = Phase::PlayerTurn(player);
            debug!("{player} to move");
            self.notify();
        }
    }

    fn finish_turn(&mut self, player: PlayerId) {
        if self.check_termination() {
            return;
        }
        self.state.advance_turn();
        self.begin_turn(player.opponent());
    }

    /// End the round if the rules say so. Returns true if it ended.
    fn check_termination(&mut self) -> bool {
        match self.rules.is_terminal(&self.state) {
            Some(result) => {
                self.finish_round(result);
                true
            }
            None => false,
        }
    }

    fn finish_round(&mut self, result: RoundResult) {
        let hands_in_play = PlayerId::all().all(|p| !self.state.hands[p].is_empty());
        let blocked = hands_in_play && self.rules.is_blocked(&self.state);

        let points_awarded = match result.winner() {
            Some(winner) => {
                let points = self.state.config.round_points;
                self.state.scores[winner] = self.state.scores[winner].saturating_add(points);
                points
            }
            None => 0,
        };
        let match_winner = match_winner(&self.state.scores, self.state.config.score_goal);

        let outcome = GameOutcome {
            round: self.state.round,
            result,
            blocked,
            points_awarded,
            scores: self.state.scores.clone(),
            match_winner,
        };

        self.state.phase = Phase::GameOver;
        self.state.outcome = Some(outcome.clone());
        self.state.bump_generation();
        info!(
            "round {} over: {:?}{}, scores {}-{}",
            outcome.round,
            outcome.result,
            if blocked { " (blocked)" } else { "" },
            outcome.scores[PlayerId::FIRST],
            outcome.scores[PlayerId::SECOND]
        );
        if let Some(winner) = match_winner {
            info!("match won by {winner}");
        }

        self.notify();
        for observer in &mut self.observers {
            observer.on_game_over(&outcome);
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_state_change(&self.state);
        }
    }
}
