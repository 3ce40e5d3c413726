//! Rules engine trait.
//!
//! The turn engine asks the rules two questions: what may this seat do,
//! and is the round over. `DominoRules` answers them for the block game
//! played here.

use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase};

use super::scoring::{round_result, RoundResult};
use super::validator::{has_legal_move, legal_tiles};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the seat can't act
/// - `is_terminal`: Return None if the round continues
pub trait RulesEngine {
    /// Enumerate all legal actions for a seat.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Check whether the round is over.
    ///
    /// Returns `Some(result)` if the round has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<RoundResult>;

    /// Is the round blocked: deck exhausted and no seat able to play?
    fn is_blocked(&self, state: &GameState) -> bool;
}

/// Block dominoes on a single line of play.
#[derive(Clone, Copy, Debug, Default)]
pub struct DominoRules;

impl DominoRules {
    /// Create the rules.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for DominoRules {
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        // Only a human seat on its turn acts; the CPU moves through the engine
        if state.phase() != Phase::PlayerTurn(player) {
            return vec![];
        }

        let mut actions: Vec<Action> = legal_tiles(state.hand(player), state.board())
            .map(Action::Play)
            .collect();

        if !state.deck().is_empty() {
            actions.push(Action::Draw);
        }

        // Can always pass
        actions.push(Action::Pass);

        actions
    }

    fn is_terminal(&self, state: &GameState) -> Option<RoundResult> {
        round_result(
            state.hand(PlayerId::FIRST),
            state.hand(PlayerId::SECOND),
            self.is_blocked(state),
        )
    }

    fn is_blocked(&self, state: &GameState) -> bool {
        state.deck().is_empty()
            && PlayerId::all().all(|p| !has_legal_move(state.hand(p), state.board()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Deck, Tile};

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn state_with(first: &[Tile], second: &[Tile], deck: &[Tile], board: &[Tile]) -> GameState {
        let mut state = GameState::new();
        state.deal(Deck::from_tiles(deck.to_vec()).unwrap(), 0);
        for &t in first {
            state.hands[PlayerId::FIRST].add(t);
        }
        for &t in second {
            state.hands[PlayerId::SECOND].add(t);
        }
        for &t in board {
            state.board.place(t).unwrap();
        }
        state.phase = Phase::PlayerTurn(PlayerId::FIRST);
        state
    }

    #[test]
    fn test_legal_actions_for_acting_seat() {
        let state = state_with(&[tile(1, 2), tile(5, 5)], &[tile(0, 0)], &[tile(3, 3)], &[tile(2, 4)]);
        let rules = DominoRules::new();

        let actions = rules.legal_actions(&state, PlayerId::FIRST);
        assert_eq!(actions, vec![Action::Play(tile(1, 2)), Action::Draw, Action::Pass]);

        assert!(rules.legal_actions(&state, PlayerId::SECOND).is_empty());
    }

    #[test]
    fn test_no_actions_while_cpu_moves() {
        let mut state = state_with(&[tile(1, 2)], &[tile(2, 3)], &[tile(3, 3)], &[tile(2, 4)]);
        state.phase = Phase::CpuTurn;
        let rules = DominoRules::new();

        assert_eq!(state.to_act(), Some(PlayerId::SECOND));
        assert!(rules.legal_actions(&state, PlayerId::SECOND).is_empty());
        assert!(rules.legal_actions(&state, PlayerId::FIRST).is_empty());
    }

    #[test]
    fn test_no_draw_on_empty_deck() {
        let state = state_with(&[tile(6, 6)], &[tile(0, 0)], &[], &[tile(2, 4)]);
        let actions = DominoRules::new().legal_actions(&state, PlayerId::FIRST);
        assert_eq!(actions, vec![Action::Pass]);
    }

    #[test]
    fn test_not_terminal_while_deck_remains() {
        let state = state_with(&[tile(6, 6)], &[tile(0, 0)], &[tile(3, 3)], &[tile(2, 4)]);
        let rules = DominoRules::new();
        assert!(!rules.is_blocked(&state));
        assert_eq!(rules.is_terminal(&state), None);
    }

    #[test]
    fn test_not_blocked_while_someone_can_play() {
        let state = state_with(&[tile(6, 6)], &[tile(0, 4)], &[], &[tile(2, 4)]);
        let rules = DominoRules::new();
        assert!(!rules.is_blocked(&state));
        assert_eq!(rules.is_terminal(&state), None);
    }

    #[test]
    fn test_blocked_round() {
        let state = state_with(&[tile(6, 6)], &[tile(0, 1)], &[], &[tile(2, 4)]);
        let rules = DominoRules::new();
        assert!(rules.is_blocked(&state));
        assert_eq!(rules.is_terminal(&state), Some(RoundResult::Winner(PlayerId::SECOND)));
    }

    #[test]
    fn test_empty_hand_ends_round() {
        let state = state_with(&[], &[tile(0, 1)], &[tile(3, 3)], &[tile(2, 4)]);
        assert_eq!(
            DominoRules::new().is_terminal(&state),
            Some(RoundResult::Winner(PlayerId::FIRST))
        );
    }
}
