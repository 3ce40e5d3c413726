//! Property tests for shuffling, dealing, and whole rounds.

use proptest::prelude::*;

use rust_dominoes::core::{GameMode, GameRng, GameState, MatchConfig, Phase, PlayerId};
use rust_dominoes::engine::TurnEngine;
use rust_dominoes::tiles::{Deck, Tile, DECK_SIZE};

fn sorted(mut tiles: Vec<Tile>) -> Vec<Tile> {
    tiles.sort();
    tiles
}

fn all_tiles(state: &GameState) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = state.deck().tiles().to_vec();
    for player in PlayerId::all() {
        tiles.extend(state.hand(player).iter());
    }
    tiles.extend(state.board().tiles());
    sorted(tiles)
}

proptest! {
    /// Shuffling any slice keeps the same multiset and length.
    #[test]
    fn shuffle_is_permutation(seed in any::<u64>(), items in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut rng = GameRng::new(seed);
        let mut shuffled = items.clone();
        rng.shuffle(&mut shuffled);

        prop_assert_eq!(shuffled.len(), items.len());
        let mut a = items.clone();
        let mut b = shuffled;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    /// A shuffled deck is still the full double-six set.
    #[test]
    fn initialized_deck_is_complete(seed in any::<u64>()) {
        let deck = Deck::initialize(&mut GameRng::new(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(
            sorted(deck.tiles().to_vec()),
            sorted(Deck::standard().tiles().to_vec())
        );
    }

    /// Dealing partitions the 28 tiles between the hands and the deck.
    #[test]
    fn deal_partitions_tiles(seed in any::<u64>(), deal_count in 1usize..=14) {
        let mut engine = TurnEngine::new();
        let config = MatchConfig::new(GameMode::HumanVsHuman)
            .with_deal_count(deal_count)
            .with_seed(seed);
        engine.start_game(config).unwrap();
        let state = engine.state();

        prop_assert_eq!(state.deck().len(), DECK_SIZE - 2 * deal_count);
        prop_assert_eq!(state.hand(PlayerId::FIRST).len(), deal_count);
        prop_assert_eq!(state.hand(PlayerId::SECOND).len(), deal_count);

        let first = state.hand(PlayerId::FIRST);
        for t in state.hand(PlayerId::SECOND).iter() {
            prop_assert!(!first.contains(t));
        }
        prop_assert_eq!(all_tiles(state), sorted(Deck::standard().tiles().to_vec()));
    }

    /// Any seeded round against the CPU ends, conserves tiles, and awards
    /// points to at most one seat.
    #[test]
    fn rounds_terminate(seed in any::<u64>(), deal_count in 1usize..=10) {
        let mut engine = TurnEngine::new();
        let config = MatchConfig::new(GameMode::HumanVsCpu)
            .with_deal_count(deal_count)
            .with_seed(seed);
        engine.start_game(config).unwrap();
        let standard = sorted(Deck::standard().tiles().to_vec());

        for _ in 0..500 {
            let Some(player) = engine.state().to_act() else { break };
            let action = engine.legal_actions(player)[0];
            engine.apply_action(player, action).unwrap();
            prop_assert_eq!(all_tiles(engine.state()), standard.clone());
        }

        let state = engine.state();
        prop_assert_eq!(state.phase(), Phase::GameOver);
        let total = state.score(PlayerId::FIRST) + state.score(PlayerId::SECOND);
        prop_assert!(total == 0 || total == 10);
    }
}
