//! Scoring and round termination.
//!
//! A round is won by emptying your hand. When the deck is exhausted and
//! neither seat can play (a blocked round), the lighter hand wins; equal pip
//! counts tie. Round wins add a fixed number of points to a cumulative score
//! and the match ends once a seat reaches the goal.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};
use crate::zones::Hand;

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// One seat won the round.
    Winner(PlayerId),
    /// Blocked round with equal hand scores.
    Tie,
}

impl RoundResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, RoundResult::Winner(p) if *p == player)
    }

    /// The winning seat, if not a tie.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundResult::Winner(p) => Some(*p),
            RoundResult::Tie => None,
        }
    }
}

/// Everything an observer needs once a round is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Round number that just ended.
    pub round: u32,
    /// How the round ended.
    pub result: RoundResult,
    /// Was the round blocked (deck exhausted, nobody able to play)?
    pub blocked: bool,
    /// Points awarded for this round.
    pub points_awarded: u32,
    /// Cumulative scores after the award.
    pub scores: PlayerMap<u32>,
    /// Set when a seat has reached the score goal.
    pub match_winner: Option<PlayerId>,
}

impl GameOutcome {
    /// Has the match been decided?
    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.match_winner.is_some()
    }
}

/// Sum of both pips over every tile in hand (0 for an empty hand).
#[must_use]
pub fn hand_score(hand: &Hand) -> u32 {
    hand.score()
}

/// Decide a round from the two hands.
///
/// `blocked` means the deck is exhausted and neither seat can play. Returns
/// `None` while the round is still undecided.
///
/// ```
/// use rust_dominoes::core::PlayerId;
/// use rust_dominoes::rules::{round_result, RoundResult};
/// use rust_dominoes::tiles::Tile;
/// use rust_dominoes::zones::Hand;
///
/// let first: Hand = [Tile::new(2, 3).unwrap()].into_iter().collect();
/// let second: Hand = [Tile::new(1, 1).unwrap()].into_iter().collect();
///
/// // Blocked: 5 pips against 2, lower wins
/// assert_eq!(round_result(&first, &second, true), Some(RoundResult::Winner(PlayerId::SECOND)));
/// assert_eq!(round_result(&first, &second, false), None);
/// ```
#[must_use]
pub fn round_result(first: &Hand, second: &Hand, blocked: bool) -> Option<RoundResult> {
    if first.is_empty() {
        return Some(RoundResult::Winner(PlayerId::FIRST));
    }
    if second.is_empty() {
        return Some(RoundResult::Winner(PlayerId::SECOND));
    }
    if !blocked {
        return None;
    }

    let (a, b) = (hand_score(first), hand_score(second));
    Some(match a.cmp(&b) {
        std::cmp::Ordering::Less => RoundResult::Winner(PlayerId::FIRST),
        std::cmp::Ordering::Greater => RoundResult::Winner(PlayerId::SECOND),
        std::cmp::Ordering::Equal => RoundResult::Tie,
    })
}

/// Has either cumulative score reached the goal?
#[must_use]
pub fn is_match_over(first_score: u32, second_score: u32, score_goal: u32) -> bool {
    first_score >= score_goal || second_score >= score_goal
}

/// The seat that reached the goal, preferring the higher score.
#[must_use]
pub fn match_winner(scores: &PlayerMap<u32>, score_goal: u32) -> Option<PlayerId> {
    let (first, second) = (scores[PlayerId::FIRST], scores[PlayerId::SECOND]);
    if !is_match_over(first, second, score_goal) {
        return None;
    }
    Some(if first >= second { PlayerId::FIRST } else { PlayerId::SECOND })
}
