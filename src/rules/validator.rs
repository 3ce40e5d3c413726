//! Move validation.
//!
//! A tile is playable when the board is empty, or when either of its pips
//! equals either open end. Orientation is free: a tile may be flipped to
//! match whichever end it fits.

use crate::tiles::Tile;
use crate::zones::{Board, Hand};

/// Can `tile` be laid on `board`?
///
/// ```
/// use rust_dominoes::rules::is_legal;
/// use rust_dominoes::tiles::Tile;
/// use rust_dominoes::zones::Board;
///
/// let board = Board::new();
/// assert!(is_legal(Tile::new(3, 5).unwrap(), &board));
/// ```
#[must_use]
pub fn is_legal(tile: Tile, board: &Board) -> bool {
    match board.open_ends() {
        None => true,
        Some((left, right)) => tile.has(left) || tile.has(right),
    }
}

/// Playable tiles in hand order.
pub fn legal_tiles<'a>(hand: &'a Hand, board: &'a Board) -> impl Iterator<Item = Tile> + 'a {
    hand.iter().filter(move |&tile| is_legal(tile, board))
}

/// Does the hand hold at least one playable tile?
#[must_use]
pub fn has_legal_move(hand: &Hand, board: &Board) -> bool {
    legal_tiles(hand, board).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Deck;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    /// A board whose open ends are exactly (left, right).
    fn board_with_ends(left: u8, right: u8) -> Board {
        let mut board = Board::new();
        board.place(tile(left, right)).unwrap();
        board
    }

    #[test]
    fn test_everything_legal_on_empty_board() {
        let board = Board::new();
        for &t in Deck::standard().tiles() {
            assert!(is_legal(t, &board));
        }
    }

    #[test]
    fn test_match_either_end() {
        let board = board_with_ends(5, 2);
        assert!(is_legal(tile(3, 5), &board));
        assert!(is_legal(tile(2, 0), &board));
        assert!(is_legal(tile(5, 2), &board));
    }

    #[test]
    fn test_no_match() {
        let board = board_with_ends(1, 2);
        assert!(!is_legal(tile(3, 5), &board));
        assert!(!is_legal(tile(6, 6), &board));
    }

    #[test]
    fn test_only_extremities_count() {
        let mut board = board_with_ends(1, 4);
        board.place(tile(4, 6)).unwrap();
        // 4 is now interior; ends are (1, 6)
        assert!(!is_legal(tile(4, 3), &board));
        assert!(is_legal(tile(6, 3), &board));
    }

    #[test]
    fn test_legal_tiles_preserve_hand_order() {
        let board = board_with_ends(0, 3);
        let hand: Hand = [tile(3, 6), tile(1, 1), tile(0, 5), tile(2, 4)].into_iter().collect();

        let legal: Vec<_> = legal_tiles(&hand, &board).collect();
        assert_eq!(legal, vec![tile(3, 6), tile(0, 5)]);
        assert!(has_legal_move(&hand, &board));
    }

    #[test]
    fn test_no_legal_move() {
        let board = board_with_ends(0, 0);
        let hand: Hand = [tile(1, 2), tile(5, 6)].into_iter().collect();
        assert!(!has_legal_move(&hand, &board));
        assert!(!has_legal_move(&Hand::new(), &board));
    }
}
