//! CPU move selection.

use crate::rules::legal_tiles;
use crate::tiles::Tile;
use crate::zones::{Board, Hand};

/// Policy for picking the CPU's tile.
pub trait CpuStrategy {
    /// Choose a tile to play, or `None` to draw and pass.
    ///
    /// The engine re-checks legality before laying the returned tile.
    fn choose_move(&self, hand: &Hand, board: &Board) -> Option<Tile>;
}

/// Play the first legal tile in hand order.
///
/// No lookahead and no blocking play: this is the whole CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl CpuStrategy for FirstLegal {
    fn choose_move(&self, hand: &Hand, board: &Board) -> Option<Tile> {
        legal_tiles(hand, board).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn test_first_tile_on_empty_board() {
        let hand: Hand = [tile(4, 4), tile(0, 1)].into_iter().collect();
        assert_eq!(FirstLegal.choose_move(&hand, &Board::new()), Some(tile(4, 4)));
    }

    #[test]
    fn test_scans_in_hand_order() {
        let mut board = Board::new();
        board.place(tile(2, 6)).unwrap();

        let hand: Hand = [tile(0, 0), tile(6, 1), tile(2, 3)].into_iter().collect();
        assert_eq!(FirstLegal.choose_move(&hand, &board), Some(tile(1, 6)));
    }

    #[test]
    fn test_none_when_nothing_fits() {
        let mut board = Board::new();
        board.place(tile(2, 6)).unwrap();

        let hand: Hand = [tile(0, 0), tile(1, 3)].into_iter().collect();
        assert_eq!(FirstLegal.choose_move(&hand, &board), None);
        assert_eq!(FirstLegal.choose_move(&Hand::new(), &board), None);
    }
}
