use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

pub trait PieceDealer {
    fn deal(self) -> Vec<Piece>;
}

/// The unshuffled 32-piece set: every kind in catalog order, black first, then red.
pub fn full_piece_set() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(TOTAL_PIECES);
    for player in [Player::Black, Player::Red] {
        for kind in PieceKind::ALL {
            for _ in 0..kind.count_per_player() {
                pieces.push(Piece::new(kind, player));
            }
        }
    }
    pieces
}

/// Shuffled piece set for a new game, seeded from a fresh nondeterministic seed.
pub fn initialize_pieces() -> Result<Vec<Piece>> {
    Ok(RandomDealer::new(fresh_seed()?).deal())
}

/// Places a dealt sequence onto the board in row-major order.
pub fn create_board(pieces: &[Piece]) -> Result<Board> {
    Board::from_pieces(pieces)
}
