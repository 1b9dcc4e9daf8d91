use crate::*;

/// Total elimination: a side wins once the other has no pieces left anywhere on the board.
///
/// Red is checked first, so a board with no pieces at all reports black as the winner. That
/// position cannot arise in play since each move removes at most one piece.
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut red_found = false;
    let mut black_found = false;

    for (_, piece) in board.iter_pieces() {
        match piece.player {
            Player::Red => red_found = true,
            Player::Black => black_found = true,
        }
        if red_found && black_found {
            return None;
        }
    }

    if !red_found {
        Some(Player::Black)
    } else if !black_found {
        Some(Player::Red)
    } else {
        None
    }
}
