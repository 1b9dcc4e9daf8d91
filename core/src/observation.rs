use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What either player can see of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Empty,
    Revealed(Piece),
}

/// Player-visible snapshot of a session. Face-down identities never leave the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub cells: Array2<CellView>,
    pub turn: Turn,
    pub status: GameStatus,
    pub selected: Option<Coord2>,
    pub targets: Vec<Coord2>,
    pub captured_red: Vec<PieceKind>,
    pub captured_black: Vec<PieceKind>,
}

impl Observation {
    pub fn from_session(session: &GameSession) -> Self {
        let mut cells = Array2::from_elem(BOARD_SIZE.to_nd_index(), CellView::Hidden);

        for coords in iter_coords() {
            cells[coords.to_nd_index()] = match session.board().get(coords) {
                None => CellView::Empty,
                Some(_) if session.is_face_down(coords) => CellView::Hidden,
                Some(piece) => CellView::Revealed(piece),
            };
        }

        let captured = session.captured();
        Self {
            cells,
            turn: session.turn(),
            status: session.status(),
            selected: session.selected(),
            targets: session.legal_targets_for_selection(),
            captured_red: captured.lost_by(Player::Red).to_vec(),
            captured_black: captured.lost_by(Player::Black).to_vec(),
        }
    }

    /// Off-board coordinates read as empty, matching [`Board::get`].
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(CellView::Empty)
    }

    pub fn hidden_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellView::Hidden)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_is_all_hidden() {
        let session = GameSession::from_config(&GameConfig::seeded(3)).unwrap();
        let obs = Observation::from_session(&session);

        assert_eq!(obs.hidden_count(), 32);
        assert_eq!(obs.turn, Turn::Undetermined);
        assert!(obs.targets.is_empty());
    }

    #[test]
    fn maps_revealed_hidden_and_empty_cells() {
        let red_chariot = Piece::new(PieceKind::Chariot, Player::Red);
        let black_soldier = Piece::new(PieceKind::Soldier, Player::Black);
        let board = Board::from_placements(&[((0, 0), red_chariot), ((2, 2), black_soldier)])
            .unwrap();
        let mut session = GameSession::new(board);

        session.click((0, 0)).unwrap();
        let obs = Observation::from_session(&session);

        assert_eq!(obs.cell_at((0, 0)), CellView::Revealed(red_chariot));
        assert_eq!(obs.cell_at((2, 2)), CellView::Hidden);
        assert_eq!(obs.cell_at((0, 1)), CellView::Empty);
        assert_eq!(obs.cell_at((4, 0)), CellView::Empty);
        assert_eq!(obs.cell_at((0, 8)), CellView::Empty);
        assert_eq!(obs.hidden_count(), 1);
        assert_eq!(obs.turn, Turn::Player(Player::Black));
    }

    #[test]
    fn includes_selection_targets_and_captures() {
        let board = Board::from_placements(&[
            ((0, 0), Piece::new(PieceKind::Horse, Player::Black)),
            ((0, 1), Piece::new(PieceKind::Cannon, Player::Red)),
            ((3, 7), Piece::new(PieceKind::General, Player::Red)),
        ])
        .unwrap();
        let mut session = GameSession::new(board);

        session.click((0, 0)).unwrap();
        session.click((0, 1)).unwrap();
        session.click((0, 0)).unwrap();

        let obs = Observation::from_session(&session);
        assert_eq!(obs.selected, Some((0, 0)));
        assert_eq!(obs.targets, [(0, 1), (1, 0)]);

        session.click((0, 1)).unwrap();
        let obs = Observation::from_session(&session);
        assert_eq!(obs.captured_red, [PieceKind::Cannon]);
        assert!(obs.captured_black.is_empty());
        assert_eq!(obs.selected, None);
    }
}
