use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 4×8 grid of cells. Each cell is either empty or holds one piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default(BOARD_SIZE.to_nd_index()),
        }
    }

    /// Lays `pieces` into the grid in row-major order, filling every cell exactly once.
    pub fn from_pieces(pieces: &[Piece]) -> Result<Self> {
        if pieces.len() != TOTAL_CELLS {
            return Err(GameError::InvalidPieceCount {
                expected: TOTAL_CELLS,
                actual: pieces.len(),
            });
        }

        let mut board = Self::empty();
        for (coords, &piece) in iter_coords().zip(pieces) {
            board.cells[coords.to_nd_index()] = Some(piece);
        }
        Ok(board)
    }

    /// Builds a sparse board, mostly useful for setting up positions by hand.
    pub fn from_placements(placements: &[(Coord2, Piece)]) -> Result<Self> {
        let mut board = Self::empty();
        for &(coords, piece) in placements {
            board.place(coords, piece)?;
        }
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Piece at `coords`, `None` for both empty and off-board cells.
    pub fn get(&self, coords: Coord2) -> Option<Piece> {
        if in_bounds(coords) {
            self.cells[coords.to_nd_index()]
        } else {
            None
        }
    }

    pub fn is_occupied(&self, coords: Coord2) -> bool {
        self.get(coords).is_some()
    }

    pub fn place(&mut self, coords: Coord2, piece: Piece) -> Result<Option<Piece>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].replace(piece))
    }

    pub fn take(&mut self, coords: Coord2) -> Result<Option<Piece>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()].take())
    }

    /// Iterates occupied cells in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Coord2, Piece)> + '_ {
        iter_coords().filter_map(|coords| self.get(coords).map(|piece| (coords, piece)))
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.iter_pieces()
            .filter(|(_, piece)| piece.player == player)
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

/// Panics on off-board coordinates; use [`Board::get`] for a bounds-checked read.
impl Index<Coord2> for Board {
    type Output = Option<Piece>;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

/// Panics on off-board coordinates; use [`Board::place`] or [`Board::take`] for checked writes.
impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[(row as usize, col as usize)]
    }
}
