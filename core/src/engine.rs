use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Whose move it is. Nobody owns the first move; it is always a flip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Undetermined,
    Player(Player),
}

impl Turn {
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Undetermined => None,
            Self::Player(player) => Some(player),
        }
    }

    /// The very first flip hands the move to whoever did not just get revealed.
    const fn after_flip(self, revealed: Player) -> Self {
        match self {
            Self::Undetermined => Self::Player(revealed.opponent()),
            Self::Player(player) => Self::Player(player.opponent()),
        }
    }

    const fn passed(self) -> Self {
        match self {
            Self::Undetermined => Self::Undetermined,
            Self::Player(player) => Self::Player(player.opponent()),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won(Player),
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_))
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Ongoing => None,
            Self::Won(player) => Some(player),
        }
    }
}

/// Captured piece kinds, listed under the player who lost them, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    red: SmallVec<[PieceKind; PIECES_PER_PLAYER]>,
    black: SmallVec<[PieceKind; PIECES_PER_PLAYER]>,
}

impl CapturedPieces {
    pub fn lost_by(&self, player: Player) -> &[PieceKind] {
        match player {
            Player::Red => self.red.as_slice(),
            Player::Black => self.black.as_slice(),
        }
    }

    pub fn total(&self) -> usize {
        self.red.len() + self.black.len()
    }

    fn record(&mut self, piece: Piece) {
        match piece.player {
            Player::Red => self.red.push(piece.kind),
            Player::Black => self.black.push(piece.kind),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Flipped(Piece),
    Selected,
    MoveRejected,
    Moved,
    Captured(Piece),
    Won(Player),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Authoritative game state. Every click either performs one full state transition or none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    flipped: Array2<bool>,
    turn: Turn,
    status: GameStatus,
    selected: Option<Coord2>,
    captured: CapturedPieces,
    seed: Option<u64>,
}

impl GameSession {
    /// Starts a game on `board` with every piece face-down.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            flipped: Array2::default(BOARD_SIZE.to_nd_index()),
            turn: Turn::default(),
            status: GameStatus::default(),
            selected: None,
            captured: CapturedPieces::default(),
            seed: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let seed = config.resolve_seed()?;
        let pieces = RandomDealer::new(seed).deal();
        let mut session = Self::new(create_board(&pieces)?);
        session.seed = Some(seed);
        log::debug!("New game with seed {seed:#018x}");
        Ok(session)
    }

    /// Throws the current game away and deals a new one.
    pub fn reset(&mut self, config: &GameConfig) -> Result<()> {
        *self = Self::from_config(config)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Seed the board was dealt from, if it was dealt by this session.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_flipped(&self, coords: Coord2) -> bool {
        in_bounds(coords) && self.flipped[coords.to_nd_index()]
    }

    /// Occupied and not yet revealed. Empty cells are never face-down.
    pub fn is_face_down(&self, coords: Coord2) -> bool {
        self.board.is_occupied(coords) && !self.is_flipped(coords)
    }

    /// Destinations available to the currently selected piece.
    pub fn legal_targets_for_selection(&self) -> Vec<Coord2> {
        self.selected
            .map(|from| legal_targets(&self.board, from))
            .unwrap_or_default()
    }

    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.is_face_down(coords) {
            return Ok(self.flip(coords));
        }

        Ok(match self.selected.take() {
            Some(from) => self.try_move(from, coords),
            None => self.select(coords),
        })
    }

    fn flip(&mut self, coords: Coord2) -> ClickOutcome {
        let Some(piece) = self.board.get(coords) else {
            return ClickOutcome::NoChange;
        };

        self.flipped[coords.to_nd_index()] = true;
        self.selected = None;
        self.turn = self.turn.after_flip(piece.player);
        log::debug!("Flipped {piece} at {coords:?}, next turn {:?}", self.turn);

        match self.update_status() {
            Some(winner) => ClickOutcome::Won(winner),
            None => ClickOutcome::Flipped(piece),
        }
    }

    fn select(&mut self, coords: Coord2) -> ClickOutcome {
        let mover = self.turn.player();
        match self.board.get(coords) {
            Some(piece) if Some(piece.player) == mover => {
                self.selected = Some(coords);
                ClickOutcome::Selected
            }
            _ => {
                log::trace!("Ignored selection at {coords:?} for {mover:?}");
                ClickOutcome::NoChange
            }
        }
    }

    fn try_move(&mut self, from: Coord2, to: Coord2) -> ClickOutcome {
        if !is_valid_move(&self.board, from, to) {
            log::trace!("Rejected move {from:?} -> {to:?}");
            return ClickOutcome::MoveRejected;
        }

        let Some(piece) = self.board[from] else {
            return ClickOutcome::MoveRejected;
        };
        self.board[from] = None;
        let taken = self.board[to].replace(piece);
        self.flipped[to.to_nd_index()] = true;
        if let Some(taken) = taken {
            self.captured.record(taken);
        }
        self.turn = self.turn.passed();
        log::debug!("Moved {piece} {from:?} -> {to:?}, captured {taken:?}");

        match (self.update_status(), taken) {
            (Some(winner), _) => ClickOutcome::Won(winner),
            (None, Some(taken)) => ClickOutcome::Captured(taken),
            (None, None) => ClickOutcome::Moved,
        }
    }

    fn update_status(&mut self) -> Option<Player> {
        let winner = check_winner(&self.board)?;
        self.status = GameStatus::Won(winner);
        log::debug!("Game over, {winner} wins");
        Some(winner)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
