use core::fmt;
use serde::{Deserialize, Serialize};

/// Piece strength, 1 being the general and 7 the soldier. Lower numbers are stronger.
pub type Rank = u8;

pub const GENERAL_RANK: Rank = 1;
pub const SOLDIER_RANK: Rank = 7;

pub const PIECES_PER_PLAYER: usize = 16;
pub const TOTAL_PIECES: usize = 2 * PIECES_PER_PLAYER;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Chariot,
    Horse,
    Cannon,
    Soldier,
}

impl PieceKind {
    /// All kinds, strongest first.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Chariot,
        PieceKind::Horse,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    pub const fn rank(self) -> Rank {
        match self {
            Self::General => 1,
            Self::Advisor => 2,
            Self::Elephant => 3,
            Self::Chariot => 4,
            Self::Horse => 5,
            Self::Cannon => 6,
            Self::Soldier => 7,
        }
    }

    /// How many pieces of this kind each player starts with.
    pub const fn count_per_player(self) -> usize {
        match self {
            Self::General => 1,
            Self::Soldier => 5,
            _ => 2,
        }
    }

    pub const fn is_cannon(self) -> bool {
        matches!(self, Self::Cannon)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self { kind, player }
    }

    pub const fn rank(self) -> Rank {
        self.kind.rank()
    }

    pub const fn glyph(self) -> char {
        use PieceKind::*;
        use Player::*;

        match (self.player, self.kind) {
            (Black, General) => '將',
            (Black, Advisor) => '士',
            (Black, Elephant) => '象',
            (Black, Chariot) => '車',
            (Black, Horse) => '馬',
            (Black, Cannon) => '包',
            (Black, Soldier) => '卒',
            (Red, General) => '帥',
            (Red, Advisor) => '仕',
            (Red, Elephant) => '相',
            (Red, Chariot) => '俥',
            (Red, Horse) => '傌',
            (Red, Cannon) => '炮',
            (Red, Soldier) => '兵',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        use PieceKind::*;
        use Player::*;

        let (player, kind) = match glyph {
            '將' => (Black, General),
            '士' => (Black, Advisor),
            '象' => (Black, Elephant),
            '車' => (Black, Chariot),
            '馬' => (Black, Horse),
            '包' => (Black, Cannon),
            '卒' => (Black, Soldier),
            '帥' => (Red, General),
            '仕' => (Red, Advisor),
            '相' => (Red, Elephant),
            '俥' => (Red, Chariot),
            '傌' => (Red, Horse),
            '炮' => (Red, Cannon),
            '兵' => (Red, Soldier),
            _ => return None,
        };
        Some(Self::new(kind, player))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Rank lookup by glyph, defined for the fourteen piece glyphs only.
pub const fn rank_of_glyph(glyph: char) -> Option<Rank> {
    match Piece::from_glyph(glyph) {
        Some(piece) => Some(piece.rank()),
        None => None,
    }
}
