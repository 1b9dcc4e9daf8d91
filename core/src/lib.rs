#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observation::*;
pub use piece::*;
pub use rules::*;
pub use types::*;
pub use winner::*;

mod board;
mod engine;
mod error;
mod generator;
mod observation;
mod piece;
mod rules;
mod types;
mod winner;

/// Per-game settings. Without a seed every new game is dealt from a fresh one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub const fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn resolve_seed(&self) -> Result<u64> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => fresh_seed(),
        }
    }
}
