use rand::rngs::{SmallRng, SysRng};
use rand::seq::SliceRandom;
use rand::{SeedableRng, TryRng};

use super::*;

/// Deals the full piece set in a uniformly random order. The same seed always yields the same deal.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDealer {
    seed: u64,
}

impl RandomDealer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PieceDealer for RandomDealer {
    fn deal(self) -> Vec<Piece> {
        let mut pieces = full_piece_set();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        pieces.shuffle(&mut rng);

        if pieces.len() != TOTAL_PIECES {
            log::warn!(
                "Dealt piece count mismatch, actual: {}, expected: {}",
                pieces.len(),
                TOTAL_PIECES
            );
        }
        log::debug!("Dealt {} pieces with seed {:#018x}", pieces.len(), self.seed);
        pieces
    }
}

/// Seed drawn from the operating system's random source.
pub fn fresh_seed() -> Result<u64> {
    SysRng.try_next_u64().map_err(|err| {
        log::warn!("System random source unavailable: {err}");
        GameError::EntropyUnavailable
    })
}
