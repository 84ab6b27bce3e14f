use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::error::GameError;
use super::grid::{Board, Cell};
use super::occupancy::Occupancy;

/// Places items on free cells using a seedable RNG
#[derive(Debug, Clone)]
pub struct ItemSpawner {
    rng: SmallRng,
}

impl ItemSpawner {
    /// Seeded spawners produce the same placements for the same game
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a uniformly random free cell.
    ///
    /// Fails with [`GameError::SpawnExhausted`] instead of sampling when
    /// every cell is already occupied.
    pub fn spawn(&mut self, board: &Board, occupancy: &Occupancy<'_>) -> Result<Cell, GameError> {
        if occupancy.occupied_count() >= board.cell_count() {
            return Err(GameError::SpawnExhausted {
                rows: board.rows(),
                columns: board.columns(),
            });
        }

        loop {
            let cell = Cell::new(
                self.rng.gen_range(1..=board.rows()),
                self.rng.gen_range(1..=board.columns()),
            );

            if !occupancy.is_occupied(cell) {
                return Ok(cell);
            }
        }
    }
}
