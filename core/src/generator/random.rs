use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Places mines uniformly at random by rejection sampling, then computes adjacency counts.
#[derive(Clone, Debug)]
pub struct RandomFieldGenerator {
    rng: SmallRng,
}

impl RandomFieldGenerator {
    /// Reproducible generator, the same seed always yields the same sequence of grids.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl FieldGenerator for RandomFieldGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid {
        let mut grid = Grid::empty(config.size());

        // `GameConfig` always leaves a cell free, so this terminates
        let mines = config.mines();
        let mut attempts: u32 = 0;
        let mut placed = 0;
        while placed < mines {
            let coords = (
                self.rng.random_range(0..config.rows()),
                self.rng.random_range(0..config.cols()),
            );
            attempts += 1;
            if grid.place_mine(coords) {
                placed += 1;
            }
        }
        log::trace!("Placed {} mines in {} attempts", placed, attempts);

        grid.compute_counts();
        grid
    }
}
