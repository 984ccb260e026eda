use super::*;

/// Generation strategy that picks every mine position uniformly at random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the generator from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::{SeedableRng, rngs::SmallRng, seq::index};

        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines);
        let mut mine_mask: Array2<bool> = Array2::default(config.grid_shape());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mine_mask
                .as_slice_mut()
                .expect("freshly allocated grid is in standard layout");
            // distinct row-major indices, so exactly `mines` cells get set
            for place in index::sample(&mut rng, total_cells, mines).into_iter() {
                cells[place] = true;
            }
        }

        // double check mine count
        let count = mine_mask.iter().filter(|&&cell| cell).count();
        if count != mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                mines
            );
        }
        log::debug!(
            "Sowed {} mines on a {}x{} grid (seed {})",
            count,
            config.width,
            config.height,
            self.seed
        );

        MineLayout::from_parts(config, mine_mask)
    }
}
