use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Purely random placement: every set of `mines` distinct cells is equally likely.
///
/// All cell indices are shuffled with Fisher-Yates and the first `mines` of them become mines, so
/// the exact count is hit without rejection sampling. The same seed and config always produce the
/// same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleLayoutGenerator {
    seed: u64,
}

impl ShuffleLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for ShuffleLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;
        let total_cells = config.total_cells();

        let mut cells: Vec<CellCount> = (0..total_cells).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..cells.len()).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        {
            let mask = mine_mask
                .as_slice_mut()
                .expect("freshly allocated array is in standard layout");
            for &index in &cells[..config.mines as usize] {
                mask[index as usize] = true;
            }
        }

        log::trace!(
            "Placed {} mines on a {} * {} board with seed {}",
            config.mines,
            config.height(),
            config.width(),
            self.seed
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}
