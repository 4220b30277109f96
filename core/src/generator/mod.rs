use crate::*;
pub use shuffle::*;

mod shuffle;

/// Strategy for choosing where the mines go on a fresh board.
///
/// Implementations reject configs that fail [`GameConfig::validate`].
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
