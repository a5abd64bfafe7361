use crate::*;
pub use random::*;

mod random;

/// Source of freshly generated grids.
///
/// Sessions call this once per game and again while relocating mines away from the first revealed cell, so
/// implementations must be reusable.
pub trait FieldGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid;
}
