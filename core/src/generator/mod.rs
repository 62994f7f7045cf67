use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of the colors used by a round.
///
/// Called once per round start: first for the palette, then for the solution drawn
/// from the palette that was just built.
pub trait RoundGenerator {
    /// Exactly `rows * cols` distinct colors for a palette laid out as `layout`.
    fn palette(&mut self, layout: Coord2) -> Result<Vec<Color>>;

    /// `width` colors taken from `palette`, repeats allowed.
    fn solution(&mut self, palette: &ColorPalette, width: Coord) -> Result<Vec<Color>>;
}
