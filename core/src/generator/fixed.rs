use alloc::vec::Vec;

use super::*;

/// Scripted rounds: the same palette every time and a solution given as palette
/// indices. Useful for tests and replaying a known puzzle.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedRoundGenerator {
    palette: Vec<Color>,
    solution: Vec<CellCount>,
}

impl FixedRoundGenerator {
    pub fn new(palette: Vec<Color>, solution: Vec<CellCount>) -> Self {
        Self { palette, solution }
    }

    /// Solution used from the next round start on.
    pub fn set_solution(&mut self, solution: Vec<CellCount>) {
        self.solution = solution;
    }
}

impl RoundGenerator for FixedRoundGenerator {
    fn palette(&mut self, _layout: Coord2) -> Result<Vec<Color>> {
        Ok(self.palette.clone())
    }

    fn solution(&mut self, palette: &ColorPalette, width: Coord) -> Result<Vec<Color>> {
        if self.solution.len() != usize::from(width) {
            return Err(GameError::InvalidSolution);
        }
        self.solution
            .iter()
            .map(|&index| palette.color(index).ok_or(GameError::InvalidSolution))
            .collect()
    }
}
