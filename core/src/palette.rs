use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Selectable colors for one round, laid out on their own grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    colors: Vec<Color>,
    grid: Grid<Peg>,
}

impl ColorPalette {
    /// Builds a palette for `grid`, one distinct color per cell, row-major.
    pub fn new(colors: Vec<Color>, mut grid: Grid<Peg>) -> Result<Self> {
        let expected = grid.len();
        if colors.len() != usize::from(expected) {
            return Err(GameError::PaletteSize {
                expected,
                actual: colors.len(),
            });
        }

        let mut seen = HashSet::with_capacity(colors.len());
        if let Some(&duplicate) = colors.iter().find(|&&color| !seen.insert(color)) {
            return Err(GameError::DuplicateColor(duplicate));
        }

        let pegs: Vec<Peg> = colors.iter().copied().map(Peg::from).collect();
        grid.fill_from(&pegs)?;
        Ok(Self { colors, grid })
    }

    pub fn len(&self) -> CellCount {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn layout(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid<Peg> {
        &self.grid
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn color(&self, index: CellCount) -> Option<Color> {
        self.colors.get(usize::from(index)).copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn index_of(&self, color: Color) -> Option<CellCount> {
        self.colors
            .iter()
            .position(|&candidate| candidate == color)
            .and_then(|index| index.try_into().ok())
    }
}
